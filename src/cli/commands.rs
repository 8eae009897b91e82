// file: src/cli/commands.rs
// version: 1.0.0
// guid: a5b9c3d7-0e24-4fdc-b1a3-5c7d9e1f3a50

//! Command implementations dispatched from main

use crate::os::{self, OsRelease};
use crate::prompt::TerminalPrompt;
use crate::steps::{self, HardenPaths, PipelineOptions};
use crate::system::LocalRunner;
use crate::Result;
use std::path::PathBuf;
use tracing::info;

/// Full provisioning run against the local machine
pub async fn run_command(
    project_dir: &str,
    admin_home: Option<String>,
    no_restart: bool,
) -> Result<()> {
    let mut opts = PipelineOptions {
        project_dir_name: project_dir.to_string(),
        restart_sshd: !no_restart,
        ..PipelineOptions::default()
    };
    if let Some(home) = admin_home {
        opts.admin_home = PathBuf::from(home);
    }

    let mut runner = LocalRunner::new();
    let mut prompts = TerminalPrompt;
    steps::run_pipeline(&mut runner, &mut prompts, &opts).await
}

/// Print the detected distribution and selected package-manager profile
pub async fn detect_os_command(os_release: &str, json: bool) -> Result<()> {
    let release = OsRelease::load(os_release).await?;
    let pkg = os::select_package_manager(&release.id)?;

    if json {
        let doc = serde_json::json!({
            "id": release.id,
            "version_id": release.version_id,
            "package_manager": pkg,
            "update_command": pkg.update_command(),
            "install_command": pkg.install_command(),
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        println!(
            "{} {} -> {} profile",
            release.id,
            release.version_id.as_deref().unwrap_or("unknown"),
            pkg.as_str()
        );
    }

    Ok(())
}

/// Standalone sshd hardening
pub async fn harden_ssh_command(config: &str, dropin: &str, no_restart: bool) -> Result<()> {
    let paths = HardenPaths {
        config: PathBuf::from(config),
        dropin: PathBuf::from(dropin),
    };

    // Service name follows the detected distribution family
    let release = OsRelease::load(os::OS_RELEASE_PATH).await?;
    let pkg = os::select_package_manager(&release.id)?;

    let mut runner = LocalRunner::new();
    steps::ssh_harden::harden_sshd(&mut runner, &paths, pkg.sshd_service(), !no_restart).await?;
    info!("sshd hardening complete");
    Ok(())
}
