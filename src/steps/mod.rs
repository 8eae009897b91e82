// file: src/steps/mod.rs
// version: 1.0.0
// guid: d2e6f0a4-7b91-4caf-e8d0-2f4a6b8c0d27

//! Ordered provisioning pipeline
//!
//! Steps run strictly top to bottom; the first error aborts the whole run.
//! There is no rollback of partially applied state.

pub mod account;
pub mod packages;
pub mod shell_profile;
pub mod ssh_harden;
pub mod ssh_keys;
pub mod workspace;

pub use ssh_harden::HardenPaths;

use crate::context::ProvisionContext;
use crate::os::{self, OsRelease};
use crate::prompt::{self, PromptSource};
use crate::system::CommandRunner;
use crate::Result;
use std::path::PathBuf;
use tracing::info;

/// Inputs of a full provisioning run
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    /// os-release identity file to detect the distribution from
    pub os_release_path: PathBuf,
    /// Shells registry the alternate shell gets appended to
    pub shells_path: PathBuf,
    /// Home directory of the administrator running the agent
    pub admin_home: PathBuf,
    /// Base directory for user homes
    pub home_base: PathBuf,
    /// Project directory to relocate, relative to the admin home
    pub project_dir_name: String,
    /// sshd config locations for the hardening step
    pub harden: HardenPaths,
    /// Whether to restart the sshd service after successful validation
    pub restart_sshd: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            os_release_path: PathBuf::from(os::OS_RELEASE_PATH),
            shells_path: PathBuf::from(packages::SHELLS_PATH),
            admin_home: dirs::home_dir().unwrap_or_else(|| PathBuf::from("/root")),
            home_base: PathBuf::from("/home"),
            project_dir_name: "homelab".to_string(),
            harden: HardenPaths::default(),
            restart_sshd: true,
        }
    }
}

/// Run the full provisioning pipeline
pub async fn run_pipeline<R: CommandRunner>(
    runner: &mut R,
    prompts: &mut dyn PromptSource,
    opts: &PipelineOptions,
) -> Result<()> {
    let release = OsRelease::load(&opts.os_release_path).await?;
    let pkg = os::select_package_manager(&release.id)?;
    info!(
        "Detected {} {} -> {} profile",
        release.id,
        release.version_id.as_deref().unwrap_or("unknown"),
        pkg.as_str()
    );

    let mut ctx = ProvisionContext::new(pkg, opts.admin_home.clone(), opts.project_dir_name.clone());
    ctx.home_base = opts.home_base.clone();

    packages::install_packages(runner, &mut ctx, &opts.shells_path).await?;

    ctx.username = prompt::collect_username(prompts)?;
    ctx.password = prompt::collect_password(prompts)?;

    account::create_account(runner, &ctx).await?;
    ssh_keys::migrate_ssh_keys(runner, &ctx).await?;
    shell_profile::install_shell_profile(runner, &ctx).await?;
    ssh_harden::harden_sshd(runner, &opts.harden, pkg.sshd_service(), opts.restart_sshd).await?;
    workspace::migrate_workspace(runner, &ctx).await?;

    info!("Provisioning complete for '{}'", ctx.username);
    Ok(())
}
