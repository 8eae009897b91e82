// file: src/steps/ssh_harden.rs
// version: 1.0.0
// guid: b0c4d8e2-5f79-4aed-c6b8-0d2e4f6a8b05

//! OpenSSH daemon hardening

use crate::sshd;
use crate::system::CommandRunner;
use crate::Result;
use std::path::PathBuf;
use tracing::{info, warn};

/// Filesystem locations used by the hardening step; overridable for tests
/// and for the standalone `harden-ssh` subcommand.
#[derive(Debug, Clone)]
pub struct HardenPaths {
    /// sshd_config to patch
    pub config: PathBuf,
    /// Conflicting drop-in removed if present
    pub dropin: PathBuf,
}

impl Default for HardenPaths {
    fn default() -> Self {
        Self {
            config: PathBuf::from(sshd::SSHD_CONFIG_PATH),
            dropin: PathBuf::from(sshd::SSHD_CLOUD_INIT_DROPIN),
        }
    }
}

/// Patch the daemon config, remove the conflicting drop-in, validate, and
/// restart the service.
///
/// The restart must never run against a config that failed validation; a
/// non-zero `sshd -t` aborts first.
pub async fn harden_sshd<R: CommandRunner>(
    runner: &mut R,
    paths: &HardenPaths,
    service: &str,
    restart: bool,
) -> Result<()> {
    info!("Hardening {}", paths.config.display());

    let content = tokio::fs::read_to_string(&paths.config).await?;
    let patched = sshd::apply_hardening(&content);
    tokio::fs::write(&paths.config, &patched).await?;

    if paths.dropin.exists() {
        warn!("Removing conflicting drop-in {}", paths.dropin.display());
        tokio::fs::remove_file(&paths.dropin).await?;
    }

    let validate_cmd = format!("sshd -t -f {}", paths.config.display());
    let (code, _, stderr) = runner
        .run_with_status(&validate_cmd, "Validating sshd configuration")
        .await?;
    if code != 0 {
        return Err(crate::error::ProvisionError::Process {
            command: validate_cmd,
            exit_code: Some(code),
            stderr,
        });
    }

    if restart {
        runner
            .run(&format!("systemctl restart {}", service))
            .await?;
        info!("Restarted {} service", service);
    }

    Ok(())
}
