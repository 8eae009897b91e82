// file: src/steps/packages.rs
// version: 1.0.0
// guid: c5d9e3f7-0a24-4ba8-d1c3-5e7f9a1b3c50

//! Package index refresh, alternate-shell install, shells registry

use crate::context::ProvisionContext;
use crate::system::CommandRunner;
use crate::Result;
use std::path::Path;
use tracing::{info, warn};

/// Registry of valid login shells
pub const SHELLS_PATH: &str = "/etc/shells";

/// Refresh the package index, install zsh if absent, and register it as a
/// valid login shell. Updates `ctx.login_shell` / `ctx.zsh_installed`.
pub async fn install_packages<R: CommandRunner>(
    runner: &mut R,
    ctx: &mut ProvisionContext,
    shells_path: &Path,
) -> Result<()> {
    info!("Updating package index");
    let update_cmd = ctx.pkg.update_command();
    let (code, _, stderr) = runner
        .run_with_status(update_cmd, "Updating package index")
        .await?;
    if !ctx.pkg.update_success_codes().contains(&code) {
        return Err(crate::error::ProvisionError::Process {
            command: update_cmd.to_string(),
            exit_code: Some(code),
            stderr,
        });
    }

    if which::which("zsh").is_err() {
        info!("Installing zsh");
        runner
            .run(&format!("{} zsh", ctx.pkg.install_command()))
            .await?;
    } else {
        info!("zsh already installed");
    }

    match which::which("zsh") {
        Ok(path) => {
            register_login_shell(shells_path, &path).await?;
            ctx.login_shell = path;
            ctx.zsh_installed = true;
        }
        Err(_) => {
            warn!("zsh not found after install, falling back to /bin/bash");
            ctx.login_shell = "/bin/bash".into();
            ctx.zsh_installed = false;
        }
    }

    Ok(())
}

/// Append a shell path to the shells registry if it is not already listed.
/// Returns true when the registry was modified.
pub async fn register_login_shell(shells_path: impl AsRef<Path>, shell: &Path) -> Result<bool> {
    let shells_path = shells_path.as_ref();
    let content = tokio::fs::read_to_string(shells_path).await?;
    match registry_with_shell(&content, &shell.to_string_lossy()) {
        Some(updated) => {
            tokio::fs::write(shells_path, updated).await?;
            info!("Registered {} in {}", shell.display(), shells_path.display());
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Pure match-or-append over the shells registry content. Returns the new
/// content only if the shell path was missing.
pub fn registry_with_shell(content: &str, shell: &str) -> Option<String> {
    if content.lines().any(|line| line.trim() == shell) {
        return None;
    }
    let mut updated = content.to_string();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(shell);
    updated.push('\n');
    Some(updated)
}
