// file: src/steps/account.rs
// version: 1.0.0
// guid: e7f1a5b9-2c46-4dca-f3e5-7a9b1c3d5e72

//! OS account creation

use crate::context::ProvisionContext;
use crate::system::CommandRunner;
use crate::Result;
use tracing::info;

/// Create the service account, set its password, and add it to the
/// administrative and container-runtime groups.
///
/// Precondition: the username must not already exist. An existing account is
/// a fatal error, not a retry condition; the caller never gets a chance to
/// half-update it.
pub async fn create_account<R: CommandRunner>(
    runner: &mut R,
    ctx: &ProvisionContext,
) -> Result<()> {
    if runner
        .check_silent(&format!("id -u {}", ctx.username))
        .await?
    {
        return Err(crate::error::ProvisionError::precondition(format!(
            "user '{}' already exists",
            ctx.username
        )));
    }

    info!("Creating account '{}'", ctx.username);
    runner
        .run(&format!(
            "useradd -m -s {} {}",
            ctx.login_shell.display(),
            ctx.username
        ))
        .await?;

    // The password goes to chpasswd over stdin; it must never be spliced
    // into a shell line
    runner
        .run_with_stdin("chpasswd", &format!("{}:{}\n", ctx.username, ctx.password))
        .await?;

    runner
        .run(&format!(
            "usermod -aG {},docker {}",
            ctx.pkg.sudo_group(),
            ctx.username
        ))
        .await?;

    info!("Account '{}' created", ctx.username);
    Ok(())
}
