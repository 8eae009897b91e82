// file: src/steps/ssh_keys.rs
// version: 1.0.0
// guid: f8a2b6c0-3d57-4edb-a4f6-8b0c2d4e6f83

//! SSH authorized-keys migration to the new account

use crate::context::ProvisionContext;
use crate::system::CommandRunner;
use crate::Result;
use tracing::info;

/// Copy the administrator's authorized keys into the new account's `.ssh`
/// directory with owner-only permissions.
///
/// A missing source file surfaces as the copy command failing, which aborts
/// the run.
pub async fn migrate_ssh_keys<R: CommandRunner>(
    runner: &mut R,
    ctx: &ProvisionContext,
) -> Result<()> {
    let ssh_dir = ctx.user_home().join(".ssh");
    let source = ctx.admin_home.join(".ssh").join("authorized_keys");

    info!("Migrating authorized keys to {}", ssh_dir.display());

    runner
        .run(&format!("install -d -m 700 {}", ssh_dir.display()))
        .await?;
    runner
        .run(&format!(
            "cp {} {}/authorized_keys",
            source.display(),
            ssh_dir.display()
        ))
        .await?;
    runner
        .run(&format!("chmod 600 {}/authorized_keys", ssh_dir.display()))
        .await?;
    runner
        .run(&format!(
            "chown -R {0}:{0} {1}",
            ctx.username,
            ssh_dir.display()
        ))
        .await?;

    Ok(())
}
