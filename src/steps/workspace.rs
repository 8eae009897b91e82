// file: src/steps/workspace.rs
// version: 1.0.0
// guid: c1d5e9f3-6a80-4bfe-d7c9-1e3f5a7b9c16

//! Workspace relocation into the new account's home

use crate::context::ProvisionContext;
use crate::system::CommandRunner;
use crate::Result;
use tracing::info;

/// Example env files copied to their active counterparts, relative to the
/// project directory. Plain copies, no merge; targets are assumed absent.
pub const ENV_FILE_COPIES: &[(&str, &str)] = &[
    ("n8n/.env.example", "n8n/.env"),
    ("watchtower/.env.example", "watchtower/.env"),
    ("caddy/.env.example", "caddy/.env"),
];

/// Configuration directory created under the new home, relative to it
pub const CONFIG_DIR_NAME: &str = ".n8n";

/// Copy the example env files into place, relocate the project directory
/// from the administrator's home into the new account's home, and create the
/// account's configuration directory. All sub-steps are fatal on failure.
pub async fn migrate_workspace<R: CommandRunner>(
    runner: &mut R,
    ctx: &ProvisionContext,
) -> Result<()> {
    let project_src = ctx.admin_home.join(&ctx.project_dir_name);
    let user_home = ctx.user_home();

    info!("Preparing env files in {}", project_src.display());
    for (example, active) in ENV_FILE_COPIES {
        runner
            .run(&format!(
                "cp {} {}",
                project_src.join(example).display(),
                project_src.join(active).display()
            ))
            .await?;
    }

    info!(
        "Relocating {} into {}",
        project_src.display(),
        user_home.display()
    );
    runner
        .run(&format!(
            "mv {} {}",
            project_src.display(),
            user_home.display()
        ))
        .await?;
    runner
        .run(&format!(
            "chown -R {0}:{0} {1}",
            ctx.username,
            user_home.join(&ctx.project_dir_name).display()
        ))
        .await?;

    let config_dir = user_home.join(CONFIG_DIR_NAME);
    runner
        .run(&format!("install -d {}", config_dir.display()))
        .await?;
    runner
        .run(&format!(
            "chown -R {0}:{0} {1}",
            ctx.username,
            config_dir.display()
        ))
        .await?;

    Ok(())
}
