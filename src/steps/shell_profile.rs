// file: src/steps/shell_profile.rs
// version: 1.0.0
// guid: a9b3c7d1-4e68-4fec-b5a7-9c1d3e5f7a94

//! Interactive shell startup file for the new account

use crate::context::ProvisionContext;
use crate::system::CommandRunner;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Fixed zsh startup file written for the new account
pub const ZSHRC_TEMPLATE: &str = r#"export HISTFILE="$HOME/.zsh_history"
export HISTSIZE=10000
export SAVEHIST=10000
setopt SHARE_HISTORY
setopt HIST_IGNORE_DUPS
autoload -U colors && colors
PROMPT='%{$fg[green]%}%n@%m%{$reset_color%}:%{$fg[blue]%}%~%{$reset_color%}$ '
"#;

/// Write the startup file into a home directory and return its path
pub async fn write_profile(home: &Path) -> Result<PathBuf> {
    let path = home.join(".zshrc");
    tokio::fs::write(&path, ZSHRC_TEMPLATE).await?;
    Ok(path)
}

/// Write the new account's `.zshrc` and hand it over to the account.
///
/// Skipped entirely when the alternate shell did not get installed.
pub async fn install_shell_profile<R: CommandRunner>(
    runner: &mut R,
    ctx: &ProvisionContext,
) -> Result<()> {
    if !ctx.zsh_installed {
        info!("zsh not installed, skipping shell profile");
        return Ok(());
    }

    let path = write_profile(&ctx.user_home()).await?;
    info!("Wrote shell profile {}", path.display());

    runner
        .run(&format!(
            "chown {0}:{0} {1}",
            ctx.username,
            path.display()
        ))
        .await?;

    Ok(())
}
