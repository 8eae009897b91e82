// file: src/main.rs
// version: 1.0.0
// guid: b6c0d4e8-1f35-4aed-c2b4-6d8e0f2a4b61

//! Homelab Provision Agent - Main entry point

use clap::Parser;
use homelab_provision_agent::{
    cli::{args::Cli, args::Commands, commands::*},
    logging::logger,
    Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logger::init_logger(cli.verbose, cli.quiet)?;

    match cli.command {
        Commands::Run {
            project_dir,
            admin_home,
            no_restart,
        } => run_command(&project_dir, admin_home, no_restart).await,
        Commands::DetectOs { os_release, json } => detect_os_command(&os_release, json).await,
        Commands::HardenSsh {
            config,
            dropin,
            no_restart,
        } => harden_ssh_command(&config, &dropin, no_restart).await,
    }
}
