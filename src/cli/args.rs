// file: src/cli/args.rs
// version: 1.0.0
// guid: f4a8b2c6-9d13-4ecb-a0f2-4b6c8d0e2f49

//! Command line argument definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "homelab-provision-agent")]
#[command(about = "Provision a fresh Linux host for the homelab container stack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full provisioning pipeline
    Run {
        #[arg(long, default_value = "homelab", help = "Project directory name under the admin home")]
        project_dir: String,

        #[arg(long, help = "Administrator home directory (defaults to $HOME)")]
        admin_home: Option<String>,

        #[arg(long, help = "Do not restart sshd after hardening")]
        no_restart: bool,
    },

    /// Detect the distribution and print the package-manager profile
    DetectOs {
        #[arg(long, default_value = "/etc/os-release")]
        os_release: String,

        #[arg(short, long)]
        json: bool,
    },

    /// Harden the OpenSSH daemon configuration only
    HardenSsh {
        #[arg(long, default_value = "/etc/ssh/sshd_config")]
        config: String,

        #[arg(long, default_value = "/etc/ssh/sshd_config.d/50-cloud-init.conf")]
        dropin: String,

        #[arg(long, help = "Patch and validate without restarting the service")]
        no_restart: bool,
    },
}
