// file: src/lib.rs
// version: 1.0.0
// guid: 8b2e4d71-a953-4c06-b1f2-5e7a90c3d846

//! # Homelab Provision Agent
//!
//! Provisions a fresh Linux host for a self-hosted homelab container stack:
//! detects the distribution, installs an alternate login shell, creates a
//! service account, migrates SSH keys, hardens the OpenSSH daemon, and moves
//! the project workspace into place.
//!
//! The pipeline is strictly sequential and fail-fast: the first failing step
//! aborts the whole run with no rollback.

pub mod cli;
pub mod context;
pub mod error;
pub mod logging;
pub mod os;
pub mod prompt;
pub mod sshd;
pub mod steps;
pub mod system;

pub use error::{ProvisionError, Result};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
