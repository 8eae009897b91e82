// file: src/context.rs
// version: 1.0.0
// guid: b4c8d2e6-9f13-4af7-c0b2-4d6e8f0a2b49

//! Cross-step provisioning state
//!
//! One explicit context structure threaded through every step instead of
//! ambient process-wide variables.

use crate::os::PackageManager;
use std::path::PathBuf;

/// State shared by the provisioning steps.
///
/// Built up front from OS detection and credential collection; later steps
/// only read from it.
#[derive(Debug, Clone)]
pub struct ProvisionContext {
    /// Package-manager profile selected by OS detection
    pub pkg: PackageManager,
    /// Name of the account to create
    pub username: String,
    /// Password for the account; held in memory only
    pub password: String,
    /// Login shell assigned to the account
    pub login_shell: PathBuf,
    /// Whether the alternate shell (zsh) ended up installed
    pub zsh_installed: bool,
    /// Home directory of the administrator running the agent
    pub admin_home: PathBuf,
    /// Base directory for user homes, normally `/home`
    pub home_base: PathBuf,
    /// Name of the project directory to relocate, relative to the admin home
    pub project_dir_name: String,
}

impl ProvisionContext {
    /// Create a context with defaults for everything not yet collected
    pub fn new(pkg: PackageManager, admin_home: PathBuf, project_dir_name: String) -> Self {
        Self {
            pkg,
            username: String::new(),
            password: String::new(),
            login_shell: PathBuf::from("/bin/bash"),
            zsh_installed: false,
            admin_home,
            home_base: PathBuf::from("/home"),
            project_dir_name,
        }
    }

    /// Home directory of the account being created
    pub fn user_home(&self) -> PathBuf {
        self.home_base.join(&self.username)
    }
}
