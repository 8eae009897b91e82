// file: src/os/mod.rs
// version: 1.0.0
// guid: d0e4f8a2-5b79-4cb3-e6d8-0f2a4b6c8d05

//! Operating system detection and package-manager profile selection

pub mod release;

pub use release::OsRelease;

use serde::{Deserialize, Serialize};

/// Default location of the os-release identity file
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Package-manager profile selected from the detected distribution.
///
/// Immutable after detection; every later step reads its commands from here
/// instead of re-probing the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageManager {
    /// Debian family (ubuntu, debian): apt-get
    #[serde(rename = "apt")]
    Apt,
    /// Amazon family (amzn): dnf
    #[serde(rename = "dnf")]
    Dnf,
}

impl PackageManager {
    /// Command that refreshes the package index
    pub fn update_command(&self) -> &'static str {
        match self {
            PackageManager::Apt => "apt-get update",
            PackageManager::Dnf => "dnf check-update",
        }
    }

    /// Exit codes the update command may return on success.
    ///
    /// `dnf check-update` exits 100 when updates are available.
    pub fn update_success_codes(&self) -> &'static [i32] {
        match self {
            PackageManager::Apt => &[0],
            PackageManager::Dnf => &[0, 100],
        }
    }

    /// Command prefix that installs a package non-interactively
    pub fn install_command(&self) -> &'static str {
        match self {
            PackageManager::Apt => "DEBIAN_FRONTEND=noninteractive apt-get install -y",
            PackageManager::Dnf => "dnf install -y",
        }
    }

    /// Name of the administrative group on this family
    pub fn sudo_group(&self) -> &'static str {
        match self {
            PackageManager::Apt => "sudo",
            PackageManager::Dnf => "wheel",
        }
    }

    /// systemd unit name of the OpenSSH daemon on this family
    pub fn sshd_service(&self) -> &'static str {
        match self {
            PackageManager::Apt => "ssh",
            PackageManager::Dnf => "sshd",
        }
    }

    /// Get the profile name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
        }
    }
}

/// Select the package-manager profile for a distribution ID.
///
/// Unrecognized IDs are a fatal error: no partial provisioning on an unknown
/// platform.
pub fn select_package_manager(id: &str) -> crate::Result<PackageManager> {
    match id {
        "ubuntu" | "debian" => Ok(PackageManager::Apt),
        "amzn" => Ok(PackageManager::Dnf),
        other => Err(crate::error::ProvisionError::unsupported_os(format!(
            "distribution '{}' is not supported",
            other
        ))),
    }
}
