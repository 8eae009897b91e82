// file: src/os/release.rs
// version: 1.0.0
// guid: e1f5a9b3-6c80-4dc4-f7e9-1a3b5c7d9e16

//! os-release identity file parsing

use crate::Result;
use std::path::Path;

/// Distribution identity read from an os-release key/value file
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OsRelease {
    /// Distribution ID, e.g. `ubuntu`
    pub id: String,
    /// Distribution version, e.g. `22.04`; may be absent
    pub version_id: Option<String>,
}

impl OsRelease {
    /// Parse os-release content.
    ///
    /// Lines are `KEY=value` with optional double or single quotes around the
    /// value; comment and blank lines are skipped. A missing `ID` key is a
    /// fatal unsupported-OS condition.
    pub fn parse(content: &str) -> Result<Self> {
        let mut id = None;
        let mut version_id = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"').trim_matches('\'');
            match key.trim() {
                "ID" => id = Some(value.to_string()),
                "VERSION_ID" => version_id = Some(value.to_string()),
                _ => {}
            }
        }

        match id {
            Some(id) if !id.is_empty() => Ok(Self { id, version_id }),
            _ => Err(crate::error::ProvisionError::unsupported_os(
                "os-release file has no ID field",
            )),
        }
    }

    /// Load and parse an os-release file from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            crate::error::ProvisionError::unsupported_os(format!(
                "cannot read {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content)
    }
}
