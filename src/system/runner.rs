// file: src/system/runner.rs
// version: 1.0.0
// guid: b8c2d6e0-3f57-4a91-c4b6-8d0e2f4a6b83

//! Command execution trait for provisioning steps

use crate::Result;

/// Trait for executing external commands.
///
/// Provisioning steps are written against this trait so tests can substitute
/// a scripted runner instead of touching the real system.
#[async_trait::async_trait]
pub trait CommandRunner: Send {
    /// Execute a command; non-zero exit is an error
    async fn run(&mut self, command: &str) -> Result<()>;

    /// Execute a command feeding `input` to its stdin; non-zero exit is an
    /// error. Used where a value must reach a command without appearing on a
    /// shell line (e.g. credentials for `chpasswd`).
    async fn run_with_stdin(&mut self, command: &str, input: &str) -> Result<()>;

    /// Execute a command and return its stdout; non-zero exit is an error
    async fn run_with_output(&mut self, command: &str) -> Result<String>;

    /// Execute a command and return (exit code, stdout, stderr) without
    /// treating a non-zero exit as an error
    async fn run_with_status(
        &mut self,
        command: &str,
        description: &str,
    ) -> Result<(i32, String, String)>;

    /// Execute a command intended as a boolean check, without error logging
    async fn check_silent(&mut self, command: &str) -> Result<bool>;
}
