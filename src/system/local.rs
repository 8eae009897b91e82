// file: src/system/local.rs
// version: 1.0.0
// guid: c9d3e7f1-4a68-4ba2-d5c7-9e1f3a5b7c94

//! Local command execution via the system shell

use crate::system::CommandRunner;
use crate::Result;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::{debug, error, info};

/// Executes commands on the local machine through `bash -c`
pub struct LocalRunner;

impl LocalRunner {
    /// Create a new local runner
    pub fn new() -> Self {
        Self
    }

    fn spawn(&self, command: &str) -> Result<std::process::Output> {
        Command::new("bash")
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|e| crate::error::ProvisionError::Process {
                command: command.to_string(),
                exit_code: None,
                stderr: format!("Failed to execute command: {}", e),
            })
    }
}

impl Default for LocalRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CommandRunner for LocalRunner {
    async fn run(&mut self, command: &str) -> Result<()> {
        debug!("Executing local command: {}", command);

        let output = self.spawn(command)?;

        if !output.status.success() {
            let exit_code = output.status.code();
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);

            error!("Command failed with exit code {:?}", exit_code);
            if !stdout.trim().is_empty() {
                error!("STDOUT: {}", stdout);
            }
            if !stderr.trim().is_empty() {
                error!("STDERR: {}", stderr);
            }

            return Err(crate::error::ProvisionError::Process {
                command: command.to_string(),
                exit_code,
                stderr: if stderr.is_empty() {
                    stdout.to_string()
                } else {
                    stderr.to_string()
                },
            });
        }

        debug!("Command executed successfully");
        Ok(())
    }

    async fn run_with_stdin(&mut self, command: &str, input: &str) -> Result<()> {
        // The input may carry credentials; only the command is logged
        debug!("Executing local command with stdin: {}", command);

        let map_err = |e: std::io::Error| crate::error::ProvisionError::Process {
            command: command.to_string(),
            exit_code: None,
            stderr: format!("Failed to execute command: {}", e),
        };

        let mut child = Command::new("bash")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(map_err)?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(input.as_bytes()).map_err(map_err)?;
        }

        let output = child.wait_with_output().map_err(map_err)?;

        if !output.status.success() {
            let exit_code = output.status.code();
            let stderr = String::from_utf8_lossy(&output.stderr);

            error!("Command failed with exit code {:?}", exit_code);
            if !stderr.trim().is_empty() {
                error!("STDERR: {}", stderr);
            }

            return Err(crate::error::ProvisionError::Process {
                command: command.to_string(),
                exit_code,
                stderr: stderr.to_string(),
            });
        }

        debug!("Command executed successfully");
        Ok(())
    }

    async fn run_with_output(&mut self, command: &str) -> Result<String> {
        debug!("Executing local command with output: {}", command);

        let output = self.spawn(command)?;
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            let exit_code = output.status.code();
            error!("Command failed with exit code {:?}", exit_code);
            if !stderr.trim().is_empty() {
                error!("STDERR: {}", stderr);
            }

            return Err(crate::error::ProvisionError::Process {
                command: command.to_string(),
                exit_code,
                stderr: if stderr.is_empty() {
                    stdout
                } else {
                    stderr.to_string()
                },
            });
        }

        Ok(stdout)
    }

    async fn run_with_status(
        &mut self,
        command: &str,
        description: &str,
    ) -> Result<(i32, String, String)> {
        info!("Executing: {} -> {}", description, command);

        let output = self.spawn(command)?;
        let exit_status = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if exit_status != 0 {
            error!(
                "Command '{}' failed with exit code {}",
                description, exit_status
            );
        } else {
            info!("Command '{}' completed successfully", description);
            debug!("STDOUT: {}", stdout);
        }

        Ok((exit_status, stdout, stderr))
    }

    async fn check_silent(&mut self, command: &str) -> Result<bool> {
        let output = self.spawn(command)?;
        Ok(output.status.success())
    }
}
