// file: src/system/testing.rs
// version: 1.0.0
// guid: d6e0f4a8-1b35-4cb9-e2d4-6f8a0b2c4d61

//! Scripted command runner for unit tests

use crate::system::CommandRunner;
use crate::Result;

/// Records every command and answers from a small script table.
///
/// Matching is by substring so tests stay robust against incidental
/// formatting changes in the commands.
#[derive(Default)]
pub struct MockRunner {
    /// Every command passed to any method, in order
    pub log: Vec<String>,
    /// (command, stdin) pairs passed to run_with_stdin
    pub stdin_log: Vec<(String, String)>,
    /// Commands containing any of these substrings fail with a Process error
    pub fail_on: Vec<String>,
    /// check_silent returns true for commands containing any of these
    pub silent_true: Vec<String>,
    /// (substring, stdout) pairs answered by run_with_output
    pub outputs: Vec<(String, String)>,
    /// (substring, exit code) pairs answered by run_with_status
    pub status_codes: Vec<(String, i32)>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_on(mut self, needle: &str) -> Self {
        self.fail_on.push(needle.to_string());
        self
    }

    pub fn silent_true(mut self, needle: &str) -> Self {
        self.silent_true.push(needle.to_string());
        self
    }

    pub fn status_code(mut self, needle: &str, code: i32) -> Self {
        self.status_codes.push((needle.to_string(), code));
        self
    }

    /// True if any recorded command contains the substring
    pub fn ran(&self, needle: &str) -> bool {
        self.log.iter().any(|c| c.contains(needle))
    }

    fn should_fail(&self, command: &str) -> bool {
        self.fail_on.iter().any(|n| command.contains(n))
    }

    fn process_error(command: &str) -> crate::error::ProvisionError {
        crate::error::ProvisionError::Process {
            command: command.to_string(),
            exit_code: Some(1),
            stderr: "scripted failure".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl CommandRunner for MockRunner {
    async fn run(&mut self, command: &str) -> Result<()> {
        self.log.push(command.to_string());
        if self.should_fail(command) {
            return Err(Self::process_error(command));
        }
        Ok(())
    }

    async fn run_with_stdin(&mut self, command: &str, input: &str) -> Result<()> {
        self.log.push(command.to_string());
        self.stdin_log.push((command.to_string(), input.to_string()));
        if self.should_fail(command) {
            return Err(Self::process_error(command));
        }
        Ok(())
    }

    async fn run_with_output(&mut self, command: &str) -> Result<String> {
        self.log.push(command.to_string());
        if self.should_fail(command) {
            return Err(Self::process_error(command));
        }
        Ok(self
            .outputs
            .iter()
            .find(|(n, _)| command.contains(n))
            .map(|(_, out)| out.clone())
            .unwrap_or_default())
    }

    async fn run_with_status(
        &mut self,
        command: &str,
        _description: &str,
    ) -> Result<(i32, String, String)> {
        self.log.push(command.to_string());
        let code = self
            .status_codes
            .iter()
            .find(|(n, _)| command.contains(n))
            .map(|(_, c)| *c)
            .unwrap_or(0);
        Ok((code, String::new(), String::new()))
    }

    async fn check_silent(&mut self, command: &str) -> Result<bool> {
        self.log.push(command.to_string());
        Ok(self.silent_true.iter().any(|n| command.contains(n)))
    }
}
