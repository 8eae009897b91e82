// file: tests/integration_test.rs
// version: 1.0.0
// guid: c7d1e5f9-2a46-4bfe-d3c5-7e9f1a3b5c72

//! Integration tests for the Homelab Provision Agent

use std::path::PathBuf;
use tempfile::TempDir;

use homelab_provision_agent::{
    os::{select_package_manager, OsRelease, PackageManager},
    prompt::PromptSource,
    sshd,
    steps::{self, HardenPaths, PipelineOptions},
    system::CommandRunner,
    ProvisionError, Result,
};

/// Scripted command runner; records commands, fails or answers on demand
#[derive(Default)]
struct ScriptedRunner {
    log: Vec<String>,
    stdin_log: Vec<(String, String)>,
    silent_true: Vec<String>,
    status_codes: Vec<(String, i32)>,
}

impl ScriptedRunner {
    fn ran(&self, needle: &str) -> bool {
        self.log.iter().any(|c| c.contains(needle))
    }
}

#[async_trait::async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(&mut self, command: &str) -> Result<()> {
        self.log.push(command.to_string());
        Ok(())
    }

    async fn run_with_stdin(&mut self, command: &str, input: &str) -> Result<()> {
        self.log.push(command.to_string());
        self.stdin_log.push((command.to_string(), input.to_string()));
        Ok(())
    }

    async fn run_with_output(&mut self, command: &str) -> Result<String> {
        self.log.push(command.to_string());
        Ok(String::new())
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

/// Scripted prompt source for non-interactive runs
struct ScriptedPrompt {
    lines: Vec<String>,
    passwords: Vec<String>,
}

impl ScriptedPrompt {
    fn new(lines: &[&str], passwords: &[&str]) -> Self {
        Self {
            lines: lines.iter().rev().map(|s| s.to_string()).collect(),
            passwords: passwords.iter().rev().map(|s| s.to_string()).collect(),
        }
    }
}

impl PromptSource for ScriptedPrompt {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        self.lines
            .pop()
            .ok_or_else(|| ProvisionError::Validation("input exhausted".to_string()))
    }

    fn read_password(&mut self, _prompt: &str) -> Result<String> {
        self.passwords
            .pop()
            .ok_or_else(|| ProvisionError::Validation("input exhausted".to_string()))
    }
}

async fn pipeline_fixture(os_release: &str) -> (TempDir, PipelineOptions) {
    let dir = TempDir::new().unwrap();

    let os_release_path = dir.path().join("os-release");
    tokio::fs::write(&os_release_path, os_release).await.unwrap();

    let shells_path = dir.path().join("shells");
    tokio::fs::write(&shells_path, "/bin/sh\n/bin/bash\n")
        .await
        .unwrap();

    let sshd_config = dir.path().join("sshd_config");
    tokio::fs::write(&sshd_config, "Port 22\n#PasswordAuthentication yes\n")
        .await
        .unwrap();

    let home_base = dir.path().join("home");
    tokio::fs::create_dir_all(home_base.join("bob-1"))
        .await
        .unwrap();

    let opts = PipelineOptions {
        os_release_path,
        shells_path,
        admin_home: dir.path().join("root"),
        home_base,
        project_dir_name: "homelab".to_string(),
        harden: HardenPaths {
            config: sshd_config,
            dropin: dir.path().join("50-cloud-init.conf"),
        },
        restart_sshd: false,
    };

    (dir, opts)
}

#[tokio::test]
async fn test_full_pipeline_on_ubuntu() -> Result<()> {
    let (_dir, opts) = pipeline_fixture("ID=ubuntu\nVERSION_ID=\"22.04\"\n").await;

    let mut runner = ScriptedRunner::default();
    // First username is rejected and re-prompted; passwords match on entry
    let mut prompts = ScriptedPrompt::new(&["Bob", "bob-1"], &["secret", "secret"]);

    steps::run_pipeline(&mut runner, &mut prompts, &opts).await?;

    assert!(runner.ran("apt-get update"));
    assert!(runner.ran("useradd -m -s"));
    // Password travels on chpasswd's stdin, never on a shell line
    assert!(runner
        .stdin_log
        .iter()
        .any(|(c, i)| c == "chpasswd" && i == "bob-1:secret\n"));
    assert!(runner.log.iter().all(|c| !c.contains("secret")));
    assert!(runner.ran("usermod -aG sudo,docker bob-1"));
    assert!(runner.ran("authorized_keys"));
    assert!(runner.ran("sshd -t -f"));
    assert!(runner.ran("mv "));
    // restart disabled in the fixture
    assert!(!runner.ran("systemctl restart"));

    // Hardened directives landed in the config file
    let config = tokio::fs::read_to_string(&opts.harden.config).await?;
    assert!(config.contains("PasswordAuthentication no"));
    assert!(config.contains("PermitRootLogin no"));
    assert!(config.contains("KbdInteractiveAuthentication no"));

    Ok(())
}

#[tokio::test]
async fn test_pipeline_aborts_on_existing_user() {
    let (_dir, opts) = pipeline_fixture("ID=ubuntu\nVERSION_ID=\"22.04\"\n").await;

    let mut runner = ScriptedRunner::default();
    runner.silent_true.push("id -u bob-1".to_string());
    let mut prompts = ScriptedPrompt::new(&["bob-1"], &["secret", "secret"]);

    let err = steps::run_pipeline(&mut runner, &mut prompts, &opts)
        .await
        .unwrap_err();
    assert!(matches!(err, ProvisionError::Precondition(_)));

    // Nothing past the precondition check may run
    assert!(!runner.ran("useradd"));
    assert!(!runner.ran("sshd -t"));
    let config = tokio::fs::read_to_string(&opts.harden.config).await.unwrap();
    assert!(config.contains("#PasswordAuthentication yes"));
}

#[tokio::test]
async fn test_pipeline_rejects_unsupported_os() {
    let (_dir, opts) = pipeline_fixture("ID=arch\nVERSION_ID=\"rolling\"\n").await;

    let mut runner = ScriptedRunner::default();
    let mut prompts = ScriptedPrompt::new(&[], &[]);

    let err = steps::run_pipeline(&mut runner, &mut prompts, &opts)
        .await
        .unwrap_err();
    assert!(matches!(err, ProvisionError::UnsupportedOs(_)));
    // Exits before any mutation
    assert!(runner.log.is_empty());
}

#[tokio::test]
async fn test_validation_failure_blocks_restart() {
    let (_dir, mut opts) = pipeline_fixture("ID=ubuntu\nVERSION_ID=\"22.04\"\n").await;
    opts.restart_sshd = true;

    let mut runner = ScriptedRunner::default();
    runner.status_codes.push(("sshd -t".to_string(), 255));

    let err = steps::ssh_harden::harden_sshd(&mut runner, &opts.harden, "ssh", true)
        .await
        .unwrap_err();
    assert!(matches!(err, ProvisionError::Process { .. }));
    assert!(!runner.ran("systemctl restart"));
}

#[tokio::test]
async fn test_detect_profile_from_identity_file() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("os-release");
    tokio::fs::write(&path, "NAME=\"Ubuntu\"\nID=ubuntu\nVERSION_ID=\"22.04\"\n").await?;

    let release = OsRelease::load(&path).await?;
    let pkg = select_package_manager(&release.id)?;
    assert_eq!(pkg, PackageManager::Apt);
    assert_eq!(release.version_id.as_deref(), Some("22.04"));

    Ok(())
}

#[tokio::test]
async fn test_harden_is_idempotent_on_disk() -> Result<()> {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("sshd_config");
    tokio::fs::write(&config, "Port 22\nPasswordAuthentication yes\n").await?;

    let paths = HardenPaths {
        config: config.clone(),
        dropin: dir.path().join("missing-dropin.conf"),
    };
    let mut runner = ScriptedRunner::default();

    steps::ssh_harden::harden_sshd(&mut runner, &paths, "ssh", false).await?;
    let once = tokio::fs::read_to_string(&config).await?;

    steps::ssh_harden::harden_sshd(&mut runner, &paths, "ssh", false).await?;
    let twice = tokio::fs::read_to_string(&config).await?;

    assert_eq!(once, twice);
    Ok(())
}

#[test]
fn test_patch_directive_properties() {
    // Replacement preserves line count
    let input = "Port 22\n#PermitRootLogin yes\nX11Forwarding no\n";
    let out = sshd::patch_directive(input, "PermitRootLogin", "no");
    assert_eq!(out.lines().count(), input.lines().count());
    assert!(out.contains("PermitRootLogin no"));

    // Append adds exactly one line
    let out = sshd::patch_directive("Port 22\n", "PermitRootLogin", "no");
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn test_profile_selection_matrix() {
    assert_eq!(select_package_manager("ubuntu").unwrap(), PackageManager::Apt);
    assert_eq!(select_package_manager("debian").unwrap(), PackageManager::Apt);
    assert_eq!(select_package_manager("amzn").unwrap(), PackageManager::Dnf);
    assert!(select_package_manager("fedora").is_err());
    assert!(select_package_manager("").is_err());
}

#[test]
fn test_pipeline_options_defaults() {
    let opts = PipelineOptions::default();
    assert_eq!(opts.os_release_path, PathBuf::from("/etc/os-release"));
    assert_eq!(opts.shells_path, PathBuf::from("/etc/shells"));
    assert_eq!(opts.home_base, PathBuf::from("/home"));
    assert!(opts.restart_sshd);
}
