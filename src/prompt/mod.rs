// file: src/prompt/mod.rs
// version: 1.0.0
// guid: f2a6b0c4-7d91-4ed5-a8f0-2b4c6d8e0f27

//! Interactive credential collection
//!
//! Username and password are gathered through two retry loops over an
//! abstract input source, so the loops can be driven by scripted input in
//! tests. Values live in memory only; nothing is written to disk.

use crate::Result;
use regex::Regex;
use std::io::Write;
use std::sync::OnceLock;

/// Prompt shown for the username
pub const USERNAME_PROMPT: &str = "Enter username for the new account: ";
/// Prompt shown for the password (hidden input)
pub const PASSWORD_PROMPT: &str = "Enter password: ";
/// Prompt shown for the password confirmation (hidden input)
pub const PASSWORD_CONFIRM_PROMPT: &str = "Confirm password: ";

/// Source of interactive input
pub trait PromptSource {
    /// Read a visible line of input
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Read a line of input without echoing it
    fn read_password(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal-backed prompt source
pub struct TerminalPrompt;

impl PromptSource for TerminalPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        Ok(line.trim_end().to_string())
    }

    fn read_password(&mut self, prompt: &str) -> Result<String> {
        Ok(rpassword::prompt_password(prompt)?)
    }
}

fn username_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z][-a-z0-9_]*$").expect("valid username pattern"))
}

/// Check a candidate username against the accepted language.
///
/// Accepted names start with a lowercase letter followed by lowercase
/// letters, digits, hyphen, or underscore.
pub fn is_valid_username(name: &str) -> bool {
    username_pattern().is_match(name)
}

/// Prompt until a valid username is entered.
///
/// Re-prompts indefinitely on invalid input; only an input-source error
/// terminates the loop early.
pub fn collect_username(source: &mut dyn PromptSource) -> Result<String> {
    loop {
        let name = source.read_line(USERNAME_PROMPT)?;
        if is_valid_username(&name) {
            return Ok(name);
        }
        eprintln!(
            "Invalid username. Use lowercase letters, digits, '-' or '_', starting with a letter."
        );
    }
}

/// Prompt until the password and its confirmation match and are non-empty
pub fn collect_password(source: &mut dyn PromptSource) -> Result<String> {
    loop {
        let password = source.read_password(PASSWORD_PROMPT)?;
        let confirm = source.read_password(PASSWORD_CONFIRM_PROMPT)?;
        if !password.is_empty() && password == confirm {
            return Ok(password);
        }
        eprintln!("Passwords do not match or are empty, try again.");
    }
}
