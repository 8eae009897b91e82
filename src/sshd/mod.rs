// file: src/sshd/mod.rs
// version: 1.0.0
// guid: a3b7c1d5-8e02-4fe6-b9a1-3c5d7e9f1a38

//! Idempotent sshd_config directive patching
//!
//! Pure text transformation over the config content, independent of file
//! I/O. The hardening step layers filesystem access on top.

use regex::Regex;

/// Default location of the OpenSSH daemon config
pub const SSHD_CONFIG_PATH: &str = "/etc/ssh/sshd_config";

/// Cloud-init drop-in that would override the hardened directives
pub const SSHD_CLOUD_INIT_DROPIN: &str = "/etc/ssh/sshd_config.d/50-cloud-init.conf";

/// Directives applied by the hardening step, in order
pub const HARDENING_DIRECTIVES: &[(&str, &str)] = &[
    ("PasswordAuthentication", "no"),
    ("PermitRootLogin", "no"),
    ("KbdInteractiveAuthentication", "no"),
];

/// Rewrite every line carrying `directive` (commented or active, any case)
/// to `directive value`; append one such line if none matches.
///
/// Idempotent: the patched line matches the pattern itself, so a second
/// application rewrites it to the same text.
pub fn patch_directive(content: &str, directive: &str, value: &str) -> String {
    // The trailing (\s|$) keeps a longer key sharing this prefix from matching
    let pattern = format!(r"(?i)^\s*#?\s*{0}(\s|$)", regex::escape(directive));
    let matcher = Regex::new(&pattern).expect("valid directive pattern");
    let replacement = format!("{} {}", directive, value);

    let mut found = false;
    let mut lines: Vec<String> = content
        .lines()
        .map(|line| {
            if matcher.is_match(line) {
                found = true;
                replacement.clone()
            } else {
                line.to_string()
            }
        })
        .collect();

    if !found {
        lines.push(replacement);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Apply all hardening directives to config content
pub fn apply_hardening(content: &str) -> String {
    let mut patched = content.to_string();
    for (directive, value) in HARDENING_DIRECTIVES {
        patched = patch_directive(&patched, directive, value);
    }
    patched
}
