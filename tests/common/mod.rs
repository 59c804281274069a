//! Shared testing utilities for cachegen CLI tests.

use assert_cmd::Command;

/// Build a command for invoking the compiled `cachegen` binary.
pub fn cli() -> Command {
    Command::cargo_bin("cachegen").expect("Failed to locate cachegen binary")
}

/// Expected output file for a list of already-quoted import lines.
#[allow(dead_code)]
pub fn rendered(paths: &[&str]) -> String {
    let mut out = String::from("package main\n\nimport (\n");
    for path in paths {
        out.push_str(&format!("\t_ \"{}\"\n", path));
    }
    out.push_str(")\n\nfunc main() {}\n");
    out
}
