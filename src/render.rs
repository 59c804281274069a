//! Rendering of the blank-import source file.
//!
//! The output is a minimal Go `package main` file whose only content
//! is a blank import per package path. Building it forces the Go
//! toolchain to compile every listed package without the file
//! depending on any of them.

/// Render the complete source file for an ordered list of package
/// paths.
///
/// Each path becomes one tab-indented blank import inside a single
/// `import (...)` block. An empty list renders an empty block. The
/// result always ends with exactly one trailing newline.
pub fn render_source(paths: &[String]) -> String {
    let mut out = String::from("package main\n\nimport (\n");

    for path in paths {
        out.push_str("\t_ ");
        out.push_str(&quote_path(path));
        out.push('\n');
    }

    out.push_str(")\n\nfunc main() {}\n");
    out
}

/// Quote a path as a Go interpreted string literal.
///
/// Double quotes, backslashes, and control characters are escaped so
/// the literal stays parseable whatever the path contains.
pub fn quote_path(path: &str) -> String {
    let mut quoted = String::with_capacity(path.len() + 2);
    quoted.push('"');

    for ch in path.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\t' => quoted.push_str("\\t"),
            '\r' => quoted.push_str("\\r"),
            c if c.is_control() => {
                quoted.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => quoted.push(c),
        }
    }

    quoted.push('"');
    quoted
}
