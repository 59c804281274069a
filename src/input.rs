//! Input acquisition for package paths.
//!
//! Paths arrive either as command-line arguments or as lines on an
//! input stream. Both sources apply the same rule: trim whitespace,
//! drop empty entries, keep the original order. The caller decides
//! which source to use; nothing here touches process-wide handles.

use std::io::BufRead;

use crate::error::AppError;

/// Collect package paths from command-line arguments.
///
/// Each argument is whitespace-trimmed; arguments that trim to empty
/// are discarded. Order is preserved.
pub fn paths_from_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .filter_map(|arg| {
            let path = arg.as_ref().trim();
            if path.is_empty() { None } else { Some(path.to_string()) }
        })
        .collect()
}

/// Collect package paths from an input stream, one per line, until
/// end-of-stream.
///
/// Each line is whitespace-trimmed; blank lines are discarded. Order
/// is preserved. A read error other than clean end-of-stream aborts
/// collection and propagates.
pub fn paths_from_reader<R: BufRead>(reader: R) -> Result<Vec<String>, AppError> {
    let mut paths = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let path = line.trim();
        if !path.is_empty() {
            paths.push(path.to_string());
        }
    }

    Ok(paths)
}
