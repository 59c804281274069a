//! cachegen: emit a Go source file of blank imports for a list of
//! package paths.
//!
//! The generated file forces `go build` to compile every listed
//! package without depending on any of them, which pre-warms the build
//! cache or verifies that the set compiles cleanly.

pub mod error;
pub mod input;
pub mod render;

pub use error::AppError;
pub use input::{paths_from_args, paths_from_reader};
pub use render::render_source;

/// Render the blank-import file for a list of candidate paths.
///
/// Applies argument-mode semantics: each candidate is
/// whitespace-trimmed and empty results are discarded before
/// rendering.
pub fn generate<I, S>(candidates: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    render_source(&paths_from_args(candidates))
}
