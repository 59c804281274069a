use std::io;

use thiserror::Error;

/// Library-wide error type for cachegen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the input stream failed before end-of-stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}
