use std::io;
use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

/// Result type for TUI operations
pub type TuiResult<T> = Result<T, TuiError>;
