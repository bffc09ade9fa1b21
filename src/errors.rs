use std::io;
use thiserror::Error;

/// Error type for shell operations. The `Display` strings are the
/// user-visible diagnostics printed by the read loop.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("{0}: command not found")]
    CommandNotFound(String),

    #[error("{0}")]
    InvalidDirectory(String),

    #[error("{0}")]
    RedirectionError(String),

    #[error("{0}")]
    ExecutionError(String),

    #[error("{0}")]
    IoError(#[from] io::Error),

    #[error("{0}")]
    InputError(String),
}

pub type ShellResult<T> = Result<T, ShellError>;
