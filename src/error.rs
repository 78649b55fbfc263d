//! Crate error type.

use thiserror::Error;

use crate::pass::GenerateError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Clipboard unavailable: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;
