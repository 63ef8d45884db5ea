//! Error types for the vectype façade.

use thiserror::Error;

pub use vectype_font::FontError;

pub type Result<T> = std::result::Result<T, TextError>;

/// Errors surfaced by the public API.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("font parsing failed: {0}")]
    Font(#[from] FontError),

    #[error("could not read font file: {0}")]
    Io(#[from] std::io::Error),
}
