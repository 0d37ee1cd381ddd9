//! Generator error types.

use thiserror::Error;

/// Errors raised while selecting a target generator.
#[derive(Debug, Error)]
pub enum GenError {
    /// The requested target language has no generator.
    #[error("unsupported target language: {0}")]
    UnsupportedTarget(String),
}
