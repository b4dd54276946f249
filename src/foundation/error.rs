/// Convenience result type used across the crate.
pub type LottieFontsResult<T> = Result<T, LottieFontsError>;

/// Top-level error taxonomy for document, catalog and CLI-facing APIs.
///
/// Font rewriting itself never fails: unknown selections, empty font tables and malformed
/// layers degrade to "no change" and are reported through `tracing` instead.
#[derive(thiserror::Error, Debug)]
pub enum LottieFontsError {
    /// Invalid user-provided data (catalog contents, unreadable input files).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing JSON documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LottieFontsError {
    /// Build a [`LottieFontsError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LottieFontsError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
