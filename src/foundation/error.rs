/// Convenience result type used across Confluence.
pub type ConfluenceResult<T> = Result<T, ConfluenceError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only construction-time problems surface here. Degenerate layout or timeline inputs are
/// clamped where they occur and never produce an error.
#[derive(thiserror::Error, Debug)]
pub enum ConfluenceError {
    /// A parameter was outside its domain when building a spec or config.
    #[error("validation error: {0}")]
    Validation(String),

    /// Geometry could not be produced from otherwise valid parameters.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ConfluenceError {
    /// Build a [`ConfluenceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ConfluenceError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`ConfluenceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ConfluenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
