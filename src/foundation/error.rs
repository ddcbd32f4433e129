/// Convenience result type used across the editor core.
pub type EditorResult<T> = Result<T, EditorError>;

/// Top-level error taxonomy for fallible editor APIs.
///
/// Expected edge conditions (stale ids, empty navigation results, removed roots) are not errors;
/// they are modelled with `Option` and recovered locally.
#[derive(thiserror::Error, Debug)]
pub enum EditorError {
    /// Invalid user-provided data (workspace files, themes, templates).
    #[error("validation error: {0}")]
    Validation(String),

    /// The workspace has no entry with this name.
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    /// The workspace entry exists but is not an editable function body.
    #[error("not an editable function: {0}")]
    NotAFunction(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while loading fonts or measuring text.
    #[error("font error: {0}")]
    Font(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EditorError {
    /// Build an [`EditorError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EditorError::UnknownFunction`] value.
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction(name.into())
    }

    /// Build an [`EditorError::NotAFunction`] value.
    pub fn not_a_function(name: impl Into<String>) -> Self {
        Self::NotAFunction(name.into())
    }

    /// Build an [`EditorError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build an [`EditorError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }
}

impl From<serde_json::Error> for EditorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
