/// Convenience result type used across reelcraft.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by catalog, store and workflow APIs.
///
/// Missing asset files are reported as [`crate::MissingAsset`] next to a successful result, and
/// zero-sized source bitmaps fit to a transparent canvas; neither is an error.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// The project id has no directory or no `project.json`.
    #[error("project not found: {0}")]
    NotFound(String),

    /// `project.json` could not be parsed, or a required identity field is absent.
    #[error("malformed project: {0}")]
    MalformedProject(String),

    /// Preview layout rectangles are empty or fall outside the canvas.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Invalid caller-provided data (grid size, ids, paths, requests).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from IO, codecs or archives.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`ReelError::MalformedProject`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedProject(msg.into())
    }

    /// Build a [`ReelError::InvalidLayout`] value.
    pub fn invalid_layout(msg: impl Into<String>) -> Self {
        Self::InvalidLayout(msg.into())
    }

    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
