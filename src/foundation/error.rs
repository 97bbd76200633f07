/// Convenience result type used across huffvis.
pub type HuffvisResult<T> = Result<T, HuffvisError>;

/// Top-level error taxonomy used by the layout, animation and output APIs.
#[derive(thiserror::Error, Debug)]
pub enum HuffvisError {
    /// Invalid user-provided data: degenerate weights, malformed codes, bad options.
    #[error("validation error: {0}")]
    Validation(String),

    /// The input tree is not a well-formed binary prefix-code tree.
    #[error("traversal error: {0}")]
    Traversal(String),

    /// Errors while rasterizing or compositing frames.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while writing frames to a sink.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HuffvisError {
    /// Build a [`HuffvisError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HuffvisError::Traversal`] value.
    pub fn traversal(msg: impl Into<String>) -> Self {
        Self::Traversal(msg.into())
    }

    /// Build a [`HuffvisError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HuffvisError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
