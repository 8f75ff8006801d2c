/// Convenience result type used across greenscreen.
pub type GreenscreenResult<T> = Result<T, GreenscreenError>;

/// Top-level error taxonomy used by editor APIs.
#[derive(thiserror::Error, Debug)]
pub enum GreenscreenError {
    /// Invalid user-provided data (config values, raw buffers, render scales).
    #[error("validation error: {0}")]
    Validation(String),

    /// Input bytes could not be decoded as a raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// A raster could not be encoded for export.
    #[error("encode error: {0}")]
    Encode(String),

    /// An operation needed an image slot that has not been loaded yet.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Internal inconsistency while keying or compositing.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GreenscreenError {
    /// Build a [`GreenscreenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GreenscreenError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`GreenscreenError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`GreenscreenError::MissingInput`] value.
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    /// Build a [`GreenscreenError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
