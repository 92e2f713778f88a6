/// Convenience result type used across the crate.
pub type MockshotResult<T> = Result<T, MockshotError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for scene building, rasterization and encoding.
pub enum MockshotError {
    /// Caller contract violation (zero-sized canvas, mismatched frame sizes, bad settings).
    #[error("validation error: {0}")]
    Validation(String),

    /// Font bytes were found but could not be used for shaping.
    #[error("font error: {0}")]
    Font(String),

    /// Rasterizer failure.
    #[error("render error: {0}")]
    Render(String),

    /// Image or animation encoder failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Scene descriptor (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MockshotError {
    /// Build a [`MockshotError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MockshotError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`MockshotError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MockshotError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`MockshotError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<image::ImageError> for MockshotError {
    fn from(err: image::ImageError) -> Self {
        Self::encode(err.to_string())
    }
}

impl From<serde_json::Error> for MockshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
