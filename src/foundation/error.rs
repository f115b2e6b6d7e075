/// Convenience result type used across rasterblit.
pub type BlitResult<T> = Result<T, BlitError>;

/// Top-level error taxonomy used by the fallible library APIs.
///
/// The blit loop itself never fails; these errors come from request validation,
/// raster construction, request (de)serialization and thread pool setup.
#[derive(thiserror::Error, Debug)]
pub enum BlitError {
    /// Invalid caller-provided request, raster or threading data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while setting up or running a blit outside the per-pixel path.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing blit requests.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BlitError {
    /// Build a [`BlitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BlitError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`BlitError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
