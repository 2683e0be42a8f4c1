/// Convenience result type used across flatcolor.
pub type FlatcolorResult<T> = Result<T, FlatcolorError>;

/// Error taxonomy for the parameter surface and the plane renderer.
///
/// The core operations (metadata derivation, scanline fill, sample shading) are
/// total and never produce one of these.
#[derive(thiserror::Error, Debug)]
pub enum FlatcolorError {
    /// Invalid parameter values supplied by the host.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing parameters.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors raised while driving a plane render.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FlatcolorError {
    /// Build a [`FlatcolorError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FlatcolorError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`FlatcolorError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<serde_json::Error> for FlatcolorError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
