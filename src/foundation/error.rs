/// Convenience result type used across mixel.
pub type MixelResult<T> = Result<T, MixelError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Clipping degeneracy is deliberately *not* an error: an empty blend region
/// is a successful no-op at the call site.
#[derive(thiserror::Error, Debug)]
pub enum MixelError {
    /// Invalid caller-provided data: malformed rectangle, mismatched pixel
    /// format, bad buffer geometry, or bad script-function arguments.
    #[error("bad params: {0}")]
    BadParams(String),

    /// Pixel access outside the buffer through the checked accessors.
    ///
    /// A correctly clipped compositing loop never produces this.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// A format pair with no kernel and no fallback conversion path.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MixelError {
    /// Build a [`MixelError::BadParams`] value.
    pub fn bad_params(msg: impl Into<String>) -> Self {
        Self::BadParams(msg.into())
    }

    /// Build a [`MixelError::OutOfBounds`] value.
    pub fn out_of_bounds(msg: impl Into<String>) -> Self {
        Self::OutOfBounds(msg.into())
    }

    /// Build a [`MixelError::Unsupported`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
