/// Convenience result type used across gifscrub.
pub type ScrubResult<T> = Result<T, ScrubError>;

/// Top-level error taxonomy used by compositor, timeline and decoding APIs.
#[derive(thiserror::Error, Debug)]
pub enum ScrubError {
    /// The compositor was handed zero frames.
    #[error("empty animation: at least one frame is required")]
    EmptyInput,

    /// A frame index outside `[0, len)` was requested from the cache.
    #[error("frame index {index} out of range (cache holds {len} frames)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of cached frames.
        len: usize,
    },

    /// A pixel buffer could not be allocated.
    #[error("failed to allocate {bytes} bytes for pixel buffer")]
    Allocation {
        /// Requested allocation size.
        bytes: usize,
    },

    /// Input data that breaks a documented contract (patch size, threshold, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding an animation bitstream.
    #[error("decode error: {0}")]
    Decode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrubError {
    /// Build a [`ScrubError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrubError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
