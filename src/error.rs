//! Error type shared by the I/O, configuration and buffer-construction
//! helpers. The per-frame pipeline itself never fails: a frame without a hand
//! is reported as [`ProximityState::NoHand`](crate::proximity::ProximityState).

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised outside the per-frame detection path.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem access failed.
    #[error("{context} {path}: {source}")]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image decoding or encoding failed.
    #[error("image error for {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// JSON (de)serialisation failed.
    #[error("JSON error for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A parameter set failed validation.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A raw pixel buffer does not match the declared dimensions.
    #[error("buffer size mismatch: expected at least {expected} bytes, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn io(context: &'static str, path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            context,
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
