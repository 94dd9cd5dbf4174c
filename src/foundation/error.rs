use std::path::{Path, PathBuf};

/// Result alias used across the crate.
pub type AvatarResult<T> = Result<T, AvatarError>;

/// Errors produced while configuring, drawing, or writing avatars.
#[derive(thiserror::Error, Debug)]
pub enum AvatarError {
    /// Empty or whitespace input text, or an invalid configuration value.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The raster backend could not produce a canvas (missing font, encoder failure, ...).
    #[error("render failure: {0}")]
    RenderFailure(String),

    /// An output adapter failed to write to disk.
    #[error("io failure: '{}': {source}", path.display())]
    IoFailure {
        /// Path that was being written or read.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Wrapped third-party failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Payload-free discriminant of [`AvatarError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`AvatarError::InvalidInput`].
    InvalidInput,
    /// See [`AvatarError::RenderFailure`].
    RenderFailure,
    /// See [`AvatarError::IoFailure`].
    IoFailure,
    /// See [`AvatarError::Other`].
    Other,
}

impl AvatarError {
    /// Build an [`AvatarError::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build an [`AvatarError::RenderFailure`].
    pub fn render_failure(msg: impl Into<String>) -> Self {
        Self::RenderFailure(msg.into())
    }

    /// Build an [`AvatarError::IoFailure`] for `path`.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::IoFailure {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Return the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::RenderFailure(_) => ErrorKind::RenderFailure,
            Self::IoFailure { .. } => ErrorKind::IoFailure,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
