use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed error produced by an [`IgnoreSource`](crate::IgnoreSource).
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error produced while populating or configuring a [`FilterSpec`](crate::FilterSpec).
///
/// Matching and classification never fail; only argument validation and the
/// loaders that touch the filesystem or a settings store report errors.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A caller-supplied argument was rejected.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: &'static str,
    },
    /// A pattern file could not be read.
    #[error("failed to read pattern file '{}': {source}", path.display())]
    Io {
        /// Pattern file that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The ignore settings for a repository could not be retrieved.
    #[error("failed to load ignore settings for repository '{repo}': {source}")]
    Config {
        /// Repository whose settings were requested.
        repo: String,
        /// Failure reported by the settings source.
        #[source]
        source: SourceError,
    },
}

impl FilterError {
    pub(crate) const fn invalid_argument(reason: &'static str) -> Self {
        Self::InvalidArgument { reason }
    }

    /// Returns `true` for [`FilterError::InvalidArgument`].
    #[must_use]
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
