use std::collections::HashMap;
use std::convert::Infallible;

use crate::SourceError;

/// Setting name under which a repository's ignore patterns are stored.
pub const IGNORES_SETTING: &str = "ignores";

/// Per-repository store of ignore patterns.
///
/// Implementations return the values of the [`IGNORES_SETTING`] entry for a
/// repository, one pattern per element, in the order they were configured. A
/// repository without the setting yields an empty list rather than an error.
pub trait IgnoreSource {
    /// Failure reported when the store cannot be consulted.
    type Error: Into<SourceError>;

    /// Returns the ignore patterns configured for `repo`.
    fn ignores(&self, repo: &str) -> Result<Vec<String>, Self::Error>;
}

impl<S: IgnoreSource + ?Sized> IgnoreSource for &S {
    type Error = S::Error;

    fn ignores(&self, repo: &str) -> Result<Vec<String>, Self::Error> {
        (**self).ignores(repo)
    }
}

/// In-memory store keyed by repository name.
impl IgnoreSource for HashMap<String, Vec<String>> {
    type Error = Infallible;

    fn ignores(&self, repo: &str) -> Result<Vec<String>, Self::Error> {
        Ok(self.get(repo).cloned().unwrap_or_default())
    }
}
