use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Category of a [`SettingsError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SettingsErrorKind {
    /// The settings file could not be read.
    Io,
    /// The settings text is malformed.
    Parse,
}

/// Errors that can occur while loading a settings file.
#[derive(Debug)]
pub struct SettingsError {
    kind: SettingsErrorKind,
    line: Option<usize>,
    message: String,
    path: Option<PathBuf>,
    source: Option<io::Error>,
}

impl SettingsError {
    pub(crate) fn io_error(path: &Path, source: io::Error) -> Self {
        Self {
            kind: SettingsErrorKind::Io,
            line: None,
            message: format!("failed to read '{}': {source}", path.display()),
            path: Some(path.to_path_buf()),
            source: Some(source),
        }
    }

    pub(crate) fn parse_error(path: Option<&Path>, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind: SettingsErrorKind::Parse,
            line: Some(line),
            message: message.into(),
            path: path.map(Path::to_path_buf),
            source: None,
        }
    }

    /// Returns the error category.
    #[must_use]
    pub const fn kind(&self) -> SettingsErrorKind {
        self.kind
    }

    /// Returns the 1-based line number where parsing failed, if known.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        self.line
    }

    /// Returns the settings file involved, if known.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the message without location prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // I/O messages already name the file.
        if let (SettingsErrorKind::Parse, Some(path)) = (self.kind, &self.path) {
            write!(f, "{}: ", path.display())?;
        }
        if let Some(line) = self.line {
            write!(f, "line {line}: ")?;
        }
        f.write_str(&self.message)
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}
