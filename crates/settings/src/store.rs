use std::collections::HashMap;
use std::convert::Infallible;
use std::fs;
use std::path::Path;

use filespec::{IGNORES_SETTING, IgnoreSource};

use crate::SettingsError;

/// Key/value pairs from one section, in file order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Section {
    entries: Vec<(String, String)>,
}

impl Section {
    fn values(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

/// Parsed per-repository settings.
///
/// Entries before the first `[section]` header are machine-wide and apply to
/// every repository that does not set the same key itself.
///
/// # Examples
///
/// ```
/// use settings::RepoSettings;
///
/// let text = "\
/// ignores = *.tmp
///
/// [website]
/// ignores = node_modules
/// ignores = dist/**
///
/// [tools]
/// owner = ops
/// ";
/// let settings = RepoSettings::parse(text, None)?;
///
/// assert_eq!(settings.ignores("website"), ["node_modules", "dist/**"]);
/// assert_eq!(settings.ignores("tools"), ["*.tmp"]);
/// assert_eq!(settings.values("tools", "owner"), ["ops"]);
/// # Ok::<(), settings::SettingsError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RepoSettings {
    global: Section,
    repos: Vec<(String, Section)>,
}

impl RepoSettings {
    /// Reads and parses a settings file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid syntax.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| SettingsError::io_error(path, e))?;
        let settings = Self::parse(&contents, Some(path))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "vcfilter::settings",
            file = %path.display(),
            repositories = settings.repos.len(),
            "settings_loaded"
        );

        Ok(settings)
    }

    /// Parses settings text. `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the input contains invalid syntax.
    pub fn parse(input: &str, path: Option<&Path>) -> Result<Self, SettingsError> {
        Parser::new(input, path).parse()
    }

    /// Returns the repository section names in file order.
    pub fn repositories(&self) -> impl Iterator<Item = &str> {
        self.repos.iter().map(|(name, _)| name.as_str())
    }

    /// Returns `true` when a section exists for `repo`.
    #[must_use]
    pub fn has_repository(&self, repo: &str) -> bool {
        self.section(repo).is_some()
    }

    /// Returns the values of `key` for `repo`.
    ///
    /// The repository's own values win; when its section does not set `key`
    /// (or does not exist) the machine-wide values are returned. Keys are
    /// matched case-insensitively.
    #[must_use]
    pub fn values(&self, repo: &str, key: &str) -> Vec<&str> {
        let key = key.to_ascii_lowercase();
        if let Some(section) = self.section(repo) {
            let own = section.values(&key);
            if !own.is_empty() {
                return own;
            }
        }
        self.global.values(&key)
    }

    /// Returns the machine-wide values of `key`.
    #[must_use]
    pub fn global_values(&self, key: &str) -> Vec<&str> {
        self.global.values(&key.to_ascii_lowercase())
    }

    /// Returns the ignore patterns that apply to `repo`.
    ///
    /// Empty values are dropped.
    #[must_use]
    pub fn ignores(&self, repo: &str) -> Vec<&str> {
        self.values(repo, IGNORES_SETTING)
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect()
    }

    fn section(&self, repo: &str) -> Option<&Section> {
        self.repos
            .iter()
            .find(|(name, _)| name == repo)
            .map(|(_, section)| section)
    }
}

impl IgnoreSource for RepoSettings {
    type Error = Infallible;

    fn ignores(&self, repo: &str) -> Result<Vec<String>, Self::Error> {
        Ok(Self::ignores(self, repo)
            .into_iter()
            .map(str::to_owned)
            .collect())
    }
}

struct Parser<'a> {
    input: &'a str,
    path: Option<&'a Path>,
    line_number: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str, path: Option<&'a Path>) -> Self {
        Self {
            input,
            path,
            line_number: 0,
        }
    }

    fn error(&self, message: impl Into<String>) -> SettingsError {
        SettingsError::parse_error(self.path, self.line_number, message)
    }

    fn parse(&mut self) -> Result<RepoSettings, SettingsError> {
        let mut settings = RepoSettings::default();
        let mut seen: HashMap<String, usize> = HashMap::new();
        let mut current: Option<usize> = None;

        for line in self.input.lines() {
            self.line_number += 1;
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with(['#', ';']) {
                continue;
            }

            if let Some(header) = trimmed.strip_prefix('[') {
                let end = header
                    .find(']')
                    .ok_or_else(|| self.error("unterminated section header"))?;

                let name = header[..end].trim();
                if name.is_empty() {
                    return Err(self.error("section name must be non-empty"));
                }

                if let Some(previous) = seen.get(name) {
                    return Err(self.error(format!(
                        "duplicate section '{name}' (previously defined at line {previous})"
                    )));
                }

                let trailing = header[end + 1..].trim();
                if !trailing.is_empty() && !trailing.starts_with(['#', ';']) {
                    return Err(self.error("unexpected content after section header"));
                }

                seen.insert(name.to_owned(), self.line_number);
                settings.repos.push((name.to_owned(), Section::default()));
                current = Some(settings.repos.len() - 1);
                continue;
            }

            let (key, value) = trimmed
                .split_once('=')
                .ok_or_else(|| self.error("expected 'key = value' format"))?;

            let key = key.trim().to_ascii_lowercase();
            if key.is_empty() {
                return Err(self.error("setting name must be non-empty"));
            }

            let section = match current {
                Some(index) => &mut settings.repos[index].1,
                None => &mut settings.global,
            };
            section.entries.push((key, value.trim().to_owned()));
        }

        Ok(settings)
    }
}
