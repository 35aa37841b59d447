use std::fs;
use std::path::Path;

use crate::{
    FilterError, FilterSpec, IgnoreSource, MatchFlags, PatternKind,
    trace::{trace_pattern_file_load, trace_settings_load},
};

/// Splits pattern-file text into patterns.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Each line is trimmed; empty lines
/// and lines whose first character is `#` or `;` are skipped.
///
/// # Examples
///
/// ```
/// use filespec::parse_patterns;
///
/// let text = "# build output\r\ntarget/**\r  *.o  \n\n; notes\nREADME";
/// let patterns: Vec<&str> = parse_patterns(text).collect();
/// assert_eq!(patterns, ["target/**", "*.o", "README"]);
/// ```
pub fn parse_patterns(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(['#', ';']))
}

impl FilterSpec<'_> {
    /// Adds every string yielded by `patterns` as a pattern of `kind`.
    ///
    /// Returns the number of patterns added.
    pub fn add_patterns<I, S>(&mut self, kind: PatternKind, patterns: I, flags: MatchFlags) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for pattern in patterns {
            self.add(kind, pattern.as_ref(), flags);
            added += 1;
        }
        added
    }

    /// Reads a pattern file and adds one pattern of `kind` per line.
    ///
    /// See [`parse_patterns`] for the line format. An empty file adds
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Io`] when the file cannot be read or is not
    /// valid UTF-8. The spec is left unchanged in that case.
    pub fn add_patterns_from_file(
        &mut self,
        kind: PatternKind,
        path: impl AsRef<Path>,
        flags: MatchFlags,
    ) -> Result<usize, FilterError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FilterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let added = self.add_patterns(kind, parse_patterns(&text), flags);
        trace_pattern_file_load(path, kind, added);
        Ok(added)
    }

    /// Adds the ignore patterns that `source` holds for `repo`.
    ///
    /// Every entry becomes a [`PatternKind::Ignore`] pattern with `flags`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::Config`] when the source fails. Nothing is
    /// added in that case.
    pub fn load_ignores_from_config<S>(
        &mut self,
        source: &S,
        repo: &str,
        flags: MatchFlags,
    ) -> Result<usize, FilterError>
    where
        S: IgnoreSource + ?Sized,
    {
        let ignores = source.ignores(repo).map_err(|error| FilterError::Config {
            repo: repo.to_owned(),
            source: error.into(),
        })?;
        let added = self.add_patterns(PatternKind::Ignore, ignores, flags);
        trace_settings_load(repo, added);
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fmt;

    use super::*;
    use crate::{KindMask, Pattern};

    struct FailingSource;

    #[derive(Debug)]
    struct Unavailable;

    impl fmt::Display for Unavailable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("settings store unavailable")
        }
    }

    impl std::error::Error for Unavailable {}

    impl IgnoreSource for FailingSource {
        type Error = Unavailable;

        fn ignores(&self, _repo: &str) -> Result<Vec<String>, Self::Error> {
            Err(Unavailable)
        }
    }

    fn texts<'s>(spec: &'s FilterSpec<'_>, kind: PatternKind) -> Vec<&'s str> {
        spec.patterns(kind).iter().map(Pattern::text).collect()
    }

    #[test]
    fn parse_handles_every_line_ending() {
        let parsed: Vec<&str> = parse_patterns("a\nb\r\nc\rd").collect();
        assert_eq!(parsed, ["a", "b", "c", "d"]);
    }

    #[test]
    fn parse_skips_comments_and_blank_lines() {
        let parsed: Vec<&str> = parse_patterns("  # hidden\n;also hidden\n \t \nkept # not a comment").collect();
        assert_eq!(parsed, ["kept # not a comment"]);
        assert_eq!(parse_patterns("").count(), 0);
    }

    #[test]
    fn add_patterns_counts_entries() {
        let mut spec = FilterSpec::new();
        let added = spec.add_patterns(PatternKind::Exclude, ["*.o", "*.a"], MatchFlags::NONE);
        assert_eq!(added, 2);
        assert_eq!(texts(&spec, PatternKind::Exclude), ["*.o", "*.a"]);

        let owned = vec![String::from("lib/**")];
        assert_eq!(spec.add_patterns(PatternKind::Include, &owned, MatchFlags::NONE), 1);
        assert_eq!(spec.count(KindMask::ALL), 3);
    }

    #[test]
    fn config_ignores_become_ignore_patterns() {
        let mut source = HashMap::new();
        source.insert("repo".to_owned(), vec!["*.tmp".to_owned(), "Debug".to_owned()]);

        let mut spec = FilterSpec::new();
        let added = spec
            .load_ignores_from_config(&source, "repo", MatchFlags::MATCH_ANYWHERE)
            .unwrap();

        assert_eq!(added, 2);
        assert_eq!(texts(&spec, PatternKind::Ignore), ["*.tmp", "Debug"]);
        assert!(
            spec.patterns(PatternKind::Ignore)
                .iter()
                .all(|p| p.flags() == MatchFlags::MATCH_ANYWHERE)
        );
    }

    #[test]
    fn unknown_repository_adds_nothing() {
        let source: HashMap<String, Vec<String>> = HashMap::new();
        let mut spec = FilterSpec::new();
        assert_eq!(
            spec.load_ignores_from_config(&source, "missing", MatchFlags::NONE)
                .unwrap(),
            0
        );
        assert!(!spec.has(KindMask::ALL));
    }

    #[test]
    fn source_failure_is_reported_with_repository() {
        let mut spec = FilterSpec::new();
        let error = spec
            .load_ignores_from_config(&FailingSource, "repo", MatchFlags::NONE)
            .unwrap_err();

        assert!(matches!(error, FilterError::Config { ref repo, .. } if repo == "repo"));
        assert!(error.to_string().contains("settings store unavailable"));
        assert!(!spec.has(KindMask::ALL));
    }
}
