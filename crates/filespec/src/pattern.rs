use std::borrow::Cow;

use crate::{Glob, MatchFlags};

/// How [`FilterSpec::add_with_mode`](crate::FilterSpec::add_with_mode) stores
/// caller-supplied pattern text.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CopyMode {
    /// Store a private copy of the text.
    #[default]
    Deep,
    /// Borrow the caller's text for the lifetime of the spec.
    Shallow,
}

/// A single glob pattern together with the match flags it was registered with.
#[derive(Clone, Debug)]
pub struct Pattern<'a> {
    text: Cow<'a, str>,
    flags: MatchFlags,
    glob: Glob,
}

impl<'a> Pattern<'a> {
    pub(crate) fn new(text: Cow<'a, str>, flags: MatchFlags) -> Self {
        let glob = Glob::new(&text);
        Self { text, flags, glob }
    }

    /// Returns the pattern text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the flags captured when the pattern was added.
    #[must_use]
    pub const fn flags(&self) -> MatchFlags {
        self.flags
    }

    /// Returns `true` when the text borrows caller memory.
    #[must_use]
    pub const fn is_borrowed(&self) -> bool {
        matches!(self.text, Cow::Borrowed(_))
    }

    /// Tests `path` using the pattern's own flags combined with `extra`.
    #[must_use]
    pub fn matches(&self, path: &str, extra: MatchFlags) -> bool {
        self.glob.matches(path, self.flags | extra)
    }

    /// Returns a copy that owns its text.
    #[must_use]
    pub fn into_owned(self) -> Pattern<'static> {
        Pattern {
            text: Cow::Owned(self.text.into_owned()),
            flags: self.flags,
            glob: self.glob,
        }
    }

    pub(crate) fn to_owned_pattern(&self) -> Pattern<'static> {
        Pattern {
            text: Cow::Owned(self.text.to_string()),
            flags: self.flags,
            glob: self.glob.clone(),
        }
    }
}

impl PartialEq for Pattern<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.flags == other.flags
    }
}

impl Eq for Pattern<'_> {}

/// Unordered collection of patterns for one [`PatternKind`](crate::PatternKind).
///
/// Matching has set semantics: a path matches the set when any member matches.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PatternSet<'a> {
    patterns: Vec<Pattern<'a>>,
}

impl<'a> PatternSet<'a> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    /// Returns `true` when the set holds no pattern.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns the number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Iterates over the stored patterns.
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern<'a>> {
        self.patterns.iter()
    }

    /// Returns the first pattern matching `path`, if any.
    #[must_use]
    pub fn find_match(&self, path: &str, extra: MatchFlags) -> Option<&Pattern<'a>> {
        self.patterns.iter().find(|pattern| pattern.matches(path, extra))
    }

    /// Returns `true` when any pattern matches `path`.
    #[must_use]
    pub fn matches(&self, path: &str, extra: MatchFlags) -> bool {
        self.find_match(path, extra).is_some()
    }

    pub(crate) fn push(&mut self, pattern: Pattern<'a>) {
        self.patterns.push(pattern);
    }

    pub(crate) fn clear(&mut self) {
        self.patterns.clear();
    }

    pub(crate) fn to_owned_set(&self) -> PatternSet<'static> {
        PatternSet {
            patterns: self.patterns.iter().map(Pattern::to_owned_pattern).collect(),
        }
    }
}

impl<'s, 'a> IntoIterator for &'s PatternSet<'a> {
    type Item = &'s Pattern<'a>;
    type IntoIter = std::slice::Iter<'s, Pattern<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
