//! Component-aware glob matching.
//!
//! Patterns and paths are split into components on either `/` or `\`; the two
//! separators are interchangeable everywhere. Within one component `?` matches
//! a single character and `*` matches any run of characters. A component that
//! consists of exactly `**` matches zero or more whole path components; `**`
//! next to other characters degrades to `*`. Neither `?` nor `*` may match the
//! leading `.` of a path component, so `*` does not see hidden entries unless
//! the pattern spells the dot.
//!
//! Matching runs in two layers. `wildcard_match` handles a single component
//! with the linear single-backtrack-point algorithm. Component sequences are
//! aligned with a dynamic-programming table over
//! `(pattern segment, path component)`, so combinations of `**` stay
//! polynomial in the number of components.

use crate::MatchFlags;

/// First path component that denotes the repository root.
pub const REPO_ROOT_MARKER: &str = "@";

/// Returns `true` for either accepted path separator.
#[inline]
#[must_use]
pub const fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Returns whether `pattern` matches `path` under `flags`.
///
/// This compiles `pattern` on every call; hold a [`Glob`] when the same
/// pattern is tested against many paths.
///
/// # Examples
///
/// ```
/// use filespec::{MatchFlags, match_pattern};
///
/// assert!(match_pattern("src/**/*.rs", "src/a/b/lib.rs", MatchFlags::NONE));
/// assert!(match_pattern("src/*.rs", "src\\main.rs", MatchFlags::NONE));
/// assert!(!match_pattern("*.rs", ".hidden.rs", MatchFlags::NONE));
/// assert!(match_pattern("target", "a/target/debug", MatchFlags::MATCH_ANYWHERE | MatchFlags::MATCH_FOLDERS_RECURSIVELY));
/// ```
#[must_use]
pub fn match_pattern(pattern: &str, path: &str, flags: MatchFlags) -> bool {
    Glob::new(pattern).matches(path, flags)
}

/// Variant of [`match_pattern`] that accepts missing inputs.
///
/// A missing pattern matches only with [`MatchFlags::MATCH_NULL_PATTERN`]; a
/// missing path only with [`MatchFlags::MATCH_NULL_FILENAME`]. When both are
/// missing both flags are required.
#[must_use]
pub fn match_pattern_opt(pattern: Option<&str>, path: Option<&str>, flags: MatchFlags) -> bool {
    match (pattern, path) {
        (Some(pattern), Some(path)) => match_pattern(pattern, path, flags),
        (None, Some(_)) => flags.contains(MatchFlags::MATCH_NULL_PATTERN),
        (Some(_), None) => flags.contains(MatchFlags::MATCH_NULL_FILENAME),
        (None, None) => flags
            .contains(MatchFlags::MATCH_NULL_PATTERN | MatchFlags::MATCH_NULL_FILENAME),
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Segment {
    AnyComponents,
    Component(Box<[char]>),
}

#[derive(Clone, Copy)]
enum Step<'g> {
    AnyComponents,
    Component(&'g [char]),
}

/// Pre-split form of a glob pattern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Glob {
    segments: Vec<Segment>,
    rooted_at_marker: bool,
    absolute: bool,
}

impl Glob {
    /// Compiles `pattern`. Every string is a valid pattern.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split(is_separator)
            .map(|component| {
                if component == "**" {
                    Segment::AnyComponents
                } else {
                    Segment::Component(component.chars().collect())
                }
            })
            .collect();

        Self {
            segments,
            rooted_at_marker: starts_with_root_marker(pattern),
            absolute: pattern.starts_with(is_separator),
        }
    }

    /// Returns whether the compiled pattern matches `path` under `flags`.
    #[must_use]
    pub fn matches(&self, path: &str, flags: MatchFlags) -> bool {
        let path = if flags.contains(MatchFlags::MATCH_REPO_ROOT) {
            self.relative_to_root(path)
        } else {
            path
        };

        let steps = self.steps(flags);
        if match_steps(&steps, path) {
            return true;
        }

        flags.contains(MatchFlags::MATCH_TRAILING_SLASH)
            && strip_single_trailing_separator(path)
                .is_some_and(|trimmed| match_steps(&steps, trimmed))
    }

    fn relative_to_root<'p>(&self, path: &'p str) -> &'p str {
        if self.rooted_at_marker || !starts_with_root_marker(path) {
            return path;
        }
        let rest = &path[REPO_ROOT_MARKER.len()..];
        if self.absolute {
            rest
        } else {
            rest.strip_prefix(is_separator).unwrap_or(rest)
        }
    }

    fn steps(&self, flags: MatchFlags) -> Vec<Step<'_>> {
        let mut steps = Vec::with_capacity(self.segments.len() + 2);

        if flags.contains(MatchFlags::MATCH_ANYWHERE)
            && !matches!(self.segments.first(), Some(Segment::AnyComponents))
        {
            steps.push(Step::AnyComponents);
        }

        steps.extend(self.segments.iter().map(|segment| match segment {
            Segment::AnyComponents => Step::AnyComponents,
            Segment::Component(chars) => Step::Component(chars),
        }));

        if flags.contains(MatchFlags::MATCH_FOLDERS_RECURSIVELY) {
            // "dir/" plus the recursive suffix reads as "dir/**", not "dir//**".
            if self.segments.len() > 1
                && matches!(steps.last(), Some(Step::Component(chars)) if chars.is_empty())
            {
                steps.pop();
            }
            if !matches!(steps.last(), Some(Step::AnyComponents)) {
                steps.push(Step::AnyComponents);
            }
        }

        steps
    }
}

fn starts_with_root_marker(text: &str) -> bool {
    text.strip_prefix(REPO_ROOT_MARKER)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(is_separator))
}

/// Drops one trailing separator unless the path ends in a mixed `/\` or
/// `\/` pair.
fn strip_single_trailing_separator(path: &str) -> Option<&str> {
    let last = path.chars().next_back().filter(|&c| is_separator(c))?;
    let trimmed = &path[..path.len() - last.len_utf8()];
    match trimmed.chars().next_back() {
        Some(prev) if is_separator(prev) && prev != last => None,
        _ => Some(trimmed),
    }
}

fn match_steps(steps: &[Step<'_>], path: &str) -> bool {
    let components: Vec<&str> = path.split(is_separator).collect();
    let count = components.len();

    // `next[j]` holds whether the steps after the current one match
    // `components[j..]`.
    let mut next = vec![false; count + 1];
    let mut current = vec![false; count + 1];
    next[count] = true;

    for step in steps.iter().rev() {
        match step {
            Step::AnyComponents => {
                current[count] = next[count];
                for j in (0..count).rev() {
                    current[j] = next[j] || current[j + 1];
                }
            }
            Step::Component(pattern) => {
                current[count] = false;
                for j in (0..count).rev() {
                    current[j] = next[j + 1] && component_matches(pattern, components[j]);
                }
            }
        }
        std::mem::swap(&mut current, &mut next);
    }

    next[0]
}

fn component_matches(pattern: &[char], name: &str) -> bool {
    if name.starts_with('.') && matches!(pattern.first(), Some('*' | '?')) {
        return false;
    }
    wildcard_match(pattern, name)
}

/// Matches one pattern component against one path component.
///
/// `*` retracts to the most recent star on mismatch, which is sufficient
/// because no other construct can consume a variable number of characters.
fn wildcard_match(pattern: &[char], name: &str) -> bool {
    let mut p = 0;
    let mut t = 0;
    let mut star: Option<usize> = None;
    let mut resume = 0;

    while let Some(c) = name[t..].chars().next() {
        match pattern.get(p) {
            Some('*') => {
                star = Some(p);
                resume = t;
                p += 1;
            }
            Some(&expected) if expected == '?' || expected == c => {
                p += 1;
                t += c.len_utf8();
            }
            _ => {
                let Some(star_at) = star else {
                    return false;
                };
                let Some(skipped) = name[resume..].chars().next() else {
                    return false;
                };
                p = star_at + 1;
                resume += skipped.len_utf8();
                t = resume;
            }
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
