#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filespec` decides whether a repository-relative path takes part in
//! version-control operations. A [`FilterSpec`] holds four pattern sets
//! (include, exclude, ignore and a reserved kind with no behaviour) together
//! with global switches that disable individual sets. Classifying a path
//! yields one of five [`MatchResult`] outcomes, and [`FilterSpec::match_path`]
//! collapses them to a yes/no answer for callers such as `status`, `add` or
//! `commit`.
//!
//! # Design
//!
//! - [`match_pattern`] and [`Glob`] implement the glob grammar: `?`, `*`,
//!   whole-component `**`, with `/` and `\` treated as the same separator.
//!   [`MatchFlags`] adjust anchoring (`MATCH_ANYWHERE`), recursive folder
//!   matching, trailing-separator tolerance, repository-root markers and how
//!   absent inputs are treated.
//! - [`Pattern`] stores its text copy-on-write. Callers choose between a
//!   private copy, a borrow tied to the spec's lifetime, or handing over an
//!   owned `String`; [`FilterSpec::deep_copy`] always detaches from caller
//!   memory.
//! - The classifier combines every pattern's own flags with the flags given
//!   at classification time.
//! - Loaders fill a spec from iterators, pattern files
//!   ([`parse_patterns`]) or an [`IgnoreSource`] such as a per-repository
//!   settings store.
//!
//! # Invariants
//!
//! - An exclude match always yields [`MatchResult::Excluded`].
//! - Without include patterns, paths are [`MatchResult::Ignored`] or
//!   [`MatchResult::Implied`]. With include patterns, paths are
//!   [`MatchResult::Included`], [`MatchResult::Ignored`] or
//!   [`MatchResult::Maybe`].
//! - [`SpecFlags::NO_INCLUDES`], [`SpecFlags::NO_EXCLUDES`] and
//!   [`SpecFlags::NO_IGNORES`] make the corresponding set behave as empty
//!   without removing its patterns.
//! - [`FilterSpec::clear`] never touches the global flags;
//!   [`FilterSpec::reset`] clears both.
//! - The shared [`FilterSpec::blank`] value is only ever borrowed immutably.
//!
//! # Errors
//!
//! Matching never fails. [`FilterError`] covers rejected arguments to
//! [`FilterSpec::add_bounded`] and [`PatternKind::try_from`], unreadable
//! pattern files, and failing [`IgnoreSource`] implementations.
//!
//! # Examples
//!
//! ```
//! use filespec::{FilterSpec, MatchFlags, MatchResult, PatternKind};
//!
//! let mut spec = FilterSpec::new();
//! spec.add(PatternKind::Exclude, "Debug/**", MatchFlags::MATCH_ANYWHERE);
//! spec.add(PatternKind::Ignore, "*.tmp", MatchFlags::NONE);
//!
//! assert_eq!(
//!     spec.should_include("foo/Debug/bar.txt", MatchFlags::NONE),
//!     MatchResult::Excluded
//! );
//! assert_eq!(spec.should_include("x.tmp", MatchFlags::NONE), MatchResult::Ignored);
//! assert!(spec.match_path("x.txt", MatchFlags::NONE));
//! ```
//!
//! # See also
//!
//! - [`trace`] for the tracing hooks enabled by the `tracing` feature.
//! - The `settings` crate for a file-backed [`IgnoreSource`].

mod classify;
mod error;
mod flags;
mod glob;
mod kind;
mod load;
mod pattern;
mod source;
mod spec;
pub mod trace;

pub use classify::MatchResult;
pub use error::{FilterError, SourceError};
pub use flags::{MatchFlags, SpecFlags};
pub use glob::{Glob, REPO_ROOT_MARKER, is_separator, match_pattern, match_pattern_opt};
pub use kind::{KindMask, PatternKind};
pub use load::parse_patterns;
pub use pattern::{CopyMode, Pattern, PatternSet};
pub use source::{IGNORES_SETTING, IgnoreSource};
pub use spec::FilterSpec;
pub use trace::ClassifyTracer;

#[cfg(test)]
mod tests;
