//! Tracing hooks for pattern registration, loading and classification.
//!
//! Every hook is compiled behind the `tracing` feature flag and collapses to
//! an empty inline function when the feature is disabled, so the classifier
//! pays nothing for instrumentation it does not use.
//!
//! # Examples
//!
//! ```
//! use filespec::{MatchResult, trace::ClassifyTracer};
//!
//! let mut tracer = ClassifyTracer::new();
//! tracer.record(MatchResult::Included);
//! tracer.record(MatchResult::Ignored);
//! tracer.record(MatchResult::Implied);
//!
//! tracer.summary();
//! assert_eq!(tracer.total(), 3);
//! assert_eq!(tracer.accepted(), 2);
//! assert_eq!(tracer.count(MatchResult::Ignored), 1);
//! ```

use std::path::Path;

use crate::{MatchFlags, MatchResult, PatternKind};

/// Target name for tracing events emitted by this crate.
#[cfg(feature = "tracing")]
const FILTER_TARGET: &str = "vcfilter::filter";

/// Traces a pattern being added to a spec.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pattern_added(kind: PatternKind, pattern: &str, flags: MatchFlags) {
    tracing::debug!(
        target: FILTER_TARGET,
        kind = %kind,
        pattern = %pattern,
        flags = ?flags,
        "pattern_added"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pattern_added(_kind: PatternKind, _pattern: &str, _flags: MatchFlags) {}

/// Traces one pattern being tested against a path.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pattern_evaluate(path: &str, kind: PatternKind, pattern: &str, matched: bool) {
    tracing::trace!(
        target: FILTER_TARGET,
        path = %path,
        kind = %kind,
        pattern = %pattern,
        matched = matched,
        "pattern_evaluate"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pattern_evaluate(_path: &str, _kind: PatternKind, _pattern: &str, _matched: bool) {}

/// Traces the final classification of a path.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_classification(path: &str, result: MatchResult) {
    tracing::debug!(
        target: FILTER_TARGET,
        path = %path,
        result = %result,
        "classification"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_classification(_path: &str, _result: MatchResult) {}

/// Traces a pattern file being loaded.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pattern_file_load(path: &Path, kind: PatternKind, pattern_count: usize) {
    tracing::debug!(
        target: FILTER_TARGET,
        file = %path.display(),
        kind = %kind,
        pattern_count = pattern_count,
        "pattern_file_load"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pattern_file_load(_path: &Path, _kind: PatternKind, _pattern_count: usize) {}

/// Traces ignore patterns being loaded from a settings source.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_settings_load(repo: &str, pattern_count: usize) {
    tracing::debug!(
        target: FILTER_TARGET,
        repo = %repo,
        pattern_count = pattern_count,
        "settings_load"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_settings_load(_repo: &str, _pattern_count: usize) {}

/// Traces the counters gathered by a [`ClassifyTracer`].
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_classify_summary(tracer: &ClassifyTracer) {
    tracing::info!(
        target: FILTER_TARGET,
        total = tracer.total(),
        included = tracer.count(MatchResult::Included),
        excluded = tracer.count(MatchResult::Excluded),
        ignored = tracer.count(MatchResult::Ignored),
        implied = tracer.count(MatchResult::Implied),
        maybe = tracer.count(MatchResult::Maybe),
        "classify_summary"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_classify_summary(_tracer: &ClassifyTracer) {}

/// Per-outcome counters for a batch of classifications.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClassifyTracer {
    counts: [usize; 5],
}

impl ClassifyTracer {
    /// Creates a tracer with zero counts.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 5] }
    }

    /// Records one classification outcome.
    pub fn record(&mut self, result: MatchResult) {
        self.counts[slot(result)] += 1;
    }

    /// Returns how many times `result` was recorded.
    #[must_use]
    pub const fn count(&self, result: MatchResult) -> usize {
        self.counts[slot(result)]
    }

    /// Returns the number of recorded outcomes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns the number of outcomes that accept the path.
    #[must_use]
    pub const fn accepted(&self) -> usize {
        self.count(MatchResult::Included) + self.count(MatchResult::Implied)
    }

    /// Emits a summary event with the accumulated counters.
    pub fn summary(&self) {
        trace_classify_summary(self);
    }

    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        self.counts = [0; 5];
    }
}

const fn slot(result: MatchResult) -> usize {
    match result {
        MatchResult::Included => 0,
        MatchResult::Excluded => 1,
        MatchResult::Ignored => 2,
        MatchResult::Implied => 3,
        MatchResult::Maybe => 4,
    }
}
