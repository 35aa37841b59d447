use std::fmt;

use crate::{
    FilterSpec, MatchFlags, PatternKind,
    trace::{trace_classification, trace_pattern_evaluate},
};

/// Outcome of classifying one path against a [`FilterSpec`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchResult {
    /// An include pattern matched and no exclude pattern did.
    Included,
    /// An exclude pattern matched. Excludes outrank every other kind.
    Excluded,
    /// An ignore pattern matched and no include pattern claimed the path.
    Ignored,
    /// No include patterns exist and nothing filtered the path out.
    Implied,
    /// Include patterns exist but none matched, and nothing filtered the path.
    Maybe,
}

impl MatchResult {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Included,
        Self::Excluded,
        Self::Ignored,
        Self::Implied,
        Self::Maybe,
    ];

    /// Returns `true` for the outcomes that mean "process this path":
    /// [`Included`](Self::Included) and [`Implied`](Self::Implied).
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Included | Self::Implied)
    }

    /// Returns the lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Included => "included",
            Self::Excluded => "excluded",
            Self::Ignored => "ignored",
            Self::Implied => "implied",
            Self::Maybe => "maybe",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FilterSpec<'_> {
    /// Classifies `path`.
    ///
    /// Each pattern is tested with its own flags combined with `flags`. Sets
    /// disabled by a `NO_*` flag behave as empty. The decision order is fixed:
    ///
    /// 1. any exclude match gives [`MatchResult::Excluded`];
    /// 2. without include patterns, an ignore match gives
    ///    [`MatchResult::Ignored`] and anything else [`MatchResult::Implied`];
    /// 3. otherwise an include match gives [`MatchResult::Included`], then an
    ///    ignore match [`MatchResult::Ignored`], and anything else
    ///    [`MatchResult::Maybe`].
    #[must_use]
    pub fn should_include(&self, path: &str, flags: MatchFlags) -> MatchResult {
        let result = self.decide(path, flags);
        trace_classification(path, result);
        result
    }

    /// Returns `true` when [`should_include`](Self::should_include) yields
    /// [`MatchResult::Included`] or [`MatchResult::Implied`].
    #[must_use]
    pub fn match_path(&self, path: &str, flags: MatchFlags) -> bool {
        self.should_include(path, flags).is_accepted()
    }

    fn decide(&self, path: &str, flags: MatchFlags) -> MatchResult {
        if self.any_match(PatternKind::Exclude, path, flags) {
            return MatchResult::Excluded;
        }

        if self.effective(PatternKind::Include).is_none() {
            return if self.any_match(PatternKind::Ignore, path, flags) {
                MatchResult::Ignored
            } else {
                MatchResult::Implied
            };
        }

        if self.any_match(PatternKind::Include, path, flags) {
            MatchResult::Included
        } else if self.any_match(PatternKind::Ignore, path, flags) {
            MatchResult::Ignored
        } else {
            MatchResult::Maybe
        }
    }

    fn any_match(&self, kind: PatternKind, path: &str, flags: MatchFlags) -> bool {
        self.effective(kind).is_some_and(|set| {
            set.iter().any(|pattern| {
                let matched = pattern.matches(path, flags);
                trace_pattern_evaluate(path, kind, pattern.text(), matched);
                matched
            })
        })
    }
}
