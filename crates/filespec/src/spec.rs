use std::borrow::Cow;

use crate::{
    CopyMode, FilterError, KindMask, MatchFlags, Pattern, PatternKind, PatternSet, SpecFlags,
    trace::trace_pattern_added,
};

static BLANK: FilterSpec<'static> = FilterSpec::new();

/// Include, exclude, ignore and reserved pattern sets plus global switches.
///
/// Pattern text is stored copy-on-write: [`add`](Self::add) takes a private
/// copy, [`add_borrowed`](Self::add_borrowed) keeps a reference whose lifetime
/// the borrow checker ties to the spec, and [`add_owned`](Self::add_owned)
/// adopts a caller `String` without copying. [`deep_copy`](Self::deep_copy)
/// always yields a spec that owns every pattern.
///
/// # Examples
///
/// ```
/// use filespec::{FilterSpec, KindMask, MatchFlags, MatchResult, PatternKind};
///
/// let mut spec = FilterSpec::new();
/// spec.add(PatternKind::Include, "src/**", MatchFlags::NONE);
/// spec.add(PatternKind::Exclude, "*.orig", MatchFlags::MATCH_ANYWHERE);
///
/// assert!(spec.has(PatternKind::Include.into()));
/// assert_eq!(spec.should_include("src/lib.rs", MatchFlags::NONE), MatchResult::Included);
/// assert_eq!(spec.should_include("src/lib.rs.orig", MatchFlags::NONE), MatchResult::Excluded);
/// assert_eq!(spec.should_include("README", MatchFlags::NONE), MatchResult::Maybe);
///
/// spec.clear(KindMask::ALL);
/// assert!(!spec.has(KindMask::ALL));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FilterSpec<'a> {
    sets: [PatternSet<'a>; 4],
    flags: SpecFlags,
}

impl<'a> FilterSpec<'a> {
    /// Creates a spec with no patterns and no flags.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sets: [
                PatternSet::new(),
                PatternSet::new(),
                PatternSet::new(),
                PatternSet::new(),
            ],
            flags: SpecFlags::NONE,
        }
    }

    /// Returns the shared spec with no patterns and no flags.
    ///
    /// Only a shared reference is ever handed out, so the value cannot be
    /// modified once the process has started.
    #[must_use]
    pub fn blank() -> &'static FilterSpec<'static> {
        &BLANK
    }

    /// Returns an independent copy that owns every pattern text.
    #[must_use]
    pub fn deep_copy(&self) -> FilterSpec<'static> {
        FilterSpec {
            sets: [
                self.sets[0].to_owned_set(),
                self.sets[1].to_owned_set(),
                self.sets[2].to_owned_set(),
                self.sets[3].to_owned_set(),
            ],
            flags: self.flags,
        }
    }

    /// Removes every pattern and clears every flag.
    pub fn reset(&mut self) {
        self.clear(KindMask::ALL);
        self.flags = SpecFlags::NONE;
    }

    /// Adds a private copy of `text` as a pattern of `kind`.
    pub fn add(&mut self, kind: PatternKind, text: &str, flags: MatchFlags) {
        self.push(kind, Cow::Owned(text.to_owned()), flags);
    }

    /// Adds `text` without copying it; the spec borrows it for `'a`.
    pub fn add_borrowed(&mut self, kind: PatternKind, text: &'a str, flags: MatchFlags) {
        self.push(kind, Cow::Borrowed(text), flags);
    }

    /// Adds `text`, taking ownership of the caller's allocation.
    pub fn add_owned(&mut self, kind: PatternKind, text: String, flags: MatchFlags) {
        self.push(kind, Cow::Owned(text), flags);
    }

    /// Adds `text` either copied or borrowed according to `mode`.
    pub fn add_with_mode(
        &mut self,
        kind: PatternKind,
        text: &'a str,
        flags: MatchFlags,
        mode: CopyMode,
    ) {
        match mode {
            CopyMode::Deep => self.add(kind, text, flags),
            CopyMode::Shallow => self.add_borrowed(kind, text, flags),
        }
    }

    /// Adds a private copy of the first `len` bytes of `text`.
    ///
    /// A length-bounded slice is always copied. Requesting
    /// [`CopyMode::Shallow`] is rejected, as are a zero `len`, a `len` past
    /// the end of `text`, and a `len` that splits a character.
    pub fn add_bounded(
        &mut self,
        kind: PatternKind,
        text: &str,
        len: usize,
        flags: MatchFlags,
        mode: CopyMode,
    ) -> Result<(), FilterError> {
        if mode == CopyMode::Shallow {
            return Err(FilterError::invalid_argument(
                "a length-bounded pattern cannot be borrowed",
            ));
        }
        if len == 0 {
            return Err(FilterError::invalid_argument(
                "pattern length must be non-zero",
            ));
        }
        let Some(bounded) = text.get(..len) else {
            return Err(FilterError::invalid_argument(
                "pattern length exceeds the text or splits a character",
            ));
        };
        self.add(kind, bounded, flags);
        Ok(())
    }

    fn push(&mut self, kind: PatternKind, text: Cow<'a, str>, flags: MatchFlags) {
        trace_pattern_added(kind, &text, flags);
        self.sets[kind.index()].push(Pattern::new(text, flags));
    }

    /// Returns `true` when at least one pattern of a kind named by `mask` exists.
    #[must_use]
    pub fn has(&self, mask: KindMask) -> bool {
        mask.kinds().any(|kind| !self.sets[kind.index()].is_empty())
    }

    /// Returns the number of patterns of the kinds named by `mask`.
    #[must_use]
    pub fn count(&self, mask: KindMask) -> usize {
        mask.kinds().map(|kind| self.sets[kind.index()].len()).sum()
    }

    /// Removes all patterns of the kinds named by `mask`.
    ///
    /// Other kinds and the global flags are left untouched.
    pub fn clear(&mut self, mask: KindMask) {
        for kind in mask.kinds() {
            self.sets[kind.index()].clear();
        }
    }

    /// Returns the stored patterns of `kind`, regardless of the `NO_*` flags.
    #[must_use]
    pub fn patterns(&self, kind: PatternKind) -> &PatternSet<'a> {
        &self.sets[kind.index()]
    }

    /// Returns the patterns of `kind` the classifier consults.
    ///
    /// `None` means the set is empty or disabled by a `NO_*` flag.
    pub(crate) fn effective(&self, kind: PatternKind) -> Option<&PatternSet<'a>> {
        let disabled = match kind {
            PatternKind::Include => self.flags.contains(SpecFlags::NO_INCLUDES),
            PatternKind::Exclude => self.flags.contains(SpecFlags::NO_EXCLUDES),
            PatternKind::Ignore => self.flags.contains(SpecFlags::NO_IGNORES),
            PatternKind::Reserved => true,
        };
        let set = &self.sets[kind.index()];
        (!disabled && !set.is_empty()).then_some(set)
    }

    /// Returns the global flags.
    #[must_use]
    pub const fn flags(&self) -> SpecFlags {
        self.flags
    }

    /// Replaces the global flags, returning the previous value.
    pub fn set_flags(&mut self, flags: SpecFlags) -> SpecFlags {
        std::mem::replace(&mut self.flags, flags)
    }

    /// Sets the bits in `add`, then clears the bits in `remove`.
    ///
    /// Returns the flags before and after the change.
    pub fn modify_flags(&mut self, add: SpecFlags, remove: SpecFlags) -> (SpecFlags, SpecFlags) {
        let old = self.flags;
        self.flags = old.union(add).difference(remove);
        (old, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_spec_is_empty() {
        let spec = FilterSpec::new();
        assert!(!spec.has(KindMask::ALL));
        assert_eq!(spec.count(KindMask::ALL), 0);
        assert!(spec.flags().is_empty());
        assert_eq!(spec, FilterSpec::default());
    }

    #[test]
    fn add_then_has_for_every_kind() {
        for kind in PatternKind::ALL {
            let mut spec = FilterSpec::new();
            spec.add(kind, "x", MatchFlags::NONE);
            assert!(spec.has(kind.into()));
            assert!(spec.has(KindMask::ALL));
            for other in PatternKind::ALL.into_iter().filter(|other| *other != kind) {
                assert!(!spec.has(other.into()));
            }
            spec.clear(kind.into());
            assert!(!spec.has(kind.into()));
        }
    }

    #[test]
    fn has_accepts_multi_kind_masks() {
        let mut spec = FilterSpec::new();
        spec.add(PatternKind::Ignore, "*.tmp", MatchFlags::NONE);
        assert!(spec.has(PatternKind::Include | PatternKind::Ignore));
        assert!(!spec.has(PatternKind::Include | PatternKind::Exclude));
        assert!(!spec.has(KindMask::NONE));
    }

    #[test]
    fn clear_leaves_other_kinds_and_flags() {
        let mut spec = FilterSpec::new();
        spec.add(PatternKind::Include, "a", MatchFlags::NONE);
        spec.add(PatternKind::Exclude, "b", MatchFlags::NONE);
        spec.set_flags(SpecFlags::NO_IGNORES);

        spec.clear(PatternKind::Include.into());

        assert!(!spec.has(PatternKind::Include.into()));
        assert!(spec.has(PatternKind::Exclude.into()));
        assert_eq!(spec.flags(), SpecFlags::NO_IGNORES);
    }

    #[test]
    fn reset_clears_patterns_and_flags() {
        let mut spec = FilterSpec::new();
        spec.add(PatternKind::Include, "a", MatchFlags::NONE);
        spec.add(PatternKind::Reserved, "b", MatchFlags::NONE);
        spec.set_flags(SpecFlags::NO_EXCLUDES | SpecFlags::NO_INCLUDES);

        spec.reset();

        assert_eq!(spec, FilterSpec::new());
    }

    #[test]
    fn storage_modes_are_recorded() {
        let text = String::from("borrowed");
        let mut spec = FilterSpec::new();
        spec.add_borrowed(PatternKind::Include, &text, MatchFlags::NONE);
        spec.add_with_mode(PatternKind::Include, &text, MatchFlags::NONE, CopyMode::Deep);
        spec.add_owned(PatternKind::Include, "owned".to_owned(), MatchFlags::NONE);

        let stored: Vec<bool> = spec
            .patterns(PatternKind::Include)
            .iter()
            .map(Pattern::is_borrowed)
            .collect();
        assert_eq!(stored, [true, false, false]);
    }

    #[test]
    fn deep_copy_outlives_borrowed_source() {
        let copy = {
            let text = String::from("src/*.c");
            let mut spec = FilterSpec::new();
            spec.add_with_mode(PatternKind::Exclude, &text, MatchFlags::NONE, CopyMode::Shallow);
            spec.set_flags(SpecFlags::NO_IGNORES);
            spec.deep_copy()
        };

        assert!(copy.patterns(PatternKind::Exclude).iter().all(|p| !p.is_borrowed()));
        assert_eq!(copy.flags(), SpecFlags::NO_IGNORES);
        assert!(copy.patterns(PatternKind::Exclude).matches("src/a.c", MatchFlags::NONE));
    }

    #[test]
    fn bounded_add_copies_exact_prefix() {
        let mut spec = FilterSpec::new();
        spec.add_bounded(PatternKind::Include, "*.c trailing", 3, MatchFlags::NONE, CopyMode::Deep)
            .unwrap();
        let texts: Vec<&str> = spec
            .patterns(PatternKind::Include)
            .iter()
            .map(Pattern::text)
            .collect();
        assert_eq!(texts, ["*.c"]);
    }

    #[test]
    fn bounded_add_rejects_invalid_arguments() {
        let mut spec = FilterSpec::new();
        let cases = [
            ("abc", 0, CopyMode::Deep),
            ("abc", 2, CopyMode::Shallow),
            ("abc", 4, CopyMode::Deep),
            ("é", 1, CopyMode::Deep),
        ];
        for (text, len, mode) in cases {
            let error = spec
                .add_bounded(PatternKind::Include, text, len, MatchFlags::NONE, mode)
                .unwrap_err();
            assert!(error.is_invalid_argument(), "{text:?} {len} {mode:?}");
        }
        assert!(!spec.has(KindMask::ALL));
    }

    #[test]
    fn set_flags_reports_previous_value() {
        let mut spec = FilterSpec::new();
        assert_eq!(spec.set_flags(SpecFlags::NO_INCLUDES), SpecFlags::NONE);
        assert_eq!(spec.set_flags(SpecFlags::NO_EXCLUDES), SpecFlags::NO_INCLUDES);
        assert_eq!(spec.flags(), SpecFlags::NO_EXCLUDES);
    }

    #[test]
    fn modify_flags_adds_then_removes() {
        let mut spec = FilterSpec::new();
        spec.set_flags(SpecFlags::NO_INCLUDES);

        let (old, new) = spec.modify_flags(
            SpecFlags::NO_EXCLUDES | SpecFlags::NO_IGNORES,
            SpecFlags::NO_INCLUDES,
        );

        assert_eq!(old, SpecFlags::NO_INCLUDES);
        assert_eq!(new, SpecFlags::NO_EXCLUDES | SpecFlags::NO_IGNORES);
        assert_eq!(spec.flags(), new);
    }

    #[test]
    fn blank_spec_is_shared_and_empty() {
        let blank = FilterSpec::blank();
        assert!(std::ptr::eq(blank, FilterSpec::blank()));
        assert!(!blank.has(KindMask::ALL));
        assert!(blank.flags().is_empty());
    }

    #[test]
    fn effective_sets_honour_disable_flags() {
        let mut spec = FilterSpec::new();
        spec.add(PatternKind::Include, "a", MatchFlags::NONE);
        spec.add(PatternKind::Reserved, "a", MatchFlags::NONE);
        assert!(spec.effective(PatternKind::Include).is_some());
        assert!(spec.effective(PatternKind::Exclude).is_none());
        assert!(spec.effective(PatternKind::Reserved).is_none());

        spec.set_flags(SpecFlags::NO_INCLUDES);
        assert!(spec.effective(PatternKind::Include).is_none());
        assert!(spec.has(PatternKind::Include.into()));
    }
}
