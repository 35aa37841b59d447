use std::fmt;
use std::ops::BitOr;

use crate::FilterError;

/// Category a pattern belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternKind {
    /// Paths that are explicitly wanted.
    Include = 0,
    /// Paths that are always rejected.
    Exclude = 1,
    /// Paths filtered out unless explicitly included.
    Ignore = 2,
    /// Kept for forward compatibility; never consulted by the classifier.
    Reserved = 3,
}

impl PatternKind {
    /// Every kind in index order.
    pub const ALL: [Self; 4] = [Self::Include, Self::Exclude, Self::Ignore, Self::Reserved];

    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Returns the single-kind mask for this kind.
    #[must_use]
    pub const fn mask(self) -> KindMask {
        KindMask(1 << self as u8)
    }
}

impl TryFrom<u8> for PatternKind {
    type Error = FilterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Include),
            1 => Ok(Self::Exclude),
            2 => Ok(Self::Ignore),
            3 => Ok(Self::Reserved),
            _ => Err(FilterError::invalid_argument("unknown pattern kind")),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Include => f.write_str("include"),
            Self::Exclude => f.write_str("exclude"),
            Self::Ignore => f.write_str("ignore"),
            Self::Reserved => f.write_str("reserved"),
        }
    }
}

/// Set of [`PatternKind`]s addressed by [`FilterSpec::has`](crate::FilterSpec::has)
/// and [`FilterSpec::clear`](crate::FilterSpec::clear).
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct KindMask(u8);

impl KindMask {
    /// Names no kind.
    pub const NONE: Self = Self(0);
    /// Names every kind.
    pub const ALL: Self = Self(0b1111);

    /// Returns `true` when `kind` is part of the mask.
    #[must_use]
    pub const fn contains(self, kind: PatternKind) -> bool {
        self.0 & (1 << kind as u8) != 0
    }

    /// Iterates over the kinds named by the mask.
    pub fn kinds(self) -> impl Iterator<Item = PatternKind> {
        PatternKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl From<PatternKind> for KindMask {
    fn from(kind: PatternKind) -> Self {
        kind.mask()
    }
}

impl BitOr for KindMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<PatternKind> for KindMask {
    type Output = Self;

    fn bitor(self, rhs: PatternKind) -> Self {
        self | rhs.mask()
    }
}

impl BitOr for PatternKind {
    type Output = KindMask;

    fn bitor(self, rhs: Self) -> KindMask {
        self.mask() | rhs.mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_variants_match_expected_tokens() {
        let cases = [
            (PatternKind::Include, "include"),
            (PatternKind::Exclude, "exclude"),
            (PatternKind::Ignore, "ignore"),
            (PatternKind::Reserved, "reserved"),
        ];

        for (kind, expected) in cases {
            assert_eq!(kind.to_string(), expected);
        }
    }

    #[test]
    fn raw_values_round_trip_through_try_from() {
        for kind in PatternKind::ALL {
            assert_eq!(PatternKind::try_from(kind as u8).unwrap(), kind);
        }
    }

    #[test]
    fn out_of_range_kind_is_invalid_argument() {
        let error = PatternKind::try_from(4).unwrap_err();
        assert!(error.is_invalid_argument());
    }

    #[test]
    fn mask_combines_kinds() {
        let mask = PatternKind::Include | PatternKind::Ignore;
        assert!(mask.contains(PatternKind::Include));
        assert!(mask.contains(PatternKind::Ignore));
        assert!(!mask.contains(PatternKind::Exclude));
        assert_eq!(
            mask.kinds().collect::<Vec<_>>(),
            [PatternKind::Include, PatternKind::Ignore]
        );
    }

    #[test]
    fn all_mask_names_every_kind() {
        assert_eq!(KindMask::ALL.kinds().count(), 4);
        assert_eq!(KindMask::NONE.kinds().count(), 0);
    }
}
