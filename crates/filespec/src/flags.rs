//! Bit flags controlling pattern matching and spec-wide pattern sets.
//!
//! Two independent bitsets live here:
//!
//! - [`MatchFlags`] tune how a single pattern is compared against a path. They
//!   are captured per pattern when it is added and may also be supplied per
//!   classification call; the two are OR-ed together.
//! - [`SpecFlags`] are global switches on a [`FilterSpec`](crate::FilterSpec)
//!   that force whole pattern sets to behave as empty.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

const MATCH_NULL_PATTERN_BIT: u32 = 1 << 0;
const MATCH_NULL_FILENAME_BIT: u32 = 1 << 1;
const MATCH_ANYWHERE_BIT: u32 = 1 << 2;
const MATCH_REPO_ROOT_BIT: u32 = 1 << 3;
const MATCH_TRAILING_SLASH_BIT: u32 = 1 << 4;
const MATCH_FOLDERS_RECURSIVELY_BIT: u32 = 1 << 5;

const MATCH_ALL_BITS: u32 = MATCH_NULL_PATTERN_BIT
    | MATCH_NULL_FILENAME_BIT
    | MATCH_ANYWHERE_BIT
    | MATCH_REPO_ROOT_BIT
    | MATCH_TRAILING_SLASH_BIT
    | MATCH_FOLDERS_RECURSIVELY_BIT;

/// Options applied when comparing one pattern against one path.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct MatchFlags(u32);

impl MatchFlags {
    /// No options: anchored, exact component matching.
    pub const NONE: Self = Self(0);
    /// A missing pattern matches vacuously instead of failing.
    pub const MATCH_NULL_PATTERN: Self = Self(MATCH_NULL_PATTERN_BIT);
    /// A missing path matches vacuously instead of failing.
    pub const MATCH_NULL_FILENAME: Self = Self(MATCH_NULL_FILENAME_BIT);
    /// The pattern may start matching at any component boundary (`**/` prefix).
    pub const MATCH_ANYWHERE: Self = Self(MATCH_ANYWHERE_BIT);
    /// Paths carrying the repository-root marker `@` are matched relative to it.
    pub const MATCH_REPO_ROOT: Self = Self(MATCH_REPO_ROOT_BIT);
    /// A single trailing separator on the path is ignored.
    pub const MATCH_TRAILING_SLASH: Self = Self(MATCH_TRAILING_SLASH_BIT);
    /// A match also covers everything nested below it (`/**` suffix).
    pub const MATCH_FOLDERS_RECURSIVELY: Self = Self(MATCH_FOLDERS_RECURSIVELY_BIT);

    /// Builds flags from raw bits, dropping bits with no defined meaning.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & MATCH_ALL_BITS)
    }

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` when no option is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` when every bit of `other` is also set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Sets every bit of `other`.
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clears every bit of `other`.
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl BitOr for MatchFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for MatchFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}

impl BitAnd for MatchFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Debug for MatchFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(u32, &str); 6] = [
            (MATCH_NULL_PATTERN_BIT, "MATCH_NULL_PATTERN"),
            (MATCH_NULL_FILENAME_BIT, "MATCH_NULL_FILENAME"),
            (MATCH_ANYWHERE_BIT, "MATCH_ANYWHERE"),
            (MATCH_REPO_ROOT_BIT, "MATCH_REPO_ROOT"),
            (MATCH_TRAILING_SLASH_BIT, "MATCH_TRAILING_SLASH"),
            (MATCH_FOLDERS_RECURSIVELY_BIT, "MATCH_FOLDERS_RECURSIVELY"),
        ];
        write_names(f, "MatchFlags", self.0, &NAMES)
    }
}

const NO_INCLUDES_BIT: u32 = 1 << 0;
const NO_EXCLUDES_BIT: u32 = 1 << 1;
const NO_IGNORES_BIT: u32 = 1 << 2;

const SPEC_ALL_BITS: u32 = NO_INCLUDES_BIT | NO_EXCLUDES_BIT | NO_IGNORES_BIT;

/// Global switches stored on a [`FilterSpec`](crate::FilterSpec).
///
/// Each `NO_*` bit makes the corresponding pattern set behave as empty during
/// classification without discarding its patterns.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct SpecFlags(u32);

impl SpecFlags {
    /// No switches set.
    pub const NONE: Self = Self(0);
    /// Include patterns are disregarded.
    pub const NO_INCLUDES: Self = Self(NO_INCLUDES_BIT);
    /// Exclude patterns are disregarded.
    pub const NO_EXCLUDES: Self = Self(NO_EXCLUDES_BIT);
    /// Ignore patterns are disregarded.
    pub const NO_IGNORES: Self = Self(NO_IGNORES_BIT);

    /// Builds flags from raw bits, dropping bits with no defined meaning.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & SPEC_ALL_BITS)
    }

    /// Returns the raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` when no switch is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` when every bit of `other` is also set in `self`.
    #[inline]
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both flag sets.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `self` with every bit of `other` cleared.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for SpecFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for SpecFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SpecFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl Not for SpecFlags {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0 & SPEC_ALL_BITS)
    }
}

impl fmt::Debug for SpecFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(u32, &str); 3] = [
            (NO_INCLUDES_BIT, "NO_INCLUDES"),
            (NO_EXCLUDES_BIT, "NO_EXCLUDES"),
            (NO_IGNORES_BIT, "NO_IGNORES"),
        ];
        write_names(f, "SpecFlags", self.0, &NAMES)
    }
}

fn write_names(
    f: &mut fmt::Formatter<'_>,
    type_name: &str,
    bits: u32,
    names: &[(u32, &str)],
) -> fmt::Result {
    write!(f, "{type_name}(")?;
    let mut first = true;
    for (bit, name) in names {
        if bits & bit != 0 {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
            first = false;
        }
    }
    if first {
        f.write_str("NONE")?;
    }
    f.write_str(")")
}
