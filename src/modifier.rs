//! # Modifier Vocabulary
//!
//! A modifier is the semantic tag produced by matching one surface token of a
//! descriptor (`"m"`, `"maj"`, `"b9"`, `"sus2"`...). The vocabulary is small and
//! closed, so a set of modifiers is stored as a bitset indexed by [`ModifierId`].
//!
//! ## Key Types
//! - [`ModifierId`] - One member of the closed vocabulary
//! - [`ModifierSet`] - Fixed-size bitset with O(1) membership and any-of checks

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical semantic tag of a descriptor token.
///
/// The camelCase name (`halfDim`, `ninthFlat`, ...) is used in dictionary
/// configuration files and in serialized parse results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ModifierId {
    // Quality
    Ma,
    Mi,
    Dim,
    Dim7,
    HalfDim,
    Aug,
    Seventh,

    // Suspended
    Sus,
    Sus2,

    // Extensions
    Ninth,
    Eleventh,
    Thirteenth,

    // Alterations
    FifthFlat,
    FifthSharp,
    NinthFlat,
    NinthSharp,
    EleventhSharp,
    ThirteenthFlat,

    // Added
    Add3,
    Add4,
    Add6,
    Add69,
    Add7,
    Add9,
    Add11,
    Add13,

    // Special
    Bass,
    Omit3,
    Omit5,
    Power,
}

impl ModifierId {
    /// Every modifier, in declaration order.
    pub const ALL: [ModifierId; 30] = [
        ModifierId::Ma,
        ModifierId::Mi,
        ModifierId::Dim,
        ModifierId::Dim7,
        ModifierId::HalfDim,
        ModifierId::Aug,
        ModifierId::Seventh,
        ModifierId::Sus,
        ModifierId::Sus2,
        ModifierId::Ninth,
        ModifierId::Eleventh,
        ModifierId::Thirteenth,
        ModifierId::FifthFlat,
        ModifierId::FifthSharp,
        ModifierId::NinthFlat,
        ModifierId::NinthSharp,
        ModifierId::EleventhSharp,
        ModifierId::ThirteenthFlat,
        ModifierId::Add3,
        ModifierId::Add4,
        ModifierId::Add6,
        ModifierId::Add69,
        ModifierId::Add7,
        ModifierId::Add9,
        ModifierId::Add11,
        ModifierId::Add13,
        ModifierId::Bass,
        ModifierId::Omit3,
        ModifierId::Omit5,
        ModifierId::Power,
    ];

    /// Name used in configuration and serialized output
    pub fn name(self) -> &'static str {
        match self {
            ModifierId::Ma => "ma",
            ModifierId::Mi => "mi",
            ModifierId::Dim => "dim",
            ModifierId::Dim7 => "dim7",
            ModifierId::HalfDim => "halfDim",
            ModifierId::Aug => "aug",
            ModifierId::Seventh => "seventh",
            ModifierId::Sus => "sus",
            ModifierId::Sus2 => "sus2",
            ModifierId::Ninth => "ninth",
            ModifierId::Eleventh => "eleventh",
            ModifierId::Thirteenth => "thirteenth",
            ModifierId::FifthFlat => "fifthFlat",
            ModifierId::FifthSharp => "fifthSharp",
            ModifierId::NinthFlat => "ninthFlat",
            ModifierId::NinthSharp => "ninthSharp",
            ModifierId::EleventhSharp => "eleventhSharp",
            ModifierId::ThirteenthFlat => "thirteenthFlat",
            ModifierId::Add3 => "add3",
            ModifierId::Add4 => "add4",
            ModifierId::Add6 => "add6",
            ModifierId::Add69 => "add69",
            ModifierId::Add7 => "add7",
            ModifierId::Add9 => "add9",
            ModifierId::Add11 => "add11",
            ModifierId::Add13 => "add13",
            ModifierId::Bass => "bass",
            ModifierId::Omit3 => "omit3",
            ModifierId::Omit5 => "omit5",
            ModifierId::Power => "power",
        }
    }

    fn bit(self) -> u64 {
        1 << (self as u8)
    }
}

impl fmt::Display for ModifierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModifierId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModifierId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| format!("Unknown modifier: {}", s))
    }
}

/// Set of modifiers backed by a single `u64`.
///
/// # Example
/// ```
/// use chord_descriptor::{ModifierId, ModifierSet};
///
/// let set: ModifierSet = [ModifierId::Mi, ModifierId::Seventh].into_iter().collect();
///
/// assert!(set.contains(ModifierId::Mi));
/// assert!(set.contains_any(&[ModifierId::Ninth, ModifierId::Seventh]));
/// assert!(set.contains_none(&[ModifierId::Dim, ModifierId::HalfDim]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ModifierSet(u64);

impl ModifierSet {
    pub fn new() -> Self {
        Self(0)
    }

    /// Insert a modifier. Returns `false` if it was already present.
    pub fn insert(&mut self, id: ModifierId) -> bool {
        let fresh = !self.contains(id);
        self.0 |= id.bit();
        fresh
    }

    pub fn contains(&self, id: ModifierId) -> bool {
        self.0 & id.bit() != 0
    }

    /// True if at least one of `ids` is in the set
    pub fn contains_any(&self, ids: &[ModifierId]) -> bool {
        ids.iter().any(|id| self.contains(*id))
    }

    /// True if none of `ids` is in the set
    pub fn contains_none(&self, ids: &[ModifierId]) -> bool {
        !self.contains_any(ids)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate members in declaration order
    pub fn iter(&self) -> impl Iterator<Item = ModifierId> + '_ {
        ModifierId::ALL.iter().copied().filter(|id| self.contains(*id))
    }
}

impl FromIterator<ModifierId> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = ModifierId>>(iter: I) -> Self {
        let mut set = ModifierSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<'a> FromIterator<&'a ModifierId> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = &'a ModifierId>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}
