//! Interval tokens and their fixed semitone offsets.
//!
//! Variants are declared in ascending semitone order. `Sixth` and
//! `DoubleFlatSeventh` share 9 semitones, the only tie in the table.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Scale degree relative to the chord root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Interval {
    Root,
    FlatThird,
    Third,
    Fourth,
    FlatFifth,
    Fifth,
    SharpFifth,
    Sixth,
    DoubleFlatSeventh,
    FlatSeventh,
    Seventh,
    FlatNinth,
    Ninth,
    SharpNinth,
    Eleventh,
    SharpEleventh,
    FlatThirteenth,
    Thirteenth,
}

/// Interval token → semitone offset from the root
pub const INTERVAL_SEMITONES: [(Interval, u8); 18] = [
    (Interval::Root, 0),
    (Interval::FlatThird, 3),
    (Interval::Third, 4),
    (Interval::Fourth, 5),
    (Interval::FlatFifth, 6),
    (Interval::Fifth, 7),
    (Interval::SharpFifth, 8),
    (Interval::Sixth, 9),
    (Interval::DoubleFlatSeventh, 9),
    (Interval::FlatSeventh, 10),
    (Interval::Seventh, 11),
    (Interval::FlatNinth, 13),
    (Interval::Ninth, 14),
    (Interval::SharpNinth, 15),
    (Interval::Eleventh, 17),
    (Interval::SharpEleventh, 18),
    (Interval::FlatThirteenth, 20),
    (Interval::Thirteenth, 21),
];

impl Interval {
    /// Token as written in chord theory (`"b3"`, `"#11"`, ...)
    pub fn as_str(self) -> &'static str {
        match self {
            Interval::Root => "1",
            Interval::FlatThird => "b3",
            Interval::Third => "3",
            Interval::Fourth => "4",
            Interval::FlatFifth => "b5",
            Interval::Fifth => "5",
            Interval::SharpFifth => "#5",
            Interval::Sixth => "6",
            Interval::DoubleFlatSeventh => "bb7",
            Interval::FlatSeventh => "b7",
            Interval::Seventh => "7",
            Interval::FlatNinth => "b9",
            Interval::Ninth => "9",
            Interval::SharpNinth => "#9",
            Interval::Eleventh => "11",
            Interval::SharpEleventh => "#11",
            Interval::FlatThirteenth => "b13",
            Interval::Thirteenth => "13",
        }
    }

    /// Semitone offset from the root
    ///
    /// # Examples
    /// ```
    /// use chord_descriptor::Interval;
    ///
    /// assert_eq!(Interval::FlatSeventh.semitones(), 10);
    /// assert_eq!(Interval::SharpEleventh.semitones(), 18);
    /// ```
    pub fn semitones(self) -> u8 {
        INTERVAL_SEMITONES[self as usize].1
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        INTERVAL_SEMITONES
            .iter()
            .map(|(interval, _)| *interval)
            .find(|interval| interval.as_str() == s)
            .ok_or_else(|| format!("Unknown interval: {}", s))
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Project intervals to their semitone offsets, sorted ascending.
///
/// # Examples
/// ```
/// use chord_descriptor::{to_semitones, Interval};
///
/// let semitones = to_semitones(&[Interval::FlatSeventh, Interval::Root, Interval::Third]);
/// assert_eq!(semitones, vec![0, 4, 10]);
/// ```
pub fn to_semitones(intervals: &[Interval]) -> Vec<u8> {
    let mut semitones: Vec<u8> = intervals.iter().map(|i| i.semitones()).collect();
    semitones.sort_unstable();
    semitones
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_variant() {
        for (index, (interval, _)) in INTERVAL_SEMITONES.iter().enumerate() {
            assert_eq!(*interval as usize, index);
        }
    }

    #[test]
    fn test_declaration_order_follows_semitones() {
        for pair in INTERVAL_SEMITONES.windows(2) {
            assert!(pair[0].1 <= pair[1].1, "{} before {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("bb7".parse::<Interval>(), Ok(Interval::DoubleFlatSeventh));
        assert_eq!("#9".parse::<Interval>(), Ok(Interval::SharpNinth));
        assert!("b11".parse::<Interval>().is_err());
    }

    #[test]
    fn test_semitone_values() {
        assert_eq!(Interval::Root.semitones(), 0);
        assert_eq!(Interval::Sixth.semitones(), 9);
        assert_eq!(Interval::DoubleFlatSeventh.semitones(), 9);
        assert_eq!(Interval::Thirteenth.semitones(), 21);
    }

    #[test]
    fn test_serializes_as_token() {
        let json = serde_json::to_string(&vec![Interval::Root, Interval::FlatThirteenth]).unwrap();
        assert_eq!(json, r#"["1","b13"]"#);
    }
}
