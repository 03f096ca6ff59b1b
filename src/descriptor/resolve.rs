//! Interval resolution
//!
//! Maps a modifier set to the chord's intervals. `power` and `bass` override
//! everything else; otherwise each scale degree is derived on its own and the
//! results are merged.
//!
//! ## Degree Rules
//! - **Third**: `b3` for minor-family chords, `3` otherwise, none for sus chords.
//!   A plain `11` chord implies a suspended third. `add3` always adds `3`.
//! - **Fourth**: `sus` or `add4`
//! - **Fifth**: altered by dim/half-dim/`b5` and aug/`#5`; the natural fifth is
//!   dropped when a fifth is altered or a `b13` is present
//! - **Sixth**: only in non-extended chords; extended chords get a `13` instead
//! - **Seventh**: `bb7` for dim7, `b7` for half-dim, otherwise `7` or `b7` depending
//!   on the major marker. Ninth/eleventh/thirteenth chords imply a seventh.
//! - **Ninth**: implied by 69/9/11/13 chords unless the ninth is altered
//! - **Eleventh**: implied by minor-family 13 chords
//! - **Thirteenth**: `13`/`add13`, or a sixth in an extended chord

use super::types::Intents;
use crate::interval::Interval;
use crate::modifier::{ModifierId, ModifierSet};

use crate::modifier::ModifierId::*;

/// Minor-family modifiers; their absence is "major intent"
const MINOR_FAMILY: &[ModifierId] = &[Mi, Dim, Dim7, HalfDim];

/// Modifiers that make a chord "extended"
const EXTENSIONS: &[ModifierId] = &[Seventh, Ninth, Eleventh, Thirteenth];

/// True when no minor-family modifier is present.
///
/// Shared by the third and eleventh rules and by the intent flags.
pub fn has_major_intent(modifiers: &ModifierSet) -> bool {
    modifiers.contains_none(MINOR_FAMILY)
}

/// True when a seventh, ninth, eleventh or thirteenth modifier is present
pub fn is_extended(modifiers: &ModifierSet) -> bool {
    modifiers.contains_any(EXTENSIONS)
}

/// Derive the renderer intent flags of a modifier set.
///
/// `major` is the same predicate the third and eleventh rules use.
pub fn classify_intents(modifiers: &ModifierSet) -> Intents {
    Intents {
        major: has_major_intent(modifiers),
        eleventh: modifiers.contains(Eleventh),
    }
}

/// Resolve the intervals of a modifier set, sorted by semitone and duplicate-free.
///
/// # Examples
/// ```
/// use chord_descriptor::{resolve_intervals, Interval, ModifierId, ModifierSet};
///
/// let modifiers: ModifierSet = [ModifierId::Mi, ModifierId::Seventh].into_iter().collect();
///
/// assert_eq!(
///     resolve_intervals(&modifiers),
///     vec![Interval::Root, Interval::FlatThird, Interval::Fifth, Interval::FlatSeventh]
/// );
/// ```
pub fn resolve_intervals(modifiers: &ModifierSet) -> Vec<Interval> {
    if modifiers.contains(Power) {
        return vec![Interval::Root, Interval::Fifth];
    }
    if modifiers.contains(Bass) {
        return vec![Interval::Root];
    }

    let all = std::iter::once(Interval::Root)
        .chain(third(modifiers))
        .chain(fourth(modifiers))
        .chain(fifths(modifiers))
        .chain(sixth(modifiers))
        .chain(sevenths(modifiers))
        .chain(ninths(modifiers))
        .chain(elevenths(modifiers))
        .chain(thirteenths(modifiers));

    let mut intervals: Vec<Interval> = Vec::new();
    for interval in all {
        if !intervals.contains(&interval) {
            intervals.push(interval);
        }
    }
    intervals.sort_by_key(|interval| interval.semitones());
    intervals
}

fn third(modifiers: &ModifierSet) -> Vec<Interval> {
    let mut third = Vec::new();
    if modifiers.contains(Omit3) {
        return third;
    }
    if modifiers.contains_none(&[Sus, Sus2]) {
        if !has_major_intent(modifiers) {
            third.push(Interval::FlatThird);
        } else if !modifiers.contains(Eleventh) {
            third.push(Interval::Third);
        }
    }
    if modifiers.contains(Add3) {
        third.push(Interval::Third);
    }
    third
}

fn fourth(modifiers: &ModifierSet) -> Vec<Interval> {
    if modifiers.contains_any(&[Sus, Add4]) {
        vec![Interval::Fourth]
    } else {
        vec![]
    }
}

fn fifths(modifiers: &ModifierSet) -> Vec<Interval> {
    let mut fifths = Vec::new();
    if modifiers.contains(Omit5) {
        return fifths;
    }
    if modifiers.contains_any(&[Dim, HalfDim, FifthFlat]) {
        fifths.push(Interval::FlatFifth);
    }
    if modifiers.contains_any(&[Aug, FifthSharp]) {
        fifths.push(Interval::SharpFifth);
    }
    // b13 and the natural fifth are not voiced together
    if fifths.is_empty() && !modifiers.contains(ThirteenthFlat) {
        fifths.push(Interval::Fifth);
    }
    fifths
}

fn sixth(modifiers: &ModifierSet) -> Vec<Interval> {
    if modifiers.contains_any(&[Add6, Add69]) && !is_extended(modifiers) {
        vec![Interval::Sixth]
    } else {
        vec![]
    }
}

fn sevenths(modifiers: &ModifierSet) -> Vec<Interval> {
    let mut sevenths = Vec::new();
    if modifiers.contains_any(&[Seventh, HalfDim]) {
        if modifiers.contains(Dim) {
            sevenths.push(Interval::DoubleFlatSeventh);
        } else if modifiers.contains(HalfDim) {
            sevenths.push(Interval::FlatSeventh);
        } else {
            sevenths.push(minor_or_major_seventh(modifiers));
        }
    } else if modifiers.contains_any(&[Ninth, Eleventh, Thirteenth]) {
        sevenths.push(minor_or_major_seventh(modifiers));
    }

    if modifiers.contains(Add7) {
        sevenths.push(Interval::Seventh);
    }
    sevenths
}

fn minor_or_major_seventh(modifiers: &ModifierSet) -> Interval {
    if modifiers.contains(Ma) {
        Interval::Seventh
    } else {
        Interval::FlatSeventh
    }
}

fn ninths(modifiers: &ModifierSet) -> Vec<Interval> {
    let mut ninths = Vec::new();
    if modifiers.contains_any(&[Add69, Ninth, Eleventh, Thirteenth])
        && modifiers.contains_none(&[NinthFlat, NinthSharp])
    {
        ninths.push(Interval::Ninth);
    }
    if modifiers.contains_any(&[Sus2, Add9]) {
        ninths.push(Interval::Ninth);
    }
    if modifiers.contains(NinthFlat) {
        ninths.push(Interval::FlatNinth);
    }
    if modifiers.contains(NinthSharp) {
        ninths.push(Interval::SharpNinth);
    }
    ninths
}

fn elevenths(modifiers: &ModifierSet) -> Vec<Interval> {
    let mut elevenths = Vec::new();
    if (modifiers.contains(Thirteenth) && !has_major_intent(modifiers))
        || modifiers.contains_any(&[Eleventh, Add11])
    {
        elevenths.push(Interval::Eleventh);
    }
    if modifiers.contains(EleventhSharp) {
        elevenths.push(Interval::SharpEleventh);
    }
    elevenths
}

fn thirteenths(modifiers: &ModifierSet) -> Vec<Interval> {
    let mut thirteenths = Vec::new();
    if modifiers.contains_any(&[Add13, Thirteenth])
        || (modifiers.contains_any(&[Add6, Add69]) && is_extended(modifiers))
    {
        thirteenths.push(Interval::Thirteenth);
    }
    if modifiers.contains(ThirteenthFlat) {
        thirteenths.push(Interval::FlatThirteenth);
    }
    thirteenths
}
