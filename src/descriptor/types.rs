//! Parse result type definitions

use serde::Serialize;

use crate::interval::Interval;
use crate::modifier::ModifierId;

/// Disambiguation flags for renderers.
///
/// # Fields
/// - `major`: no minor-family modifier (`mi`, `dim`, `dim7`, `halfDim`) is present
/// - `eleventh`: the descriptor carries an `11` extension
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub struct Intents {
    pub major: bool,
    pub eleventh: bool,
}

/// Result of parsing one descriptor.
///
/// # Fields
/// - `descriptor`: the input, unchanged
/// - `parsable_descriptor`: the normalized form that was scanned (`None` for an empty descriptor)
/// - `modifiers`: matched modifiers in order of occurrence, no repeats
/// - `intervals`: duplicate-free, ascending by semitone
/// - `semitones`: one value per interval, ascending
/// - `intents`: flags for print disambiguation
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDescriptor {
    pub descriptor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsable_descriptor: Option<String>,
    pub modifiers: Vec<ModifierId>,
    pub intervals: Vec<Interval>,
    pub semitones: Vec<u8>,
    pub intents: Intents,
}

impl ParsedDescriptor {
    /// Interval tokens as strings (`["1", "b3", "5", "b7"]`)
    pub fn interval_names(&self) -> Vec<&'static str> {
        self.intervals.iter().map(|interval| interval.as_str()).collect()
    }

    pub fn has_interval(&self, interval: Interval) -> bool {
        self.intervals.contains(&interval)
    }
}
