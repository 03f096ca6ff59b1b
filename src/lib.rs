//! # chord-descriptor
//!
//! Parses the quality part of a chord symbol (everything after the root and before
//! an optional slash bass) into its intervals, semitone offsets, and the intent
//! flags a renderer needs to print it back unambiguously.
//!
//! ```rust
//! use chord_descriptor::parse_descriptor;
//!
//! let parsed = parse_descriptor("69(#11)")?;
//!
//! assert_eq!(parsed.interval_names(), vec!["1", "3", "5", "6", "9", "#11"]);
//! assert_eq!(parsed.semitones, vec![0, 4, 7, 9, 14, 18]);
//! assert!(parsed.intents.major);
//! # Ok::<(), chord_descriptor::ChordError>(())
//! ```

pub mod descriptor;
pub mod dictionary;
pub mod error;
pub mod interval;
pub mod modifier;

pub use descriptor::{
    classify_intents, extract_modifiers, has_major_intent, is_extended, normalize,
    resolve_intervals, DescriptorParser, Intents, ParsedDescriptor,
};
pub use dictionary::ModifierDictionary;
pub use error::*;
pub use interval::{to_semitones, Interval, INTERVAL_SEMITONES};
pub use modifier::{ModifierId, ModifierSet};

/// Parse a descriptor with the built-in dictionary.
/// This is the main entry point for the library.
pub fn parse_descriptor(descriptor: &str) -> Result<ParsedDescriptor, ChordError> {
    DescriptorParser::default().parse(descriptor)
}
