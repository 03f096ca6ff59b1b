//! # Descriptor Module
//!
//! Turns a chord-quality descriptor (the part of a chord symbol after the root,
//! e.g. `"m7(b5)"`, `"69(#11)"`) into intervals, semitones and intent flags.
//!
//! ## Pipeline
//! 1. **Normalize** - fold case (keeping the `M` major marker), drop spaces, insert
//!    separators between run-together tokens, propagate `add`/`omit`/`no` inside
//!    parenthesized lists
//! 2. **Extract** - scan the normalized string with the dictionary; every character
//!    must be covered and no modifier may repeat
//! 3. **Resolve** - derive each scale degree from the modifier set
//! 4. **Project** - map intervals to semitones
//! 5. **Classify** - compute the `major` / `eleventh` intent flags
//!
//! An empty descriptor skips steps 1-2 and resolves to a major triad.
//!
//! ## Sub-modules
//! - `normalize` - Descriptor normalization
//! - `extract` - Modifier extraction
//! - `resolve` - Interval rules and intent flags
//! - `types` - ParsedDescriptor, Intents
//!
//! ## Example
//! ```rust
//! use chord_descriptor::{DescriptorParser, ModifierDictionary};
//!
//! let parser = DescriptorParser::new(ModifierDictionary::default_dictionary());
//! let parsed = parser.parse("m7(b5)")?;
//!
//! assert_eq!(parsed.interval_names(), vec!["1", "b3", "b5", "b7"]);
//! assert_eq!(parsed.semitones, vec![0, 3, 6, 10]);
//! assert!(!parsed.intents.major);
//! # Ok::<(), chord_descriptor::ChordError>(())
//! ```

mod extract;
mod normalize;
mod resolve;
mod types;


pub use extract::extract_modifiers;
pub use normalize::normalize;
pub use resolve::{classify_intents, has_major_intent, is_extended, resolve_intervals};
pub use types::{Intents, ParsedDescriptor};

use tracing::{debug, trace};

use crate::dictionary::ModifierDictionary;
use crate::error::ChordError;
use crate::interval::to_semitones;
use crate::modifier::ModifierSet;

/// Descriptor parser bound to a modifier dictionary.
///
/// Parsing is pure: the parser holds no mutable state and can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy)]
pub struct DescriptorParser<'d> {
    dictionary: &'d ModifierDictionary,
}

impl<'d> DescriptorParser<'d> {
    pub fn new(dictionary: &'d ModifierDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &'d ModifierDictionary {
        self.dictionary
    }

    /// Parse a descriptor.
    ///
    /// # Errors
    /// Returns [`ChordError::Unparseable`] when a modifier repeats, some input is not
    /// recognized, or a non-empty descriptor yields no modifier.
    pub fn parse(&self, descriptor: &str) -> Result<ParsedDescriptor, ChordError> {
        let (parsable_descriptor, modifiers) = if descriptor.is_empty() {
            (None, Vec::new())
        } else {
            let parsable = normalize(descriptor);
            debug!(descriptor, parsable = %parsable, "normalized descriptor");

            let modifiers = extract_modifiers(&parsable, self.dictionary).map_err(|reason| {
                debug!(descriptor, %reason, "rejected descriptor");
                ChordError::Unparseable {
                    descriptor: descriptor.to_string(),
                    reason,
                }
            })?;
            (Some(parsable), modifiers)
        };

        let set: ModifierSet = modifiers.iter().collect();
        let intervals = resolve_intervals(&set);
        let semitones = to_semitones(&intervals);
        let intents = classify_intents(&set);
        trace!(descriptor, ?intervals, ?intents, "resolved descriptor");

        Ok(ParsedDescriptor {
            descriptor: descriptor.to_string(),
            parsable_descriptor,
            modifiers,
            intervals,
            semitones,
            intents,
        })
    }
}

impl Default for DescriptorParser<'static> {
    fn default() -> Self {
        Self::new(ModifierDictionary::default_dictionary())
    }
}
