//! # Error Types
//!
//! This module defines all error types for the descriptor parser.
//!
//! ## Error Types
//! - `Unparseable` - The descriptor could not be turned into modifiers. This is the
//!   only way parsing fails; the [`Rejection`] says why.
//! - `DictionaryError` - A modifier dictionary configuration is invalid
//!
//! ## Usage
//! ```rust
//! use chord_descriptor::{parse_descriptor, ChordError, Rejection};
//!
//! match parse_descriptor("m7(b5,b5)") {
//!     Ok(parsed) => println!("Intervals: {:?}", parsed.intervals),
//!     Err(ChordError::Unparseable { descriptor, reason }) => {
//!         eprintln!("Invalid chord quality '{}': {}", descriptor, reason);
//!         assert!(matches!(reason, Rejection::DuplicateModifier { .. }));
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::modifier::ModifierId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChordError {
    /// The descriptor cannot be parsed.
    ///
    /// No partial interval data is produced when this is returned.
    ///
    /// # Example
    /// ```
    /// # use chord_descriptor::{ChordError, Rejection};
    /// let err = ChordError::Unparseable {
    ///     descriptor: "7xyz".to_string(),
    ///     reason: Rejection::UnmatchedInput { remaining: "xyz".to_string() },
    /// };
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Unparseable descriptor '7xyz': unrecognized input 'xyz'"
    /// );
    /// ```
    #[error("Unparseable descriptor '{descriptor}': {reason}")]
    Unparseable {
        descriptor: String,
        reason: Rejection,
    },

    /// Invalid modifier dictionary.
    ///
    /// Occurs when a YAML dictionary is malformed, names an unknown modifier,
    /// repeats or empties a token, or orders a token before a longer token it prefixes.
    ///
    /// # Example
    /// ```
    /// # use chord_descriptor::ChordError;
    /// let err = ChordError::DictionaryError("Unknown modifier: ninthNatural".to_string());
    /// assert_eq!(err.to_string(), "Invalid dictionary: Unknown modifier: ninthNatural");
    /// ```
    #[error("Invalid dictionary: {0}")]
    DictionaryError(String),
}

/// Why extraction refused a descriptor
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Two tokens resolved to the same modifier (`"7(b9,b9)"`, `"mmin"`)
    #[error("modifier '{modifier}' appears more than once")]
    DuplicateModifier { modifier: ModifierId },

    /// Characters left over after every recognized token is removed
    #[error("unrecognized input '{remaining}'")]
    UnmatchedInput { remaining: String },

    /// Non-empty descriptor with no recognized token at all
    #[error("no modifier recognized")]
    NoModifiers,
}
