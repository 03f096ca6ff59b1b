//! # Modifier Dictionary
//!
//! Maps the surface tokens of chord notation (`"maj"`, `"-"`, `"ø"`, `"add#11"`...)
//! to [`ModifierId`]s, and keeps the ordered token list the extractor scans with.
//!
//! ## Ordering Contract
//! Tokens are tried in list order at each position of the descriptor, so a token
//! that is a textual prefix of another (`"sus"` / `"sus2"`, `"6"` / `"6/9"`) must
//! come after it. [`ModifierDictionary::from_entries`] rejects lists that break this,
//! and [`ModifierDictionary::validate_ordering`] re-checks a built dictionary.
//!
//! ## Configuration
//! A custom dictionary can be loaded from YAML:
//!
//! ```rust
//! use chord_descriptor::{ModifierDictionary, ModifierId};
//!
//! let yaml = r#"
//! symbols:
//!   - symbol: min
//!     modifier: mi
//!   - symbol: "7"
//!     modifier: seventh
//! "#;
//!
//! let dictionary = ModifierDictionary::from_yaml(yaml)?;
//! assert_eq!(dictionary.lookup("min"), Some(ModifierId::Mi));
//! # Ok::<(), chord_descriptor::ChordError>(())
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::ChordError;
use crate::modifier::ModifierId;

/// Spellings of the major marker. Also used to derive the `add<major>7` tokens.
const MAJOR_SYMBOLS: &[&str] = &["M", "Ma", "Maj", "Major", "ma", "maj", "major", "^", "Δ"];

/// Built-in surface tokens, grouped by modifier.
/// `add7` is missing on purpose: its tokens are derived from [`MAJOR_SYMBOLS`].
const DEFAULT_SYMBOLS: &[(ModifierId, &[&str])] = &[
    // Quality
    (ModifierId::Mi, &["-", "m", "Mi", "Min", "Minor", "mi", "min", "minor"]),
    (ModifierId::Dim, &["°", "o", "dim", "dim.", "diminished"]),
    (ModifierId::HalfDim, &["Ø", "ø", "h"]),
    (ModifierId::Aug, &["+", "aug", "augmented"]),
    (ModifierId::Seventh, &["7"]),
    // Suspended
    (ModifierId::Sus, &["4", "sus", "sus4", "suspended", "suspended4"]),
    (ModifierId::Sus2, &["sus2", "suspended2"]),
    // Extensions
    (ModifierId::Ninth, &["9"]),
    (ModifierId::Eleventh, &["11"]),
    (ModifierId::Thirteenth, &["13"]),
    // Alterations
    (ModifierId::FifthFlat, &["b5", "♭5"]),
    (ModifierId::FifthSharp, &["#5", "♯5"]),
    (ModifierId::NinthFlat, &["b9", "♭9", "addb9", "add♭9"]),
    (ModifierId::NinthSharp, &["#9", "♯9", "add#9", "add♯9"]),
    (ModifierId::EleventhSharp, &["#11", "♯11", "add#11", "add♯11"]),
    (ModifierId::ThirteenthFlat, &["b13", "♭13", "addb13", "add♭13"]),
    // Added
    (ModifierId::Add3, &["add3"]),
    (ModifierId::Add4, &["add4"]),
    (ModifierId::Add6, &["6", "add6"]),
    (ModifierId::Add69, &["69", "96", "6/9", "9/6"]),
    (ModifierId::Add9, &["2", "add2", "add9"]),
    (ModifierId::Add11, &["add11"]),
    (ModifierId::Add13, &["add13"]),
    // Special
    (ModifierId::Bass, &["bass"]),
    (ModifierId::Omit3, &["omit3", "no3"]),
    (ModifierId::Omit5, &["omit5", "no5"]),
    (ModifierId::Power, &["5"]),
];

static DEFAULT_DICTIONARY: LazyLock<ModifierDictionary> = LazyLock::new(|| {
    ModifierDictionary::from_entries(default_entries())
        .expect("built-in modifier dictionary must be valid")
});

/// Built-in entries in scan order: longest token first, ties in table order.
fn default_entries() -> Vec<(String, ModifierId)> {
    let mut entries: Vec<(String, ModifierId)> = MAJOR_SYMBOLS
        .iter()
        .map(|symbol| (symbol.to_string(), ModifierId::Ma))
        .collect();

    for (id, symbols) in DEFAULT_SYMBOLS {
        entries.extend(symbols.iter().map(|symbol| (symbol.to_string(), *id)));
    }

    entries.extend(
        MAJOR_SYMBOLS
            .iter()
            .map(|symbol| (format!("add{}7", symbol), ModifierId::Add7)),
    );

    entries.sort_by_key(|(symbol, _)| std::cmp::Reverse(symbol.chars().count()));
    entries
}

/// Raw dictionary for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
pub struct RawDictionary {
    pub symbols: Vec<RawSymbol>,
}

/// One `symbol: modifier` pair of a YAML dictionary
#[derive(Deserialize, Debug)]
#[serde(rename_all = "kebab-case")]
pub struct RawSymbol {
    pub symbol: String,
    pub modifier: String,
}

/// Bidirectional surface token ↔ [`ModifierId`] mapping with a compiled scanner.
#[derive(Debug, Clone)]
pub struct ModifierDictionary {
    symbols: Vec<(String, ModifierId)>,
    lookup: HashMap<String, ModifierId>,
    scanner: Regex,
}

impl ModifierDictionary {
    /// The built-in dictionary, built once and shared.
    pub fn default_dictionary() -> &'static ModifierDictionary {
        &DEFAULT_DICTIONARY
    }

    /// Build a dictionary from `(token, modifier)` pairs given in scan order.
    ///
    /// # Errors
    /// Returns [`ChordError::DictionaryError`] if the list is empty, a token is empty
    /// or listed twice, or a token precedes a longer token it is a prefix of.
    pub fn from_entries(entries: Vec<(String, ModifierId)>) -> Result<Self, ChordError> {
        if entries.is_empty() {
            return Err(ChordError::DictionaryError(
                "Dictionary has no symbols".to_string(),
            ));
        }

        let mut lookup = HashMap::with_capacity(entries.len());
        for (symbol, id) in &entries {
            if symbol.is_empty() {
                return Err(ChordError::DictionaryError(format!(
                    "Empty symbol for modifier {}",
                    id
                )));
            }
            if lookup.insert(symbol.clone(), *id).is_some() {
                return Err(ChordError::DictionaryError(format!(
                    "Symbol '{}' is listed more than once",
                    symbol
                )));
            }
        }

        check_ordering(&entries)?;

        let pattern = entries
            .iter()
            .map(|(symbol, _)| regex::escape(symbol))
            .collect::<Vec<_>>()
            .join("|");
        let scanner = Regex::new(&pattern).map_err(|e| ChordError::DictionaryError(e.to_string()))?;

        Ok(Self {
            symbols: entries,
            lookup,
            scanner,
        })
    }

    /// Parse a YAML dictionary document.
    ///
    /// ```yaml
    /// symbols:
    ///   - symbol: maj
    ///     modifier: ma
    ///   - symbol: "-"
    ///     modifier: mi
    /// ```
    ///
    /// Entries are scanned in document order.
    pub fn from_yaml(content: &str) -> Result<Self, ChordError> {
        let raw: RawDictionary = serde_yaml::from_str(content)
            .map_err(|e| ChordError::DictionaryError(e.to_string()))?;

        let entries = raw
            .symbols
            .into_iter()
            .map(|raw_symbol| {
                let id = raw_symbol
                    .modifier
                    .parse::<ModifierId>()
                    .map_err(ChordError::DictionaryError)?;
                Ok((raw_symbol.symbol, id))
            })
            .collect::<Result<Vec<_>, ChordError>>()?;

        Self::from_entries(entries)
    }

    /// Re-check the ordering contract on this dictionary.
    pub fn validate_ordering(&self) -> Result<(), ChordError> {
        check_ordering(&self.symbols)
    }

    /// Modifier for an exact surface token
    pub fn lookup(&self, symbol: &str) -> Option<ModifierId> {
        self.lookup.get(symbol).copied()
    }

    /// Every surface token of `id`, in scan order
    pub fn symbols_for(&self, id: ModifierId) -> Vec<&str> {
        self.symbols
            .iter()
            .filter(|(_, symbol_id)| *symbol_id == id)
            .map(|(symbol, _)| symbol.as_str())
            .collect()
    }

    /// Surface tokens in scan order
    pub fn symbols(&self) -> impl Iterator<Item = &str> + '_ {
        self.symbols.iter().map(|(symbol, _)| symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Alternation of every escaped token, in scan order
    pub fn scanner(&self) -> &Regex {
        &self.scanner
    }
}

impl Default for ModifierDictionary {
    fn default() -> Self {
        DEFAULT_DICTIONARY.clone()
    }
}

/// A token listed before a longer token it prefixes would shadow it.
fn check_ordering(entries: &[(String, ModifierId)]) -> Result<(), ChordError> {
    for (i, (earlier, _)) in entries.iter().enumerate() {
        if let Some((later, _)) = entries[i + 1..]
            .iter()
            .find(|(later, _)| later.len() > earlier.len() && later.starts_with(earlier.as_str()))
        {
            return Err(ChordError::DictionaryError(format!(
                "Symbol '{}' must be listed after '{}', which it prefixes",
                earlier, later
            )));
        }
    }
    Ok(())
}
