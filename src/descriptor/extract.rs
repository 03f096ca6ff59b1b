//! Modifier extraction
//!
//! Scans a parsable descriptor with the dictionary's alternation pattern and
//! resolves every match to a [`ModifierId`].

use tracing::trace;

use crate::dictionary::ModifierDictionary;
use crate::error::Rejection;
use crate::modifier::{ModifierId, ModifierSet};

/// Extract the modifiers of a parsable descriptor, in order of occurrence.
///
/// Fails on the first repeated modifier, when any non-whitespace character is not
/// covered by a dictionary token, or when nothing matched at all.
///
/// # Examples
/// ```
/// use chord_descriptor::{extract_modifiers, ModifierDictionary, ModifierId};
///
/// let dictionary = ModifierDictionary::default_dictionary();
/// let modifiers = extract_modifiers("mi7 b5 ", dictionary).unwrap();
///
/// assert_eq!(
///     modifiers,
///     vec![ModifierId::Mi, ModifierId::Seventh, ModifierId::FifthFlat]
/// );
/// ```
pub fn extract_modifiers(
    parsable: &str,
    dictionary: &ModifierDictionary,
) -> Result<Vec<ModifierId>, Rejection> {
    let mut modifiers = Vec::new();
    let mut seen = ModifierSet::new();
    let mut uncovered = String::new();
    let mut last_end = 0;

    for found in dictionary.scanner().find_iter(parsable) {
        uncovered.push_str(&parsable[last_end..found.start()]);
        last_end = found.end();

        let Some(id) = dictionary.lookup(found.as_str()) else {
            uncovered.push_str(found.as_str());
            continue;
        };

        if !seen.insert(id) {
            return Err(Rejection::DuplicateModifier { modifier: id });
        }
        trace!(symbol = found.as_str(), modifier = %id, "matched modifier");
        modifiers.push(id);
    }
    uncovered.push_str(&parsable[last_end..]);

    if modifiers.is_empty() {
        return Err(Rejection::NoModifiers);
    }

    let remaining: String = uncovered.chars().filter(|c| !c.is_whitespace()).collect();
    if !remaining.is_empty() {
        return Err(Rejection::UnmatchedInput { remaining });
    }

    Ok(modifiers)
}
