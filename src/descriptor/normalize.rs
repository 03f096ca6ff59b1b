//! Descriptor normalization
//!
//! Rewrites a free-form descriptor into the parsable form the extractor scans:
//! case folding, space removal, disambiguation separators, then verb
//! propagation inside parenthesized lists.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Words containing an `m` that is never a quality marker
const FOLDED_WORDS: &[&str] = &["omit", "dim", "augmented"];

/// Verb prefixes carried forward inside a parenthesized list
const VERBS: &[&str] = &["add", "omit", "no"];

static DIM_ADD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(7?dim)add").unwrap());
static MARKER_ADD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([m|M])add").unwrap());
static VERB_AFTER_I: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"i(no[35])").unwrap());
static ALTERED_NINTH_SIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([b♭#♯]9)6").unwrap());
static NINE_SIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(9/?6)").unwrap());
static PARENTHESIS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\((.*?)\)").unwrap());

/// Normalize a descriptor into its parsable form
///
/// # Examples
/// ```
/// use chord_descriptor::normalize;
///
/// assert_eq!(normalize("MI7(add 11, omit 5)"), "Mi7 add11 omit5 ");
/// assert_eq!(normalize("madd9"), "m add9");
/// ```
pub fn normalize(descriptor: &str) -> String {
    let folded = fold_case(descriptor);
    let compact = remove_spaces(&folded);
    let disambiguated = add_disambiguators(&compact);
    add_missing_verbs(&disambiguated)
}

/// Lowercase ASCII letters, keeping an uppercase `M` unless it belongs to one of
/// [`FOLDED_WORDS`].
fn fold_case(descriptor: &str) -> String {
    let mut folded = String::with_capacity(descriptor.len());
    let mut run = String::new();

    for c in descriptor.chars() {
        if c.is_ascii_alphabetic() {
            run.push(c);
        } else {
            fold_run(&run, &mut folded);
            run.clear();
            folded.push(c);
        }
    }
    fold_run(&run, &mut folded);

    folded
}

fn fold_run(run: &str, out: &mut String) {
    let lower = run.to_ascii_lowercase();

    // runs are ASCII, so byte offsets are char offsets
    let mut in_word = vec![false; run.len()];
    for word in FOLDED_WORDS {
        for (start, _) in lower.match_indices(word) {
            in_word[start..start + word.len()].fill(true);
        }
    }

    for (i, (original, lowered)) in run.chars().zip(lower.chars()).enumerate() {
        if original == 'M' && !in_word[i] {
            out.push('M');
        } else {
            out.push(lowered);
        }
    }
}

fn remove_spaces(descriptor: &str) -> String {
    descriptor.replace(' ', "")
}

/// Separate run-together tokens the scanner would otherwise misread.
/// Order matters: the altered-ninth rule must run before the 9/6 rule.
fn add_disambiguators(descriptor: &str) -> String {
    let descriptor = DIM_ADD.replace_all(descriptor, "${1} add");
    let descriptor = MARKER_ADD.replace_all(&descriptor, "${1} add");
    let descriptor = VERB_AFTER_I.replace_all(&descriptor, "i ${1}");
    let descriptor = ALTERED_NINTH_SIX.replace_all(&descriptor, "${1} 6");
    NINE_SIX.replace_all(&descriptor, " ${1}").into_owned()
}

/// `(add9,11)` becomes ` add9 add11 `
fn add_missing_verbs(descriptor: &str) -> String {
    PARENTHESIS
        .replace_all(descriptor, |caps: &Captures| {
            let mut current_verb = "";
            let tokens: Vec<String> = caps[1]
                .split(',')
                .map(|token| match VERBS.iter().find(|verb| token.starts_with(**verb)) {
                    Some(verb) => {
                        current_verb = *verb;
                        token.to_string()
                    }
                    None => format!("{}{}", current_verb, token),
                })
                .collect();
            format!(" {} ", tokens.join(" "))
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_keeps_major_marker() {
        assert_eq!(fold_case("MA7"), "Ma7");
        assert_eq!(fold_case("MI"), "Mi");
        assert_eq!(fold_case("mI"), "mi");
        assert_eq!(fold_case("MAJOR"), "Major");
        assert_eq!(fold_case("SUS"), "sus");
    }

    #[test]
    fn test_fold_reserved_words() {
        assert_eq!(fold_case("OMIT3"), "omit3");
        assert_eq!(fold_case("DIM"), "dim");
        assert_eq!(fold_case("AUGMENTED"), "augmented");
        assert_eq!(fold_case("DIMINISHED"), "diminished");
        // every occurrence, not just the first
        assert_eq!(fold_case("DIM(OMIT3,OMIT5)"), "dim(omit3,omit5)");
    }

    #[test]
    fn test_fold_marker_next_to_reserved_word() {
        assert_eq!(fold_case("MDIM"), "Mdim");
        assert_eq!(fold_case("ADDMA7"), "addMa7");
    }

    #[test]
    fn test_fold_leaves_symbols() {
        assert_eq!(fold_case("Δ7(♭9)"), "Δ7(♭9)");
        assert_eq!(fold_case("Ø"), "Ø");
    }

    #[test]
    fn test_remove_spaces() {
        assert_eq!(remove_spaces("mi add 9"), "miadd9");
    }

    #[test]
    fn test_disambiguators() {
        assert_eq!(add_disambiguators("dimadd9"), "dim add9");
        assert_eq!(add_disambiguators("7dimadd9"), "7dim add9");
        assert_eq!(add_disambiguators("madd9"), "m add9");
        assert_eq!(add_disambiguators("Madd9"), "M add9");
        assert_eq!(add_disambiguators("mino3"), "mi no3");
        assert_eq!(add_disambiguators("7b96"), "7b9 6");
        assert_eq!(add_disambiguators("mi96"), "mi 96");
        assert_eq!(add_disambiguators("mi9/6"), "mi 9/6");
    }

    #[test]
    fn test_verbs_carry_forward() {
        assert_eq!(add_missing_verbs("(add9,11)"), " add9 add11 ");
        assert_eq!(add_missing_verbs("(b5,add11,13)"), " b5 add11 add13 ");
        assert_eq!(add_missing_verbs("(add9,omit3,5)"), " add9 omit3 omit5 ");
        assert_eq!(add_missing_verbs("(no3,5)"), " no3 no5 ");
    }

    #[test]
    fn test_verbs_reset_per_group() {
        assert_eq!(add_missing_verbs("(add9)(11)"), " add9  11 ");
    }

    #[test]
    fn test_normalize_pipeline() {
        assert_eq!(normalize("Cmi"), "cmi");
        assert_eq!(normalize("mi7(b5,add11)"), "mi7 b5 add11 ");
        assert_eq!(normalize("dim7(add ma7,9,11,b13)"), "dim7 addma7 add9 add11 addb13 ");
        assert_eq!(normalize("MA7SUS(b5)"), "Ma7sus b5 ");
        assert_eq!(normalize("m add9"), "m add9");
        assert_eq!(normalize("6/9"), "6/9");
    }
}
