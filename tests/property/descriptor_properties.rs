use chord_descriptor::{
    parse_descriptor, ChordError, Interval, ModifierDictionary, ModifierId, Rejection,
};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

const QUALITIES: &[&str] = &["", "m", "7", "m7", "ma7", "9", "13", "sus"];
const ALTERATIONS: &[&str] = &["b5", "#5", "b9", "#9", "#11", "b13"];

fn quality() -> impl Strategy<Value = &'static str> {
    select(QUALITIES.to_vec())
}

fn alterations() -> impl Strategy<Value = String> {
    subsequence(ALTERATIONS.to_vec(), 0..=ALTERATIONS.len()).prop_map(|picked| picked.join(","))
}

proptest! {
    #[test]
    fn parsing_is_deterministic(s in "[a-zA-Z0-9#b()+ ,/-]{0,12}") {
        prop_assert_eq!(parse_descriptor(&s), parse_descriptor(&s));
    }

    #[test]
    fn parsed_intervals_are_well_formed(s in "[a-zA-Z0-9#b()+ ,/-]{0,12}") {
        if let Ok(parsed) = parse_descriptor(&s) {
            prop_assert_eq!(parsed.intervals.first(), Some(&Interval::Root));
            prop_assert_eq!(parsed.semitones.len(), parsed.intervals.len());
            // 6 and bb7 share a semitone; every other pair is distinct
            let tie_allowed = parsed.has_interval(Interval::Sixth)
                && parsed.has_interval(Interval::DoubleFlatSeventh);
            prop_assert!(
                parsed
                    .semitones
                    .windows(2)
                    .all(|pair| pair[0] < pair[1] || (tie_allowed && pair[0] == pair[1])),
                "semitones of '{}' not ascending: {:?}",
                s, parsed.semitones
            );
            for (i, interval) in parsed.intervals.iter().enumerate() {
                prop_assert!(!parsed.intervals[i + 1..].contains(interval));
            }
        }
    }

    #[test]
    fn flat_third_implies_minor_intent(s in "[a-zA-Z0-9#b()+ ,/-]{0,12}") {
        if let Ok(parsed) = parse_descriptor(&s) {
            if parsed.has_interval(Interval::FlatThird) {
                prop_assert!(!parsed.intents.major);
            }
            prop_assert_eq!(parsed.intents.eleventh, parsed.modifiers.contains(&ModifierId::Eleventh));
        }
    }

    #[test]
    fn power_chord_overrides_everything(quality in quality(), alterations in alterations()) {
        let descriptor = format!("{}5({})", quality, alterations);
        let parsed = parse_descriptor(&descriptor);
        prop_assert!(parsed.is_ok(), "'{}' should parse: {:?}", descriptor, parsed);
        prop_assert_eq!(parsed.unwrap().interval_names(), vec!["1", "5"]);
    }

    #[test]
    fn bass_overrides_everything(quality in quality(), alterations in alterations()) {
        let descriptor = format!("{}bass({})", quality, alterations);
        let parsed = parse_descriptor(&descriptor);
        prop_assert!(parsed.is_ok(), "'{}' should parse: {:?}", descriptor, parsed);
        prop_assert_eq!(parsed.unwrap().interval_names(), vec!["1"]);
    }

    #[test]
    fn repeated_modifier_is_rejected(
        token in select(vec!["b5", "#5", "b9", "#9", "#11", "b13", "add9", "add11", "add13", "omit3", "omit5"])
    ) {
        let descriptor = format!("7({},{})", token, token);
        let expected = ModifierDictionary::default_dictionary().lookup(token);
        prop_assert!(expected.is_some());

        match parse_descriptor(&descriptor) {
            Err(ChordError::Unparseable { reason: Rejection::DuplicateModifier { modifier }, .. }) => {
                prop_assert_eq!(Some(modifier), expected);
            }
            other => prop_assert!(false, "'{}' should repeat a modifier, got {:?}", descriptor, other),
        }
    }
}
