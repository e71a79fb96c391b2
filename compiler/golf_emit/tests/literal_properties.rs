//! Property tests for text literal encoding.
//!
//! 1. Round-trip: decoding the chosen literal gives back the value.
//! 2. Minimality: no scheme encodes the value shorter than the chosen one,
//!    and among equally short ones the first listed scheme wins.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use golf_emit::{emit_text_literal, QuotingScheme};
use proptest::prelude::*;

const SCHEMES: &[QuotingScheme] = &[
    QuotingScheme {
        open: "\"",
        close: "\"",
        escapes: &[
            ('\\', "\\\\"),
            ('"', "\\\""),
            ('\n', "\\n"),
            ('\r', "\\r"),
        ],
    },
    QuotingScheme {
        open: "'",
        close: "'",
        escapes: &[
            ('\\', "\\\\"),
            ('\'', "\\'"),
            ('\n', "\\n"),
            ('\r', "\\r"),
        ],
    },
    QuotingScheme {
        open: "[[",
        close: "]]",
        escapes: &[(']', "]]..']'..[[")],
    },
];

fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('"'),
            Just('\''),
            Just('\\'),
            Just('\n'),
            Just(']'),
            prop::char::range('a', 'z'),
            Just(' '),
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn chosen_literal_round_trips(value in text_strategy()) {
        let literal = emit_text_literal(&value, SCHEMES).unwrap();
        let decoded = SCHEMES
            .iter()
            .filter(|scheme| scheme.encode(&value) == literal)
            .find_map(|scheme| scheme.decode(&literal));
        prop_assert_eq!(decoded, Some(value));
    }

    #[test]
    fn chosen_literal_is_minimal_and_first(value in text_strategy()) {
        let literal = emit_text_literal(&value, SCHEMES).unwrap();
        let lengths: Vec<usize> = SCHEMES.iter().map(|scheme| scheme.encode(&value).len()).collect();
        let best = *lengths.iter().min().unwrap();
        prop_assert_eq!(literal.len(), best);
        let first = lengths.iter().position(|len| *len == best).unwrap();
        prop_assert_eq!(literal, SCHEMES[first].encode(&value));
    }
}
