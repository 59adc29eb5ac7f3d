use proptest::prelude::*;

use crate::interpret_str;

proptest! {
    /// The stored boolean is `true` iff the toggle count is even.
    #[test]
    fn toggle_parity_decides_the_printed_value(toggles in 0usize..64) {
        let chain = "!".repeat(toggles);
        let program = format!("!-\n!flag?{chain}\n#!flag\n-!");
        let expected = if toggles % 2 == 0 { "1" } else { "0" };
        prop_assert_eq!(interpret_str(&program).ok(), Some(expected.to_string()));
    }

    /// A number literal with arbitrary embedded spaces parses to the
    /// base-10 value of its digits.
    #[test]
    fn number_literals_ignore_embedded_spaces(
        digits in "[0-9]{1,18}",
        gaps in proptest::collection::vec(0usize..3, 1..19),
    ) {
        let mut literal = String::new();
        for (i, c) in digits.chars().enumerate() {
            let gap = gaps[i % gaps.len()];
            literal.push_str(&" ".repeat(gap));
            literal.push(c);
        }
        let expected: i64 = match digits.parse() {
            Ok(v) => v,
            Err(_) => return Err(TestCaseError::fail("digit run must parse")),
        };
        let program = format!("!-\n$n?{literal}\n#$n\n-!");
        prop_assert_eq!(interpret_str(&program).ok(), Some(expected.to_string()));
    }

    /// Stored string content equals the value region with spaces removed.
    #[test]
    fn string_values_elide_exactly_the_spaces(value in "[a-zA-Z0-9 .,:;!]{0,40}") {
        let program = format!("!-\n_v?{value}\n#_v\n-!");
        let expected: String = value.chars().filter(|&c| c != ' ').collect();
        prop_assert_eq!(interpret_str(&program).ok(), Some(expected));
    }
}
