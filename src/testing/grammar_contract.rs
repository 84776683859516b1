use crate::{
    grammar::{Grammar, SpellError, SpellNumber},
    locale::{Locale, all_locales},
    number::Number,
};

/// Values every grammar must spell: digit boundaries, teens, round numbers,
/// inner zero groups and primitive extremes.
pub const SAMPLES: &[&str] = &[
    "0",
    "1",
    "7",
    "10",
    "11",
    "15",
    "19",
    "20",
    "21",
    "22",
    "99",
    "100",
    "101",
    "110",
    "999",
    "1000",
    "1001",
    "1010",
    "10000",
    "10005",
    "100000",
    "1000000",
    "1001000",
    "1234567",
    "100000001",
    "9223372036854775807",
    "18446744073709551615",
];

/// Assert that a grammar satisfies the five universal contracts:
///
/// 1. `zero_is_zero_word` → exact zero spells as the zero word
/// 2. `in_range_is_non_empty` → every sample spells to non-empty text
/// 3. `minus_prefix_iff_negative` → sign shows up exactly for negatives
/// 4. `overflow_boundary` → `max_power` succeeds, `max_power + 1` overflows
/// 5. `calls_are_independent` → interleaved calls give identical results
#[macro_export]
macro_rules! assert_grammar_contract {
    ($grammar:expr) => {
        $crate::testing::grammar_contract::zero_is_zero_word($grammar);
        $crate::testing::grammar_contract::in_range_is_non_empty($grammar);
        $crate::testing::grammar_contract::minus_prefix_iff_negative($grammar);
        $crate::testing::grammar_contract::overflow_boundary($grammar);
        $crate::testing::grammar_contract::calls_are_independent($grammar);
    };
}

fn number(literal: &str) -> Number {
    literal.parse().expect("sample literal")
}

fn negated(literal: &str) -> Number {
    number(&format!("-{literal}"))
}

pub fn zero_is_zero_word(grammar: &Grammar) {
    for zero in ["0", "-0", "000", "0.000"] {
        assert_eq!(
            grammar.to_text(&number(zero)).unwrap(),
            grammar.zero_word(),
            "zero spelled wrong from `{zero}`"
        );
    }
}

pub fn in_range_is_non_empty(grammar: &Grammar) {
    for &sample in SAMPLES {
        let text = grammar
            .to_text(&number(sample))
            .unwrap_or_else(|e| panic!("`{sample}` failed: {e}"));
        assert!(!text.is_empty(), "`{sample}` spelled as empty text");
    }
}

pub fn minus_prefix_iff_negative(grammar: &Grammar) {
    let minus = grammar.minus_word();
    for &sample in SAMPLES {
        let positive = grammar.to_text(&number(sample)).unwrap();
        assert!(
            !positive.starts_with(minus),
            "`{sample}` starts with minus: {positive}"
        );
        if sample == "0" {
            continue;
        }
        let negative = grammar.to_text(&negated(sample)).unwrap();
        assert!(
            negative.starts_with(minus),
            "`-{sample}` lacks minus: {negative}"
        );
    }
}

pub fn overflow_boundary(grammar: &Grammar) {
    let width = grammar.group_width();
    let max = grammar.max_power();

    let at_limit = format!("1{}", "0".repeat(width * max));
    let text = grammar.to_text(&number(&at_limit)).unwrap();
    assert!(!text.is_empty());

    let widest = "9".repeat(width * (max + 1));
    assert!(grammar.to_text(&number(&widest)).is_ok());

    let beyond = format!("1{}", "0".repeat(width * (max + 1)));
    assert_eq!(
        grammar.to_text(&number(&beyond)),
        Err(SpellError::MagnitudeOverflow {
            required: max + 1,
            supported: max,
        })
    );
    assert!(matches!(
        grammar.to_text(&negated(&beyond)),
        Err(SpellError::MagnitudeOverflow { .. })
    ));
}

pub fn calls_are_independent(grammar: &Grammar) {
    let others: Vec<&Grammar> = all_locales().iter().map(Locale::grammar).collect();
    for &sample in SAMPLES {
        let first = grammar.to_text(&number(sample)).unwrap();
        for other in &others {
            let _ = other.to_text(&number("1000001"));
            let _ = grammar.to_text(&number("-1234"));
        }
        assert_eq!(grammar.to_text(&number(sample)).unwrap(), first);
    }
}
