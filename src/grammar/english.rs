//! British and American English.
//!
//! Both variants share every table; American English drops the "and"
//! conjunction ("one hundred twenty-three" vs "one hundred and twenty-three").
use crate::grammar::{
    chunk::{DigitGroup, WESTERN_WIDTH},
    western::{Scale, WesternGrammar, WesternVocab},
    words::Words,
};

const UNITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// Short scale, 10^3 through 10^63.
const SCALES: [Scale; 21] = [
    Scale::invariant("thousand"),
    Scale::invariant("million"),
    Scale::invariant("billion"),
    Scale::invariant("trillion"),
    Scale::invariant("quadrillion"),
    Scale::invariant("quintillion"),
    Scale::invariant("sextillion"),
    Scale::invariant("septillion"),
    Scale::invariant("octillion"),
    Scale::invariant("nonillion"),
    Scale::invariant("decillion"),
    Scale::invariant("undecillion"),
    Scale::invariant("duodecillion"),
    Scale::invariant("tredecillion"),
    Scale::invariant("quattuordecillion"),
    Scale::invariant("quindecillion"),
    Scale::invariant("sexdecillion"),
    Scale::invariant("septendecillion"),
    Scale::invariant("octodecillion"),
    Scale::invariant("novemdecillion"),
    Scale::invariant("vigintillion"),
];

const BRITISH: WesternVocab = WesternVocab {
    zero: "zero",
    minus: "minus",
    point: "point",
    units: UNITS,
    teens: TEENS,
    tens: TENS,
    hundreds: [""; 10],
    hundred: "hundred",
    and: Some("and"),
    scales: &SCALES,
};

pub static EN_GB_VOCAB: WesternVocab = BRITISH;

pub static EN_US_VOCAB: WesternVocab = WesternVocab {
    and: None,
    ..BRITISH
};

pub const EN_GB: WesternGrammar = WesternGrammar::new("en_GB", &EN_GB_VOCAB, render_group);
pub const EN_US: WesternGrammar = WesternGrammar::new("en_US", &EN_US_VOCAB, render_group);

/// English group hook: `[hundred [and]] [tens-units | teen]` then the scale.
pub fn render_group(vocab: &WesternVocab, group: &DigitGroup<WESTERN_WIDTH>, words: &mut Words) {
    let [hundreds, tens, units] = group.slots;
    let has_rest = tens > 0 || units > 0;

    if hundreds > 0 {
        words.push(vocab.units[hundreds as usize]);
        words.push(vocab.hundred);
        if has_rest {
            push_and(vocab, words);
        }
    } else if hundreds == 0 && has_rest {
        // A zero hundreds slot only occurs after a higher group: "thousand and five".
        push_and(vocab, words);
    }

    if tens == 1 {
        words.push(vocab.teens[units as usize]);
    } else if tens > 1 {
        if units > 0 {
            words.push_compound(&[vocab.tens[tens as usize], "-", vocab.units[units as usize]]);
        } else {
            words.push(vocab.tens[tens as usize]);
        }
    } else if units > 0 {
        words.push(vocab.units[units as usize]);
    }

    if let Some(scale) = vocab.scale(group.power) {
        words.push(scale.select(group.value()));
    }
}

#[inline]
fn push_and(vocab: &WesternVocab, words: &mut Words) {
    if let Some(and) = vocab.and {
        words.push(and);
    }
}
