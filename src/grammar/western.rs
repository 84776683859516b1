//! Shared skeleton for grammars that group digits by thousands.
//!
//! The skeleton owns sign handling, grouping, blank-group skipping and the
//! fractional part. Everything language specific happens in a [`GroupHook`]
//! that receives one nonblank group at a time.
use crate::{
    grammar::{
        SpellError, SpellNumber, SpellOptions, check_power,
        chunk::{DigitGroup, WESTERN_WIDTH, groups, highest_power},
        words::Words,
    },
    number::Number,
};

/// Renders one nonblank group, including its scale word when `power > 0`.
pub type GroupHook = fn(&WesternVocab, &DigitGroup<WESTERN_WIDTH>, &mut Words);

/// How the digits after the decimal point are spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FractionStyle {
    /// One word per digit: `1.25` → "one point two five".
    #[default]
    DigitByDigit,
    /// The digit string read as a whole number: `1.25` → "one point
    /// twenty-five". Leading zeros are spelled one by one first.
    Grouped,
}

/// A scale word with its plural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scale {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl Scale {
    /// Scale word without a distinct plural.
    pub const fn invariant(word: &'static str) -> Self {
        Self {
            singular: word,
            plural: word,
        }
    }

    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    #[inline]
    pub fn select(&self, count: u32) -> &'static str {
        if count == 1 { self.singular } else { self.plural }
    }
}

/// Word tables of a thousands-grouping language.
#[derive(Debug)]
pub struct WesternVocab {
    pub zero: &'static str,
    pub minus: &'static str,
    pub point: &'static str,
    /// `units[d]` for d in 0..=9.
    pub units: [&'static str; 10],
    /// `teens[d]` spells `10 + d`.
    pub teens: [&'static str; 10],
    /// `tens[d]` spells `10 * d` for d ≥ 2.
    pub tens: [&'static str; 10],
    /// `hundreds[d]` spells `100 * d`; empty where the language builds it from
    /// a unit and [`WesternVocab::hundred`].
    pub hundreds: [&'static str; 10],
    /// Word for a bare hundred.
    pub hundred: &'static str,
    /// Locale conjunction, `None` when suppressed.
    pub and: Option<&'static str>,
    /// `scales[p - 1]` names power `p`.
    pub scales: &'static [Scale],
}

impl WesternVocab {
    #[inline]
    pub fn scale(&self, power: usize) -> Option<&Scale> {
        power.checked_sub(1).and_then(|i| self.scales.get(i))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WesternGrammar {
    pub locale: &'static str,
    pub vocab: &'static WesternVocab,
    pub render_group: GroupHook,
}

impl WesternGrammar {
    pub const fn new(
        locale: &'static str,
        vocab: &'static WesternVocab,
        render_group: GroupHook,
    ) -> Self {
        Self {
            locale,
            vocab,
            render_group,
        }
    }

    fn render_integer(&self, digits: &str, words: &mut Words) {
        for group in groups::<WESTERN_WIDTH>(digits) {
            if group.is_blank() {
                if digits == "0" {
                    words.push(self.vocab.zero);
                }
                continue;
            }
            (self.render_group)(self.vocab, &group, words);
        }
    }

    fn render_digit(&self, digit: u8, words: &mut Words) {
        if digit == 0 {
            words.push(self.vocab.zero);
        } else {
            (self.render_group)(self.vocab, &DigitGroup::single(digit), words);
        }
    }

    fn render_fraction(&self, fraction: &str, style: FractionStyle, words: &mut Words) {
        words.push(self.vocab.point);
        match style {
            FractionStyle::DigitByDigit => {
                for b in fraction.bytes() {
                    self.render_digit(b - b'0', words);
                }
            }
            FractionStyle::Grouped => {
                let significant = fraction.trim_start_matches('0');
                for _ in 0..fraction.len() - significant.len() {
                    self.render_digit(0, words);
                }
                self.render_integer(significant, words);
            }
        }
    }
}

impl SpellNumber for WesternGrammar {
    fn spell(&self, value: &Number, options: &SpellOptions) -> Result<String, SpellError> {
        let digits = value.integer_digits();
        check_power(
            self.locale,
            highest_power(digits.len(), WESTERN_WIDTH),
            self.max_power(),
        )?;

        let fraction = value.fraction_digits();
        if options.fraction_style == FractionStyle::Grouped && value.has_fraction() {
            let significant = fraction.trim_start_matches('0');
            check_power(
                self.locale,
                highest_power(significant.len(), WESTERN_WIDTH),
                self.max_power(),
            )?;
        }

        let mut words = Words::new(" ");
        if value.is_negative() {
            words.push(self.vocab.minus);
        }
        self.render_integer(digits, &mut words);
        if value.has_fraction() {
            self.render_fraction(fraction, options.fraction_style, &mut words);
        }
        Ok(words.into_string())
    }

    #[inline]
    fn zero_word(&self) -> &'static str {
        self.vocab.zero
    }

    #[inline]
    fn minus_word(&self) -> &'static str {
        self.vocab.minus
    }

    #[inline]
    fn max_power(&self) -> usize {
        self.vocab.scales.len()
    }
}
