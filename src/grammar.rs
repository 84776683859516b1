//! Spelling grammars.
//!
//! Two algorithm families implement the same [`SpellNumber`] capability:
//!
//! * [`WesternGrammar`] groups digits by three and hands each group to a
//!   locale hook (English, Spanish).
//! * [`CjkGrammar`] groups digits by four and threads zero-elision state
//!   across groups (simplified and traditional Chinese).
//!
//! They share the contract and the small [`chunk`] and [`words`] helpers, not
//! their rendering code. [`Grammar`] is the tagged union handed out by the
//! locale table.

pub mod chunk;
pub mod cjk;
pub mod english;
pub mod spanish;
pub mod western;
pub mod words;

pub use cjk::{CjkGlyphs, CjkGrammar};
pub use western::{FractionStyle, Scale, WesternGrammar, WesternVocab};

use crate::number::Number;
use thiserror::Error;

/// Errors raised while spelling a well-formed [`Number`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpellError {
    #[error("number is too big: needs power {required}, grammar supports up to {supported}")]
    MagnitudeOverflow { required: usize, supported: usize },

    #[error("grammar `{locale}` does not spell fractional values")]
    UnsupportedFraction { locale: &'static str },
}

/// Per-call rendering options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpellOptions {
    pub fraction_style: FractionStyle,
}

/// The spelling capability every grammar provides.
pub trait SpellNumber: Send + Sync {
    /// Spell `value` with explicit options.
    fn spell(&self, value: &Number, options: &SpellOptions) -> Result<String, SpellError>;

    /// Word used for exact zero.
    fn zero_word(&self) -> &'static str;

    /// Word every negative value starts with.
    fn minus_word(&self) -> &'static str;

    /// Highest power index (in groups) that has a scale word.
    fn max_power(&self) -> usize;

    /// Spell `value` with default options.
    #[inline]
    fn to_text(&self, value: &Number) -> Result<String, SpellError> {
        self.spell(value, &SpellOptions::default())
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Grammar {
    Western(WesternGrammar),
    Cjk(CjkGrammar),
}

impl Grammar {
    /// Digits per magnitude group.
    #[inline]
    pub fn group_width(&self) -> usize {
        match self {
            Grammar::Western(_) => chunk::WESTERN_WIDTH,
            Grammar::Cjk(_) => chunk::CJK_WIDTH,
        }
    }

    #[inline]
    pub fn locale_code(&self) -> &'static str {
        match self {
            Grammar::Western(g) => g.locale,
            Grammar::Cjk(g) => g.locale,
        }
    }
}

impl SpellNumber for Grammar {
    fn spell(&self, value: &Number, options: &SpellOptions) -> Result<String, SpellError> {
        match self {
            Grammar::Western(g) => g.spell(value, options),
            Grammar::Cjk(g) => g.spell(value, options),
        }
    }

    fn zero_word(&self) -> &'static str {
        match self {
            Grammar::Western(g) => g.zero_word(),
            Grammar::Cjk(g) => g.zero_word(),
        }
    }

    fn minus_word(&self) -> &'static str {
        match self {
            Grammar::Western(g) => g.minus_word(),
            Grammar::Cjk(g) => g.minus_word(),
        }
    }

    fn max_power(&self) -> usize {
        match self {
            Grammar::Western(g) => g.max_power(),
            Grammar::Cjk(g) => g.max_power(),
        }
    }
}

/// Shared overflow check: `required` is the highest group power of the value.
pub(crate) fn check_power(
    locale: &'static str,
    required: usize,
    supported: usize,
) -> Result<(), SpellError> {
    if required > supported {
        tracing::debug!(locale, required, supported, "magnitude overflow");
        return Err(SpellError::MagnitudeOverflow {
            required,
            supported,
        });
    }
    Ok(())
}
