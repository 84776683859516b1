use thiserror::Error;
use tracing::instrument;

use crate::{
    grammar::{FractionStyle, Grammar, SpellError, SpellNumber, SpellOptions},
    locale::{self, DEFAULT_LOCALE, Locale},
    number::{Number, NumberError},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("spell error: {0}")]
    Spell(#[from] SpellError),
    #[error("number error: {0}")]
    Number(#[from] NumberError),
}

/// A locale-bound, reusable speller.
///
/// Holds only `'static` tables and a `Copy` option set, so one instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct Speller {
    locale: Locale,
    grammar: &'static Grammar,
    options: SpellOptions,
}

impl Default for Speller {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Speller {
    pub fn builder() -> SpellerBuilder {
        SpellerBuilder::default()
    }

    pub fn new(locale: Locale) -> Self {
        Self::builder().locale(locale).build()
    }

    #[inline]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[inline]
    pub fn options(&self) -> SpellOptions {
        self.options
    }

    #[inline]
    pub fn grammar(&self) -> &'static Grammar {
        self.grammar
    }

    #[instrument(level = "trace", skip_all, fields(locale = self.locale.code()))]
    pub fn spell(&self, value: &Number) -> Result<String, SpellError> {
        self.grammar.spell(value, &self.options)
    }

    /// Parse a decimal literal and spell it.
    pub fn spell_str(&self, value: &str) -> Result<String, Error> {
        let number = Number::parse(value)?;
        Ok(self.spell(&number)?)
    }

    /// Spell the shortest decimal form of a float; NaN and infinities fail.
    pub fn spell_f64(&self, value: f64) -> Result<String, Error> {
        let number = Number::try_from(value)?;
        Ok(self.spell(&number)?)
    }
}

pub struct SpellerBuilder {
    locale: Locale,
    options: SpellOptions,
}

impl Default for SpellerBuilder {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            options: SpellOptions::default(),
        }
    }
}

impl SpellerBuilder {
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Select a locale by code; unknown codes keep the current locale.
    pub fn locale_code(mut self, code: &str) -> Self {
        match locale::from_code(code) {
            Some(locale) => self.locale = locale,
            None => tracing::debug!(
                code,
                fallback = self.locale.code(),
                "unknown locale code, keeping fallback"
            ),
        }
        self
    }

    pub fn fraction_style(mut self, style: FractionStyle) -> Self {
        self.options.fraction_style = style;
        self
    }

    pub fn options(mut self, options: SpellOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Speller {
        Speller {
            locale: self.locale,
            grammar: self.locale.grammar(),
            options: self.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, Speller};
    use crate::{
        EN_GB, EN_US, ES_ES, ZH_CN,
        grammar::{FractionStyle, SpellError},
        number::NumberError,
    };

    #[test]
    fn builder_defaults_to_british_english() {
        let speller = Speller::builder().build();
        assert_eq!(speller.locale(), EN_GB);
        assert_eq!(speller.options().fraction_style, FractionStyle::DigitByDigit);
        assert_eq!(speller.spell_str("105").unwrap(), "one hundred and five");
    }

    #[test]
    fn locale_code_resolves_or_falls_back() {
        assert_eq!(Speller::builder().locale_code("en-US").build().locale(), EN_US);
        assert_eq!(Speller::builder().locale_code("xx_YY").build().locale(), EN_GB);
        assert_eq!(
            Speller::builder()
                .locale(ES_ES)
                .locale_code("nope")
                .build()
                .locale(),
            ES_ES
        );
    }

    #[test]
    fn fraction_style_is_applied() {
        let speller = Speller::builder()
            .locale(ES_ES)
            .fraction_style(FractionStyle::Grouped)
            .build();
        assert_eq!(
            speller.spell_str("101.51").unwrap(),
            "ciento uno coma cincuenta y uno"
        );
    }

    #[test]
    fn float_input() {
        let speller = Speller::new(ES_ES);
        assert_eq!(speller.spell_f64(-1.2).unwrap(), "menos uno coma dos");
        assert!(matches!(
            speller.spell_f64(f64::NAN),
            Err(Error::Number(NumberError::NonFinite(_)))
        ));
    }

    #[test]
    fn errors_are_wrapped() {
        let speller = Speller::new(ZH_CN);
        assert!(matches!(
            speller.spell_str("0.5"),
            Err(Error::Spell(SpellError::UnsupportedFraction { locale: "zh_CN" }))
        ));
        assert!(matches!(
            speller.spell_str("12x"),
            Err(Error::Number(NumberError::InvalidCharacter { found: 'x', index: 2 }))
        ));
    }
}
