use crate::grammar::{Grammar, cjk, english, spanish};

use paste::paste;
use phf::{Map, phf_map};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    pub code: &'static str,
    pub name: &'static str,
}

impl Locale {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The grammar registered for this locale.
    #[inline]
    pub fn grammar(&self) -> &'static Grammar {
        LOCALE_TABLE.get(self.code).copied().unwrap_or(&DEFAULT_GRAMMAR)
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

/// ---------------------------------------------------------------------------
///    Macro – locale constants, grammar statics and the lookup table
/// ---------------------------------------------------------------------------
macro_rules! define_locales {
    ($(
        $code:ident, $code_str:literal, $name:literal, grammar: $grammar:expr
    ),* $(,)?) => {
        $(
            pub const $code: Locale = Locale { code: $code_str, name: $name };
        )*

        paste! {
            $(
                static [<$code _GRAMMAR>]: Grammar = $grammar;
            )*

            pub static LOCALE_TABLE: Map<&'static str, &'static Grammar> = phf_map! {
                $(
                    $code_str => &[<$code _GRAMMAR>],
                )*
            };
        }

        static ALL_LOCALES: &[Locale] = &[$($code),*];

        /// Resolve `en_US`, `en-us`, `EN-US` style codes.
        pub fn from_code(code: &str) -> Option<Locale> {
            let canonical = canonicalize(code)?;
            match canonical.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

define_locales! {
    EN_GB, "en_GB", "English (United Kingdom)", grammar: Grammar::Western(english::EN_GB),
    EN_US, "en_US", "English (United States)", grammar: Grammar::Western(english::EN_US),
    ES_ES, "es_ES", "Spanish (Spain)", grammar: Grammar::Western(spanish::ES_ES),
    ZH_CN, "zh_CN", "Chinese (Simplified)", grammar: Grammar::Cjk(cjk::ZH_CN),
    ZH_TW, "zh_TW", "Chinese (Traditional)", grammar: Grammar::Cjk(cjk::ZH_TW),
}

/// Used when nothing more specific is registered.
pub const DEFAULT_LOCALE: Locale = EN_GB;
static DEFAULT_GRAMMAR: Grammar = Grammar::Western(english::EN_GB);

#[inline]
pub fn all_locales() -> &'static [Locale] {
    ALL_LOCALES
}

/// `ll_RR` with lowercase language and uppercase region, or `None` when the
/// input is not a two-part tag.
fn canonicalize(code: &str) -> Option<String> {
    let mut parts = code.trim().split(['_', '-']);
    let lang = parts.next().filter(|p| !p.is_empty())?;
    let region = parts.next().filter(|p| !p.is_empty())?;
    if parts.next().is_some() {
        return None;
    }
    Some(format!(
        "{}_{}",
        lang.to_ascii_lowercase(),
        region.to_ascii_uppercase()
    ))
}
