pub mod grammar;
pub mod locale;
pub mod number;
pub mod speller;

#[cfg(test)]
pub(crate) mod testing;

pub use grammar::{FractionStyle, Grammar, SpellError, SpellNumber, SpellOptions};
pub use locale::Locale;
pub use locale::{EN_GB, EN_US, ES_ES, ZH_CN, ZH_TW};
pub use number::{Number, NumberError};
pub use speller::{Error, Speller, SpellerBuilder};
