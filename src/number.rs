//! Exact decimal input.
//!
//! A [`Number`] keeps the sign, the integer digits and the fractional digits as
//! plain ASCII strings. Nothing here goes through binary floating point, so a
//! value is integral exactly when its fractional digit string is empty.
use std::{fmt, str::FromStr};

use num_bigint::{BigInt, BigUint, Sign};
use thiserror::Error;

/// Errors raised while building a [`Number`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberError {
    #[error("empty numeric literal")]
    Empty,

    #[error("invalid character {found:?} at byte {index}")]
    InvalidCharacter { found: char, index: usize },

    #[error("numeric literal has no digits")]
    MissingDigits,

    #[error("non-finite value `{0}` cannot be spelled")]
    NonFinite(f64),
}

/// A signed decimal value with a finite number of fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number {
    negative: bool,
    integer: String,
    fraction: String,
}

impl Number {
    /// Zero, the only value whose integer part is `"0"` and has no fraction.
    pub fn zero() -> Self {
        Self {
            negative: false,
            integer: String::from("0"),
            fraction: String::new(),
        }
    }

    /// Parse a canonical decimal literal: optional sign, digits, optional
    /// `.` followed by digits. Either side of the point may be empty, not both.
    pub fn parse(input: &str) -> Result<Self, NumberError> {
        if input.is_empty() {
            return Err(NumberError::Empty);
        }

        let (negative, body, offset) = match input.as_bytes()[0] {
            b'-' => (true, &input[1..], 1),
            b'+' => (false, &input[1..], 1),
            _ => (false, input, 0),
        };

        let (integer, fraction) = match body.find('.') {
            Some(dot) => (&body[..dot], &body[dot + 1..]),
            None => (body, ""),
        };

        if let Some((index, found)) = body
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (c == '.' && i == integer.len())))
        {
            return Err(NumberError::InvalidCharacter {
                found,
                index: index + offset,
            });
        }

        if integer.is_empty() && fraction.is_empty() {
            return Err(NumberError::MissingDigits);
        }

        Ok(Self::from_parts(negative, integer, fraction))
    }

    /// Build from already validated ASCII digit strings, normalizing leading
    /// integer zeros, trailing fraction zeros and negative zero.
    fn from_parts(negative: bool, integer: &str, fraction: &str) -> Self {
        let integer = integer.trim_start_matches('0');
        let fraction = fraction.trim_end_matches('0');
        let integer = if integer.is_empty() { "0" } else { integer };
        let is_zero = integer == "0" && fraction.is_empty();

        Self {
            negative: negative && !is_zero,
            integer: integer.to_owned(),
            fraction: fraction.to_owned(),
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction.is_empty()
    }

    /// `true` when the value has a nonzero fractional part.
    #[inline]
    pub fn has_fraction(&self) -> bool {
        !self.fraction.is_empty()
    }

    /// Digits of the absolute integer part, most significant first.
    #[inline]
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Fractional digits after the decimal point, without trailing zeros.
    #[inline]
    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if self.has_fraction() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

impl FromStr for Number {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Number {
                #[allow(unused_comparisons)]
                fn from(value: $t) -> Self {
                    let digits = value.unsigned_abs_digits();
                    Self::from_parts(value < 0, &digits, "")
                }
            }
        )*
    };
}

/// Decimal digits of the magnitude, without sign.
trait UnsignedAbsDigits {
    fn unsigned_abs_digits(&self) -> String;
}

macro_rules! impl_abs_digits {
    (signed: $($s:ty),*; unsigned: $($u:ty),*) => {
        $(
            impl UnsignedAbsDigits for $s {
                fn unsigned_abs_digits(&self) -> String {
                    self.unsigned_abs().to_string()
                }
            }
        )*
        $(
            impl UnsignedAbsDigits for $u {
                fn unsigned_abs_digits(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_abs_digits!(signed: i8, i16, i32, i64, i128, isize; unsigned: u8, u16, u32, u64, u128, usize);
impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<&BigInt> for Number {
    fn from(value: &BigInt) -> Self {
        Self::from_parts(
            value.sign() == Sign::Minus,
            &value.magnitude().to_str_radix(10),
            "",
        )
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Self::from(&value)
    }
}

impl From<&BigUint> for Number {
    fn from(value: &BigUint) -> Self {
        Self::from_parts(false, &value.to_str_radix(10), "")
    }
}

impl From<BigUint> for Number {
    fn from(value: BigUint) -> Self {
        Self::from(&value)
    }
}

impl TryFrom<f64> for Number {
    type Error = NumberError;

    /// Converts through the shortest decimal string that round-trips to the
    /// same `f64`, so `0.1` becomes exactly `0.1`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumberError::NonFinite(value));
        }
        // `Display` for floats never uses exponent notation.
        Self::parse(&value.to_string())
    }
}

impl TryFrom<f32> for Number {
    type Error = NumberError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumberError::NonFinite(f64::from(value)));
        }
        Self::parse(&value.to_string())
    }
}
