//! Locale-aware lenient numeric parsing.
//!
//! One generic surface replaces the usual per-primitive boilerplate: any
//! `FromStr` numeric type can be parsed through a [`NumberFormat`], either
//! strictly (returning [`ParseError`]) or leniently (falling back to a
//! caller-supplied default).

use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ParseError;

/// Describes how a locale writes numbers.
///
/// Covers the two separators that actually differ between locales: the
/// decimal mark and the digit-grouping mark. Parsing strips grouping marks
/// and maps the decimal mark to `'.'` before handing the string to the
/// target type's `FromStr`.
///
/// # Examples
///
/// ```
/// use kitbag::parse::NumberFormat;
///
/// let us = NumberFormat::en_us();
/// assert_eq!(us.parse::<i64>("1,234").unwrap(), 1234);
///
/// let eu = NumberFormat::european();
/// assert_eq!(eu.parse::<f64>("1.234,5").unwrap(), 1234.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: Option<char>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::en_us()
    }
}

impl NumberFormat {
    /// `1,234.5` style: `'.'` decimal mark, `','` grouping.
    pub fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: Some(','),
        }
    }

    /// `1.234,5` style: `','` decimal mark, `'.'` grouping.
    pub fn european() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: Some('.'),
        }
    }

    /// `1234.5` style: `'.'` decimal mark, no grouping accepted.
    pub fn plain() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: None,
        }
    }

    /// Parse `input` as `T`, honoring this format's separators.
    ///
    /// Whitespace around the number is ignored. Empty input is
    /// [`ParseError::Empty`]; anything the target type rejects after
    /// separator normalization is [`ParseError::InvalidNumber`].
    pub fn parse<T: FromStr>(&self, input: &str) -> Result<T, ParseError> {
        let normalized = self.normalize(input)?;
        normalized
            .parse::<T>()
            .map_err(|_| ParseError::invalid(input.trim()))
    }

    /// Parse `input` as `T`, returning `default` on any failure.
    ///
    /// This is the try-parse-or-default contract: no error ever escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use kitbag::parse::NumberFormat;
    ///
    /// let fmt = NumberFormat::default();
    /// assert_eq!(fmt.parse_or("42", 0_i32), 42);
    /// assert_eq!(fmt.parse_or("not a number", 0_i32), 0);
    /// ```
    pub fn parse_or<T: FromStr>(&self, input: &str, default: T) -> T {
        self.parse(input).unwrap_or(default)
    }

    /// Parse `input` as `T`, returning `T::default()` on any failure.
    pub fn parse_or_default<T: FromStr + Default>(&self, input: &str) -> T {
        self.parse(input).unwrap_or_default()
    }

    /// Render a decimal using this format's decimal mark.
    ///
    /// No digit grouping is emitted; output is meant to round-trip through
    /// [`NumberFormat::parse`].
    pub fn format_decimal(&self, value: Decimal) -> String {
        let rendered = value.to_string();
        if self.decimal_separator == '.' {
            rendered
        } else {
            rendered.replace('.', &self.decimal_separator.to_string())
        }
    }

    fn normalize(&self, input: &str) -> Result<String, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut out = String::with_capacity(trimmed.len());
        for ch in trimmed.chars() {
            if Some(ch) == self.group_separator {
                continue;
            }
            if ch == self.decimal_separator {
                out.push('.');
            } else {
                out.push(ch);
            }
        }

        if out.is_empty() {
            return Err(ParseError::invalid(trimmed));
        }
        Ok(out)
    }
}

/// Extension trait bringing lenient parsing onto `str` directly.
///
/// Uses [`NumberFormat::default`] (US-style separators). Reach for an
/// explicit [`NumberFormat`] when the input locale is known.
///
/// # Examples
///
/// ```
/// use kitbag::parse::LenientParse;
///
/// assert_eq!("37".parse_num::<u8>().unwrap(), 37);
/// assert_eq!("oops".parse_num_or(7_i32), 7);
/// assert_eq!("".parse_num_or_default::<f32>(), 0.0);
/// ```
pub trait LenientParse {
    fn parse_num<T: FromStr>(&self) -> Result<T, ParseError>;
    fn parse_num_or<T: FromStr>(&self, default: T) -> T;
    fn parse_num_or_default<T: FromStr + Default>(&self) -> T;
}

impl LenientParse for str {
    fn parse_num<T: FromStr>(&self) -> Result<T, ParseError> {
        NumberFormat::default().parse(self)
    }

    fn parse_num_or<T: FromStr>(&self, default: T) -> T {
        NumberFormat::default().parse_or(self, default)
    }

    fn parse_num_or_default<T: FromStr + Default>(&self) -> T {
        NumberFormat::default().parse_or_default(self)
    }
}

/// Convert any displayable value to a `Decimal`, defaulting to zero.
///
/// Mirrors the stringly conversion path of the original helpers: render,
/// then reparse under the given format.
pub fn to_decimal_or_zero<V: Display>(value: V, format: &NumberFormat) -> Decimal {
    format.parse_or(&value.to_string(), Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_integers() {
        let fmt = NumberFormat::plain();
        assert_eq!(fmt.parse::<i32>("42").unwrap(), 42);
        assert_eq!(fmt.parse::<u64>("  1024  ").unwrap(), 1024);
        assert_eq!(fmt.parse::<i8>("-5").unwrap(), -5);
    }

    #[test]
    fn test_parse_grouped_en_us() {
        let fmt = NumberFormat::en_us();
        assert_eq!(fmt.parse::<i64>("1,234,567").unwrap(), 1_234_567);
        assert_eq!(fmt.parse::<f64>("1,234.5").unwrap(), 1234.5);
    }

    #[test]
    fn test_parse_european() {
        let fmt = NumberFormat::european();
        assert_eq!(fmt.parse::<f64>("1.234,5").unwrap(), 1234.5);
        assert_eq!(fmt.parse::<Decimal>("0,064").unwrap(), dec!(0.064));
    }

    #[test]
    fn test_parse_decimal() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.parse::<Decimal>("10.25").unwrap(), dec!(10.25));
    }

    #[test]
    fn test_parse_errors() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.parse::<i32>(""), Err(ParseError::Empty));
        assert_eq!(fmt.parse::<i32>("   "), Err(ParseError::Empty));
        assert_eq!(
            fmt.parse::<i32>("12x"),
            Err(ParseError::invalid("12x"))
        );
        // Overflow is a parse failure, not a panic.
        assert!(fmt.parse::<u8>("300").is_err());
    }

    #[test]
    fn test_parse_or_swallows_failures() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.parse_or("garbage", 99_u32), 99);
        assert_eq!(fmt.parse_or("8", 99_u32), 8);
        assert_eq!(fmt.parse_or_default::<i64>("garbage"), 0);
    }

    #[test]
    fn test_lenient_parse_trait() {
        assert_eq!("100".parse_num::<u16>().unwrap(), 100);
        assert_eq!("x".parse_num_or(3_u16), 3);
        assert_eq!("x".parse_num_or_default::<u16>(), 0);
    }

    #[test]
    fn test_format_decimal_localized() {
        assert_eq!(NumberFormat::en_us().format_decimal(dec!(0.064)), "0.064");
        assert_eq!(
            NumberFormat::european().format_decimal(dec!(0.064)),
            "0,064"
        );
        assert_eq!(NumberFormat::european().format_decimal(dec!(-12.5)), "-12,5");
    }

    #[test]
    fn test_format_parse_round_trip() {
        let fmt = NumberFormat::european();
        let value = dec!(1234.56);
        let rendered = fmt.format_decimal(value);
        assert_eq!(fmt.parse::<Decimal>(&rendered).unwrap(), value);
    }

    #[test]
    fn test_to_decimal_or_zero() {
        let fmt = NumberFormat::default();
        assert_eq!(to_decimal_or_zero(12.5_f64, &fmt), dec!(12.5));
        assert_eq!(to_decimal_or_zero("junk", &fmt), Decimal::ZERO);
    }
}
