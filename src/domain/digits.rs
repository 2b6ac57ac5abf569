//! Decimal digits and integer tokens, Unicode-aware.
//!
//! A decimal digit is any character of Unicode category Nd (`0`-`9`, `٠`-`٩`,
//! `०`-`९`, ...). Unicode assigns Nd characters in contiguous runs of ten
//! holding the values 0 through 9, which is how a digit's value is recovered.

use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d$").expect("digit pattern is a valid regex"));

/// Whether `c` is a Unicode decimal digit.
pub fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// The value 0-9 of a Unicode decimal digit.
pub fn decimal_value(c: char) -> Option<u32> {
    if !is_decimal_digit(c) {
        return None;
    }

    let mut position = 0u32;
    let mut code = u32::from(c);
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        position += 1;
        code -= 1;
    }
    Some(position % 10)
}

/// An integer token: optional sign followed by one or more decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerToken {
    pub negative: bool,
    /// Magnitude, saturating at `u64::MAX`
    pub magnitude: u64,
}

impl IntegerToken {
    /// Parse `token` after trimming surrounding whitespace.
    ///
    /// Digits of any length are accepted; the magnitude saturates instead of
    /// failing, so range checks on huge values still reject them.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        let (negative, digits) = match token.chars().next()? {
            '-' => (true, &token[1..]),
            '+' => (false, &token[1..]),
            _ => (false, token),
        };
        if digits.is_empty() {
            return None;
        }

        let mut magnitude = 0u64;
        for c in digits.chars() {
            let value = decimal_value(c)?;
            magnitude = magnitude.saturating_mul(10).saturating_add(u64::from(value));
        }
        Some(Self {
            negative,
            magnitude,
        })
    }

    /// The value when it lies in `range`.
    pub fn in_range(&self, range: std::ops::RangeInclusive<u32>) -> Option<u32> {
        if self.negative && self.magnitude != 0 {
            return None;
        }
        u32::try_from(self.magnitude)
            .ok()
            .filter(|value| range.contains(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_digit_values() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(decimal_value(c), Some(i as u32));
        }
        assert_eq!(decimal_value('a'), None);
        assert_eq!(decimal_value('²'), None);
    }

    #[test]
    fn test_unicode_digit_values() {
        assert_eq!(decimal_value('٠'), Some(0));
        assert_eq!(decimal_value('٧'), Some(7));
        assert_eq!(decimal_value('९'), Some(9));
        // Mathematical bold digits: several runs of ten sit back to back.
        assert_eq!(decimal_value('\u{1D7D0}'), Some(2));
        assert_eq!(decimal_value('\u{1D7D8}'), Some(0));
    }

    #[test]
    fn test_parse_integer_token() {
        assert_eq!(
            IntegerToken::parse(" +12 "),
            Some(IntegerToken {
                negative: false,
                magnitude: 12
            })
        );
        assert_eq!(IntegerToken::parse("-٣").map(|t| t.negative), Some(true));
        assert_eq!(IntegerToken::parse("٣١").map(|t| t.magnitude), Some(31));
        assert!(IntegerToken::parse("").is_none());
        assert!(IntegerToken::parse("-").is_none());
        assert!(IntegerToken::parse("1a").is_none());
        assert!(IntegerToken::parse("1 2").is_none());
    }

    #[test]
    fn test_huge_token_saturates() {
        let token = IntegerToken::parse("99999999999999999999999").unwrap();
        assert_eq!(token.magnitude, u64::MAX);
        assert_eq!(token.in_range(1..=31), None);
    }

    #[test]
    fn test_in_range() {
        let token = IntegerToken::parse("-0").unwrap();
        assert_eq!(token.in_range(0..=5), Some(0));
        assert_eq!(IntegerToken::parse("-1").unwrap().in_range(0..=5), None);
        assert_eq!(IntegerToken::parse("12").unwrap().in_range(1..=12), Some(12));
    }
}
