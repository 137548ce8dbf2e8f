//! Phone number type.
//!
//! Rental and demo requests are followed up by phone, so the number is a
//! required, validated field rather than a free-form string.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneNumberError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains a character other than digits, separators, or a
    /// leading plus sign.
    #[error("phone number contains invalid character: {0:?}")]
    InvalidCharacter(char),
    /// Too few digits to be a dialable number.
    #[error("phone number must contain at least {min} digits")]
    TooShort {
        /// Minimum number of digits.
        min: usize,
    },
    /// Too many digits (ITU E.164 limit).
    #[error("phone number must contain at most {max} digits")]
    TooLong {
        /// Maximum number of digits.
        max: usize,
    },
}

/// A phone number, stored in the formatting the caller supplied.
///
/// Validation is deliberately loose: separators (`-`, `.`, spaces) and one
/// leading `+` are accepted, and only the digit count is checked. The
/// canonical digits are available via [`PhoneNumber::digits`].
///
/// ## Examples
///
/// ```
/// use maru_core::PhoneNumber;
///
/// assert!(PhoneNumber::parse("010-1234-5678").is_ok());
/// assert!(PhoneNumber::parse("+82 10 1234 5678").is_ok());
///
/// assert!(PhoneNumber::parse("").is_err());        // empty
/// assert!(PhoneNumber::parse("call me").is_err()); // letters
/// assert!(PhoneNumber::parse("12345").is_err());   // too short
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Minimum digit count (shortest regional numbers).
    pub const MIN_DIGITS: usize = 8;

    /// Maximum digit count (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `PhoneNumber` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains characters other
    /// than digits/separators/a leading `+`, or has a digit count outside
    /// 8-15.
    pub fn parse(s: &str) -> Result<Self, PhoneNumberError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(PhoneNumberError::Empty);
        }

        let mut digits = 0usize;
        for (i, c) in trimmed.chars().enumerate() {
            match c {
                '0'..='9' => digits += 1,
                '+' if i == 0 => {}
                '-' | '.' | ' ' | '(' | ')' => {}
                other => return Err(PhoneNumberError::InvalidCharacter(other)),
            }
        }

        if digits < Self::MIN_DIGITS {
            return Err(PhoneNumberError::TooShort {
                min: Self::MIN_DIGITS,
            });
        }

        if digits > Self::MAX_DIGITS {
            return Err(PhoneNumberError::TooLong {
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the phone number as the caller supplied it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns only the digits, dropping separators and the `+` prefix.
    #[must_use]
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_korean_formats() {
        for input in ["010-1234-5678", "01012345678", "+82-10-1234-5678", "02 555 0100"] {
            assert!(PhoneNumber::parse(input).is_ok(), "should accept {input}");
        }
    }

    #[test]
    fn digits_strips_separators() {
        let phone = PhoneNumber::parse("010-1234-5678").expect("valid");
        assert_eq!(phone.digits(), "01012345678");
    }

    #[test]
    fn rejects_letters_and_bad_lengths() {
        assert!(matches!(PhoneNumber::parse(""), Err(PhoneNumberError::Empty)));
        assert!(matches!(
            PhoneNumber::parse("010-CALL-ME"),
            Err(PhoneNumberError::InvalidCharacter('C'))
        ));
        assert!(matches!(
            PhoneNumber::parse("1234567"),
            Err(PhoneNumberError::TooShort { min: 8 })
        ));
        assert!(matches!(
            PhoneNumber::parse("1234567890123456"),
            Err(PhoneNumberError::TooLong { max: 15 })
        ));
    }

    #[test]
    fn plus_only_allowed_at_start() {
        assert!(matches!(
            PhoneNumber::parse("010+1234+5678"),
            Err(PhoneNumberError::InvalidCharacter('+'))
        ));
    }
}
