//! URL slug type for catalog entities.
//!
//! Brands and products are addressed by slug in storefront URLs
//! (`/api/products/aalto-lounge-chair`), so the slug format is validated
//! once here instead of in every handler.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Slug`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum SlugError {
    /// The input string is empty.
    #[error("slug cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("slug must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("slug contains invalid character: {0:?}")]
    InvalidCharacter(char),
    /// The input starts or ends with a hyphen, or contains a double hyphen.
    #[error("slug has malformed hyphenation")]
    MalformedHyphens,
}

/// A URL-safe identifier: lowercase ASCII letters, digits, and single
/// interior hyphens.
///
/// ## Examples
///
/// ```
/// use maru_core::Slug;
///
/// assert!(Slug::parse("aalto-lounge-chair").is_ok());
/// assert!(Slug::parse("oak-2024").is_ok());
///
/// assert!(Slug::parse("").is_err());          // empty
/// assert!(Slug::parse("Oak Chair").is_err()); // uppercase + space
/// assert!(Slug::parse("-oak").is_err());      // leading hyphen
/// assert!(Slug::parse("oak--chair").is_err()); // double hyphen
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Maximum slug length.
    pub const MAX_LENGTH: usize = 120;

    /// Parse a `Slug` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 120 characters,
    /// contains characters outside `[a-z0-9-]`, or hyphenates badly
    /// (leading/trailing/doubled hyphens).
    pub fn parse(s: &str) -> Result<Self, SlugError> {
        if s.is_empty() {
            return Err(SlugError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(SlugError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        for c in s.chars() {
            if !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
                return Err(SlugError::InvalidCharacter(c));
            }
        }

        if s.starts_with('-') || s.ends_with('-') || s.contains("--") {
            return Err(SlugError::MalformedHyphens);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Slug` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_slugs() {
        for input in ["sofa", "walnut-dining-table", "series-7"] {
            assert!(Slug::parse(input).is_ok(), "should accept {input}");
        }
    }

    #[test]
    fn rejects_bad_characters() {
        assert!(matches!(
            Slug::parse("Walnut Table"),
            Err(SlugError::InvalidCharacter('W'))
        ));
        assert!(matches!(
            Slug::parse("café-chair"),
            Err(SlugError::InvalidCharacter('é'))
        ));
    }

    #[test]
    fn rejects_malformed_hyphenation() {
        for input in ["-sofa", "sofa-", "walnut--table"] {
            assert!(
                matches!(Slug::parse(input), Err(SlugError::MalformedHyphens)),
                "should reject {input}"
            );
        }
    }
}
