//! Field-format checks shared by every entity module.
//!
//! All checks are pure and fail with [`ValidationError`], which displays as
//! `Must supply <label>` so callers can surface it unchanged.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Accepted review ratings.
pub const RATING_RANGE: RangeInclusive<i64> = 1..=5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent, empty, or malformed.
    #[error("Must supply {0}")]
    Missing(&'static str),

    /// A numeric field is outside its accepted range.
    #[error("Must supply {label} between {min} and {max}")]
    OutOfRange {
        label: &'static str,
        min: i64,
        max: i64,
    },
}

impl ValidationError {
    /// The label of the offending field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Missing(label) | Self::OutOfRange { label, .. } => label,
        }
    }
}

/// Returns `true` for non-blank text made only of ASCII letters, digits and spaces.
pub fn is_alnum_words(value: &str) -> bool {
    !value.trim().is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

/// Require a non-empty value of letters, digits and spaces.
pub fn require_alnum_words<'a>(
    value: &'a str,
    label: &'static str,
) -> Result<&'a str, ValidationError> {
    if is_alnum_words(value) {
        Ok(value)
    } else {
        Err(ValidationError::Missing(label))
    }
}

/// Require free text that is not blank. No character restrictions.
pub fn require_non_empty<'a>(
    value: &'a str,
    label: &'static str,
) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Missing(label))
    } else {
        Ok(value)
    }
}

/// Require a well-formed (positive) row ID.
pub fn require_id(id: i64, label: &'static str) -> Result<i64, ValidationError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(ValidationError::Missing(label))
    }
}

/// Parse a row ID from raw text.
///
/// Only a plain run of ASCII digits is accepted: signs, whitespace,
/// decimal points and exponents are all rejected, as is zero.
pub fn parse_id(raw: &str, label: &'static str) -> Result<i64, ValidationError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::Missing(label));
    }
    let id: i64 = raw.parse().map_err(|_| ValidationError::Missing(label))?;
    require_id(id, label)
}

/// Require a rating within [`RATING_RANGE`].
pub fn require_rating(rating: i64) -> Result<i64, ValidationError> {
    if RATING_RANGE.contains(&rating) {
        Ok(rating)
    } else {
        Err(ValidationError::OutOfRange {
            label: "rating",
            min: *RATING_RANGE.start(),
            max: *RATING_RANGE.end(),
        })
    }
}

/// Check the three text fields of a game, reporting the first bad one.
pub fn check_game_fields(title: &str, summary: &str, desc: &str) -> Result<(), ValidationError> {
    require_alnum_words(title, "title")?;
    require_alnum_words(summary, "summary")?;
    require_alnum_words(desc, "description")?;
    Ok(())
}

/// Check account fields. Absent fields are skipped.
pub fn check_user_fields(
    username: Option<&str>,
    password: Option<&str>,
) -> Result<(), ValidationError> {
    if let Some(username) = username {
        require_alnum_words(username, "user")?;
    }
    if let Some(password) = password {
        require_alnum_words(password, "pass")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alnum_words_accepts_letters_digits_spaces() {
        assert!(is_alnum_words("Red Jumper 4"));
        assert!(is_alnum_words("x"));
        assert!(!is_alnum_words(""));
        assert!(!is_alnum_words("   "));
        assert!(!is_alnum_words("Lorem Ipsum..."));
        assert!(!is_alnum_words("semi;colon"));
        assert!(!is_alnum_words("caf\u{e9}"));
    }

    #[test]
    fn missing_message_names_the_label() {
        let err = require_alnum_words("", "title").unwrap_err();
        assert_eq!(err.to_string(), "Must supply title");
        assert_eq!(err.label(), "title");
    }

    #[test]
    fn require_non_empty_allows_punctuation() {
        assert_eq!(require_non_empty("Well I do!", "fulltext"), Ok("Well I do!"));
        assert_eq!(
            require_non_empty(" \t", "fulltext"),
            Err(ValidationError::Missing("fulltext"))
        );
    }

    #[test]
    fn require_id_rejects_non_positive() {
        assert_eq!(require_id(1, "ID"), Ok(1));
        assert_eq!(require_id(0, "ID"), Err(ValidationError::Missing("ID")));
        assert_eq!(require_id(-7, "ID"), Err(ValidationError::Missing("ID")));
    }

    #[test]
    fn parse_id_accepts_only_plain_digits() {
        assert_eq!(parse_id("42", "gameID"), Ok(42));
        for raw in ["", "Not a number", "1.5", "1e3", "+3", "-3", " 4", "4 ", "0", "00"] {
            assert_eq!(
                parse_id(raw, "gameID"),
                Err(ValidationError::Missing("gameID")),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_id_rejects_overflow() {
        assert!(parse_id("99999999999999999999", "ID").is_err());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        assert_eq!(require_rating(1), Ok(1));
        assert_eq!(require_rating(5), Ok(5));
        let err = require_rating(6).unwrap_err();
        assert_eq!(err.to_string(), "Must supply rating between 1 and 5");
        assert!(require_rating(0).is_err());
    }

    #[test]
    fn game_fields_report_first_failure() {
        assert_eq!(check_game_fields("Red Jumper 4", "Summary", "Description"), Ok(()));
        assert_eq!(
            check_game_fields("", "", ""),
            Err(ValidationError::Missing("title"))
        );
        assert_eq!(
            check_game_fields("Red", "", ""),
            Err(ValidationError::Missing("summary"))
        );
        assert_eq!(
            check_game_fields("Red", "Summary", ""),
            Err(ValidationError::Missing("description"))
        );
    }

    #[test]
    fn user_fields_skip_absent_values() {
        assert_eq!(check_user_fields(Some("Username"), Some("Password")), Ok(()));
        assert_eq!(check_user_fields(None, None), Ok(()));
        assert_eq!(
            check_user_fields(Some(""), None),
            Err(ValidationError::Missing("user"))
        );
        assert_eq!(
            check_user_fields(Some("Username"), Some("")),
            Err(ValidationError::Missing("pass"))
        );
    }
}
