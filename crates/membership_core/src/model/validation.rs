//! Member field validation.
//!
//! # Invariants
//! - Every rule runs; violations are collected, never short-circuited.
//! - Validation is pure and never touches the store.
//! - Messages are user-facing and stable.

use crate::model::member::MemberFields;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s-]{7,}$").expect("valid phone number regex"));

/// One violated member field rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberFieldError {
    FullNameRequired,
    InvalidPhoneNumber,
    ExitBeforeJoin,
}

impl Display for MemberFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullNameRequired => write!(f, "Full name is required"),
            Self::InvalidPhoneNumber => write!(f, "Invalid phone number format"),
            Self::ExitBeforeJoin => write!(f, "Exit date cannot be before join date"),
        }
    }
}

impl Error for MemberFieldError {}

/// Checks a candidate record and returns every violated rule in rule order.
///
/// An empty result means the candidate may be persisted.
pub fn validate_member(candidate: &MemberFields) -> Vec<MemberFieldError> {
    let mut errors = Vec::new();

    if candidate.full_name.trim().is_empty() {
        errors.push(MemberFieldError::FullNameRequired);
    }

    if !is_valid_phone_number(&candidate.phone_number) {
        errors.push(MemberFieldError::InvalidPhoneNumber);
    }

    if exit_precedes_join(&candidate.date_joined, candidate.date_exit.as_deref()) {
        errors.push(MemberFieldError::ExitBeforeJoin);
    }

    errors
}

/// Renders validation errors as the messages shown to the user.
pub fn validation_messages(errors: &[MemberFieldError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

/// Optional leading `+`, then at least 7 digits, spaces or hyphens.
pub fn is_valid_phone_number(value: &str) -> bool {
    PHONE_NUMBER_RE.is_match(value)
}

// ISO `yyyy-mm-dd` strings order the same lexicographically and by date.
fn exit_precedes_join(date_joined: &str, date_exit: Option<&str>) -> bool {
    match date_exit {
        Some(exit) if !exit.is_empty() && !date_joined.is_empty() => exit < date_joined,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_precedes_join, is_valid_phone_number};

    #[test]
    fn phone_number_accepts_common_shapes() {
        assert!(is_valid_phone_number("5551234"));
        assert!(is_valid_phone_number("+1 555-1234"));
        assert!(is_valid_phone_number("020 7946 0958"));
    }

    #[test]
    fn phone_number_rejects_short_or_foreign_characters() {
        assert!(!is_valid_phone_number("123456"));
        assert!(!is_valid_phone_number("+123456"));
        assert!(!is_valid_phone_number("555-CALL-NOW"));
        assert!(!is_valid_phone_number("(555) 123-4567"));
        assert!(!is_valid_phone_number("++5551234"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn exit_on_join_day_is_allowed() {
        assert!(!exit_precedes_join("2021-05-01", Some("2021-05-01")));
        assert!(exit_precedes_join("2021-05-01", Some("2021-04-30")));
    }

    #[test]
    fn missing_dates_skip_the_range_rule() {
        assert!(!exit_precedes_join("2021-05-01", None));
        assert!(!exit_precedes_join("2021-05-01", Some("")));
        assert!(!exit_precedes_join("", Some("2021-04-30")));
    }
}
