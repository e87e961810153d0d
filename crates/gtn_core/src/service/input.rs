//! Parsing of human-entered numeric tokens.
//!
//! Library API for interactive front ends that feed the add flows; the `gtn`
//! command line only reads data files and does not call these.
//! Malformed input is an error for the single operation only; callers discard
//! the token and re-prompt or abort.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Malformed interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Malformed { field: &'static str, raw: String },
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { field, raw } => {
                write!(f, "invalid {field} `{raw}`: please enter a valid number")
            }
        }
    }
}

impl Error for InputError {}

/// Parses a task priority typed by a user.
pub fn parse_priority_input(raw: &str) -> Result<i64, InputError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InputError::Malformed {
            field: "priority",
            raw: raw.to_string(),
        })
}

/// Parses a goal progress typed by a user.
///
/// Range checks happen on add; this only rejects non-numbers.
pub fn parse_progress_input(raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| InputError::Malformed {
            field: "progress",
            raw: raw.to_string(),
        })
}

/// Splits comma-separated tag input. Empty tokens become `generic` on add.
pub fn split_tag_input(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::{parse_priority_input, parse_progress_input, split_tag_input, InputError};

    #[test]
    fn priority_accepts_padded_integers() {
        assert_eq!(parse_priority_input(" 7 ").expect("valid priority"), 7);
        assert_eq!(parse_priority_input("-2").expect("negative priority"), -2);
    }

    #[test]
    fn priority_rejects_non_numbers() {
        let err = parse_priority_input("high").expect_err("must fail");
        assert_eq!(
            err,
            InputError::Malformed {
                field: "priority",
                raw: "high".to_string()
            }
        );
    }

    #[test]
    fn progress_rejects_nan_and_text() {
        assert!(parse_progress_input("NaN").is_err());
        assert!(parse_progress_input("half").is_err());
        assert_eq!(parse_progress_input("0.4").expect("valid progress"), 0.4);
    }

    #[test]
    fn tag_input_keeps_empty_tokens() {
        assert_eq!(split_tag_input("work,,home"), vec!["work", "", "home"]);
        assert!(split_tag_input("").is_empty());
    }
}
