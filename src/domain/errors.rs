//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
///
/// Every variant carries the raw input that was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is invalid.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided birthday could not be parsed into a calendar date.
    MalformedDate(String),

    /// The provided birthday is today or in the future.
    BirthdayNotInPast(String),
}

impl ValidationError {
    /// The raw input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidName(s)
            | Self::InvalidPhone(s)
            | Self::InvalidEmail(s)
            | Self::MalformedDate(s)
            | Self::BirthdayNotInPast(s) => s,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Name '{}' is not valid. It should contain only letters and be 2 to 25 characters long",
                name
            ),
            Self::InvalidPhone(phone) => write!(f, "Phone number '{}' is not valid", phone),
            Self::InvalidEmail(email) => write!(f, "Email address '{}' is not valid", email),
            Self::MalformedDate(date) => write!(
                f,
                "Birthday '{}' is not a valid date. Use day-month-year, e.g. 30-09-1990",
                date
            ),
            Self::BirthdayNotInPast(date) => {
                write!(f, "Birthday '{}' must be in the past", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
