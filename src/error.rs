//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by record and address book operations.
///
/// A failed operation never changes the book or the record it was called on.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// A field value failed validation
    #[error("{0}")]
    InvalidFormat(#[from] ValidationError),

    /// A record with this name already exists
    #[error("Record with name {0} already exists")]
    DuplicateRecord(String),

    /// The phone is already stored in the record
    #[error("Phone {phone} already exists in {name} record")]
    DuplicatePhone { name: String, phone: String },

    /// No record with this name
    #[error("Record with name {0} does not exist")]
    RecordNotFound(String),

    /// The phone is not stored in the record
    #[error("Phone {phone} is not found in {name} record")]
    PhoneNotFound { name: String, phone: String },

    /// Reading or writing the contacts file failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AddressBookError {
    /// True for rejected inserts of an existing record or phone.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateRecord(_) | Self::DuplicatePhone { .. })
    }

    /// True when the record or phone to act on does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound(_) | Self::PhoneNotFound { .. })
    }
}

/// Errors that can occur while persisting records.
#[derive(Error, Debug)]
pub enum StorageError {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid contacts document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file was written by an incompatible version
    #[error("Unsupported contacts file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type BookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
