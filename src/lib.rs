//! Contact Book - a personal address book with validated fields.
//!
//! Contacts carry a name, any number of phone numbers, an optional email
//! and an optional birthday. Every field is validated when it is set, so a
//! stored record is always well formed.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, email, birthday)
//! - **models**: The contact record and the note
//! - **book**: The address book with search, birthdays and persistence
//! - **notebook**: The notes collaborator handed to an address book
//! - **storage**: JSON file persistence
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod notebook;
pub mod storage;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, Email, Name, Phone, ValidationError};
pub use error::{AddressBookError, BookResult, ConfigError, StorageError};
pub use models::{Note, Record};
pub use notebook::{InMemoryNotebook, Notebook};
