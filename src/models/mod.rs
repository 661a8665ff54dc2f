//! Data models for the contact book.
//!
//! This module contains the contact record stored in an address book and
//! the note stored in its notebook.

pub mod note;
pub mod record;

pub use note::Note;
pub use record::{Record, EMPTY_FIELD};
