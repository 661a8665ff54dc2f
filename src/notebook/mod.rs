//! Notebook collaborator attached to an address book.
//!
//! The address book does not use notes itself; it only carries the
//! notebook it was constructed with so that callers sharing a book also
//! share its notes.

mod in_memory;
mod traits;

pub use in_memory::InMemoryNotebook;
pub use traits::Notebook;
