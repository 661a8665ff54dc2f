//! The address book: records keyed by name, with search and persistence.

mod address_book;

pub use address_book::AddressBook;
