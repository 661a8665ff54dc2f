//! Validated field types.
//!
//! Each value object checks its format at construction time, so a
//! [`Record`](crate::models::Record) can never hold a malformed name,
//! phone, email or birthday.

pub mod birthday;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{Birthday, BIRTHDAY_FORMAT};
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
