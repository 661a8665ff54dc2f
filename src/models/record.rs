//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Email, Name, Phone};
use crate::error::{AddressBookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder shown in search results for an empty field.
pub const EMPTY_FIELD: &str = "No records";

/// A contact: a name plus phones, an optional email and an optional birthday.
///
/// Phones keep their insertion order and are pairwise distinct. The
/// distinct-phones rule is also enforced when a record is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredRecord")]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<Email>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

/// Unchecked on-disk shape of a [`Record`].
#[derive(Deserialize)]
struct StoredRecord {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default)]
    email: Option<Email>,
    #[serde(default)]
    birthday: Option<Birthday>,
}

impl TryFrom<StoredRecord> for Record {
    type Error = AddressBookError;

    fn try_from(stored: StoredRecord) -> Result<Self, Self::Error> {
        let mut record = Record::with_name(stored.name);
        for phone in stored.phones {
            if record.phones.contains(&phone) {
                return Err(record.duplicate_phone(&phone));
            }
            record.phones.push(phone);
        }
        record.email = stored.email;
        record.birthday = stored.birthday;
        Ok(record)
    }
}

impl Record {
    /// Create an empty record.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidFormat` if the name is not valid.
    pub fn new(name: impl Into<String>) -> BookResult<Self> {
        Ok(Self::with_name(Name::new(name)?))
    }

    /// Create an empty record from an already validated name.
    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            email: None,
            birthday: None,
        }
    }

    /// The contact name, which is also its key in an address book.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phones in the order they were added.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The email, if one is set.
    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    /// The birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the phone is not valid
    /// - `DuplicatePhone` if the record already has it
    pub fn add_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        if self.phones.contains(&phone) {
            return Err(self.duplicate_phone(&phone));
        }
        tracing::debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if either phone is not valid
    /// - `PhoneNotFound` if the record does not have `old`
    /// - `DuplicatePhone` if `new` is already another phone of the record
    pub fn change_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let old = Phone::new(old)?;
        let index = self
            .phones
            .iter()
            .position(|p| *p == old)
            .ok_or_else(|| self.phone_not_found(&old))?;

        let new = Phone::new(new)?;
        let taken = self
            .phones
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && *p == new);
        if taken {
            return Err(self.duplicate_phone(&new));
        }

        tracing::debug!(contact = %self.name, old = %old, new = %new, "Changing phone");
        self.phones[index] = new;
        Ok(())
    }

    /// Remove a phone.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the phone is not valid
    /// - `PhoneNotFound` if the record does not have it
    pub fn del_phone(&mut self, phone: &str) -> BookResult<()> {
        let phone = Phone::new(phone)?;
        let index = self
            .phones
            .iter()
            .position(|p| *p == phone)
            .ok_or_else(|| self.phone_not_found(&phone))?;

        tracing::debug!(contact = %self.name, phone = %phone, "Removing phone");
        self.phones.remove(index);
        Ok(())
    }

    /// Set or replace the birthday.
    pub fn set_birthday(&mut self, birthday: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Clear the birthday. Does nothing if none is set.
    pub fn del_birthday(&mut self) {
        self.birthday = None;
    }

    /// Set or replace the email.
    pub fn set_email(&mut self, email: &str) -> BookResult<()> {
        self.email = Some(Email::new(email)?);
        Ok(())
    }

    /// Clear the email. Does nothing if none is set.
    pub fn del_email(&mut self) {
        self.email = None;
    }

    /// Days until the next birthday, counted from the local current date.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday; 0 if it is today.
    ///
    /// February 29 birthdays fall on February 28 in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(today)
    }

    /// Whether any field of the record contains `query`.
    ///
    /// Name and email are compared case-insensitively, phones exactly, and
    /// the birthday in its `DD-MM-YYYY` form.
    pub fn matches(&self, query: &str) -> bool {
        let lowered = query.to_lowercase();

        self.name.as_str().to_lowercase().contains(&lowered)
            || self.phones.iter().any(|p| p.as_str().contains(query))
            || self
                .birthday
                .is_some_and(|b| b.to_string().contains(&lowered))
            || self
                .email
                .as_ref()
                .is_some_and(|e| e.as_str().to_lowercase().contains(&lowered))
    }

    /// Multi-line block describing the record in search results.
    pub fn search_block(&self) -> String {
        let phones = if self.phones.is_empty() {
            EMPTY_FIELD.to_string()
        } else {
            self.phones
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_else(|| EMPTY_FIELD.to_string());
        let email = self
            .email
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| EMPTY_FIELD.to_string());

        format!(
            "\n Name: {}\n Phones: {}\n Birthday: {}\n Email: {}\n",
            self.name, phones, birthday, email
        )
    }

    fn duplicate_phone(&self, phone: &Phone) -> AddressBookError {
        AddressBookError::DuplicatePhone {
            name: self.name.to_string(),
            phone: phone.to_string(),
        }
    }

    fn phone_not_found(&self, phone: &Phone) -> AddressBookError {
        AddressBookError::PhoneNotFound {
            name: self.name.to_string(),
            phone: phone.to_string(),
        }
    }
}

/// `name | email | phones | birthday`, with absent fields left empty.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        let email = self.email.as_ref().map(Email::as_str).unwrap_or_default();
        let birthday = self.birthday.map(|b| b.to_string()).unwrap_or_default();

        write!(f, "{} | {} | {} | {}", self.name, email, phones, birthday)
    }
}
