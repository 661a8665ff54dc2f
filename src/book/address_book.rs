use crate::domain::Name;
use crate::error::{AddressBookError, BookResult};
use crate::models::Record;
use crate::notebook::{InMemoryNotebook, Notebook};
use crate::storage;
use chrono::{Local, NaiveDate};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// A collection of contact records keyed by name.
///
/// Records keep the order in which they were first added. The key of each
/// record is its own [`Name`], so the two can never disagree.
///
/// # Example
///
/// ```
/// use contact_book::AddressBook;
///
/// let mut book = AddressBook::default();
/// book.add_record("Alexander").unwrap();
/// book.record_mut("Alexander").unwrap().add_phone("111111111").unwrap();
///
/// let rows: Vec<String> = book.show_records().collect();
/// assert_eq!(rows, vec!["Alexander |  | 111111111 | "]);
/// ```
pub struct AddressBook {
    records: Vec<Record>,
    notebook: Arc<dyn Notebook>,
}

impl AddressBook {
    /// Create an empty book using the given notebook.
    pub fn new(notebook: Arc<dyn Notebook>) -> Self {
        Self {
            records: Vec::new(),
            notebook,
        }
    }

    /// The notebook this book was created with.
    pub fn notebook(&self) -> &Arc<dyn Notebook> {
        &self.notebook
    }

    /// Create an empty record for `name`.
    ///
    /// # Errors
    ///
    /// - `DuplicateRecord` if the name is taken
    /// - `InvalidFormat` if the name is not valid
    pub fn add_record(&mut self, name: &str) -> BookResult<&mut Record> {
        if self.contains(name) {
            return Err(AddressBookError::DuplicateRecord(name.to_string()));
        }
        let record = Record::with_name(Name::new(name)?);

        tracing::debug!(contact = name, "Adding record");
        self.records.push(record);
        let last = self.records.len() - 1;
        Ok(&mut self.records[last])
    }

    /// Remove and return the record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `RecordNotFound` if there is no such record.
    pub fn del_record(&mut self, name: &str) -> BookResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))?;

        tracing::debug!(contact = name, "Removing record");
        Ok(self.records.remove(index))
    }

    /// The record whose name is exactly `name`.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Mutable access to the record whose name is exactly `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Like [`get_mut`](Self::get_mut), but a missing record is an error.
    pub fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.get_mut(name)
            .ok_or_else(|| AddressBookError::RecordNotFound(name.to_string()))
    }

    /// Whether a record named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// One `name | email | phones | birthday` line per record.
    pub fn show_records(&self) -> impl Iterator<Item = String> + '_ {
        self.records.iter().map(|r| r.to_string())
    }

    /// Search blocks for every record with a field containing `query`.
    ///
    /// See [`Record::matches`] for how each field is compared.
    pub fn search(&self, query: &str) -> Vec<String> {
        let results: Vec<String> = self
            .records
            .iter()
            .filter(|r| r.matches(query))
            .map(Record::search_block)
            .collect();

        tracing::debug!(query, matches = results.len(), "Searched records");
        results
    }

    /// `"name, DD-MM-YYYY"` for every record whose birthday is exactly
    /// `days` days away, counted from the local current date.
    pub fn contacts_with_days_to_bday(&self, days: i64) -> Vec<String> {
        self.contacts_with_days_to_bday_from(days, Local::now().date_naive())
    }

    /// Like [`contacts_with_days_to_bday`](Self::contacts_with_days_to_bday)
    /// with an explicit `today`. Records without a birthday never match.
    pub fn contacts_with_days_to_bday_from(&self, days: i64, today: NaiveDate) -> Vec<String> {
        self.records
            .iter()
            .filter(|r| r.days_to_birthday_from(today) == Some(days))
            .filter_map(|r| {
                r.birthday()
                    .map(|birthday| format!("{}, {}", r.name(), birthday))
            })
            .collect()
    }

    /// Write every record to `path`, replacing the file.
    pub fn save_records_to_file(&self, path: impl AsRef<Path>) -> BookResult<()> {
        storage::save(path, &self.records)?;
        Ok(())
    }

    /// Merge the records stored at `path` into this book.
    ///
    /// A stored record replaces an existing one with the same name in
    /// place; new names are appended. A missing file leaves the book as is.
    pub fn read_records_from_file(&mut self, path: impl AsRef<Path>) -> BookResult<()> {
        if let Some(records) = storage::load(path)? {
            self.merge(records);
        }
        Ok(())
    }

    fn merge(&mut self, incoming: Vec<Record>) {
        for record in incoming {
            match self.position(record.name().as_str()) {
                Some(index) => self.records[index] = record,
                None => self.records.push(record),
            }
        }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new(Arc::new(InMemoryNotebook::new()))
    }
}

impl fmt::Debug for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressBook")
            .field("records", &self.records)
            .field("notes", &self.notebook.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
