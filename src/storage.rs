//! File persistence for address book records.
//!
//! The whole record list is written as one JSON document:
//!
//! ```json
//! { "version": 1, "records": [ { "name": "Alex", "phones": ["111111111"] } ] }
//! ```
//!
//! Writes replace the file wholesale. A crash mid-write can leave a
//! truncated file behind.

use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Version written to new files and the only one accepted on load.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct ContactsFileRef<'a> {
    version: u32,
    records: &'a [Record],
}

#[derive(Deserialize)]
struct ContactsFile {
    version: u32,
    #[serde(default)]
    records: Vec<Record>,
}

/// Write `records` to `path`, overwriting any existing file.
pub fn save(path: impl AsRef<Path>, records: &[Record]) -> StorageResult<()> {
    let path = path.as_ref();
    let document = ContactsFileRef {
        version: FORMAT_VERSION,
        records,
    };
    let content = serde_json::to_vec_pretty(&document)?;
    fs::write(path, content)?;

    tracing::info!(path = %path.display(), count = records.len(), "Saved records");
    Ok(())
}

/// Read the records stored at `path`.
///
/// Returns `Ok(None)` if the file does not exist. Names, phones and emails
/// are validated again while loading; birthdays are only parsed.
pub fn load(path: impl AsRef<Path>) -> StorageResult<Option<Vec<Record>>> {
    let path = path.as_ref();
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Contacts file not found, nothing to load");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let document: ContactsFile = serde_json::from_slice(&content)?;
    if document.version != FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: document.version,
            expected: FORMAT_VERSION,
        });
    }

    tracing::info!(
        path = %path.display(),
        count = document.records.len(),
        "Loaded records"
    );
    Ok(Some(document.records))
}
