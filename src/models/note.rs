//! Note model for the notebook attached to an address book.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A free-text note with optional tags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    /// The note content
    pub content: String,

    /// Tags associated with the note
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// When the note was created
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Create a new untagged note stamped with the current time.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            tags: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Attach tags, skipping blanks and repeats.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            let tag = tag.into().trim().to_string();
            if !tag.is_empty() && !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
        self
    }

    /// Case-insensitive match against the content and the tags.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.content.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}
