use super::Notebook;
use crate::models::Note;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Notebook kept entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryNotebook {
    notes: RwLock<Vec<Note>>,
}

impl InMemoryNotebook {
    /// Create an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Note>> {
        self.notes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Note>> {
        self.notes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Notebook for InMemoryNotebook {
    // Poisoned locks are recovered: no writer leaves the Vec half-updated.
    fn add_note(&self, note: Note) {
        tracing::debug!(tags = ?note.tags, "Adding note");
        self.write().push(note);
    }

    fn notes(&self) -> Vec<Note> {
        self.read().clone()
    }

    fn search(&self, query: &str) -> Vec<Note> {
        self.read().iter().filter(|n| n.matches(query)).cloned().collect()
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_notebook() {
        let notebook = InMemoryNotebook::new();
        assert!(notebook.is_empty());

        notebook.add_note(Note::new("Buy a gift for Alex").with_tags(["birthday"]));
        notebook.add_note(Note::new("Renew passport"));

        assert_eq!(notebook.len(), 2);
        assert_eq!(notebook.notes()[1].content, "Renew passport");

        let found = notebook.search("BIRTHDAY");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].content, "Buy a gift for Alex");
        assert!(notebook.search("nothing").is_empty());
    }

    #[test]
    fn test_add_note_after_lock_poisoned() {
        let notebook = InMemoryNotebook::new();
        notebook.add_note(Note::new("Before the panic"));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = notebook.notes.write().unwrap();
            panic!("writer panicked while holding the lock");
        }));
        assert!(result.is_err());
        assert!(notebook.notes.is_poisoned());

        notebook.add_note(Note::new("After the panic"));
        assert_eq!(notebook.len(), 2);
        assert_eq!(notebook.notes()[1].content, "After the panic");
        assert_eq!(notebook.search("after").len(), 1);
    }
}
