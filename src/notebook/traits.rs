use crate::models::Note;

/// Storage for free-text notes.
///
/// Implementations use interior mutability so a single notebook can be
/// shared between address books through an `Arc`.
pub trait Notebook: Send + Sync {
    /// Store a note.
    fn add_note(&self, note: Note);

    /// All notes in insertion order.
    fn notes(&self) -> Vec<Note>;

    /// Notes whose content or tags contain `query`, ignoring case.
    fn search(&self, query: &str) -> Vec<Note>;

    /// Number of stored notes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
