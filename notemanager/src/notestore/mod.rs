//! Storage backends of notes and categories.
use crate::errors::NoteStoreError;
use crate::note::*;
use futures::future::BoxFuture;

mod in_memory;
mod postgresql;
#[cfg(test)]
mod tests;
pub mod util;

pub use in_memory::InMemoryStore;
pub use postgresql::{PostgreSQLStore, PostgreSQLStoreBuilder};

pub type BoxedNoteStore = Box<dyn NoteStore>;

/// Result of replacing a single document.
///
/// `acknowledged` is false when the backend accepted the request without confirming the write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of deleting a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// An abstraction for storage backends.
///
/// A store keeps two collections, notes and categories, each unique by ID.
/// It enforces no other rule: validation belongs to [`crate::NoteService`].
pub trait NoteStore: Send + Sync {
    /// Insert a new note.
    ///
    /// Fails with [`NoteStoreError::NoteIDConflict`] if the ID is taken.
    fn insert_note(&self, note: NoteRecord) -> BoxFuture<Result<(), NoteStoreError>>;
    /// Get all notes, in insertion order when the backend has one.
    fn find_notes(&self) -> BoxFuture<Result<Vec<NoteRecord>, NoteStoreError>>;
    fn find_note_by_id(&self, id: NoteID) -> BoxFuture<Result<Option<NoteRecord>, NoteStoreError>>;
    /// Get the first note whose title is exactly `title`.
    fn find_note_by_title<'a>(
        &'a self,
        title: &'a str,
    ) -> BoxFuture<'a, Result<Option<NoteRecord>, NoteStoreError>>;
    fn find_notes_by_owner(
        &self,
        owner_id: OwnerID,
    ) -> BoxFuture<Result<Vec<NoteRecord>, NoteStoreError>>;
    fn find_notes_by_category<'a>(
        &'a self,
        category_id: &'a CategoryID,
    ) -> BoxFuture<'a, Result<Vec<NoteRecord>, NoteStoreError>>;
    /// Replace the note with the given ID.
    ///
    /// Replacing a note that doesn't exist is not an error; the outcome reports no match.
    fn replace_note(
        &self,
        id: NoteID,
        note: NoteRecord,
    ) -> BoxFuture<Result<ReplaceOutcome, NoteStoreError>>;
    fn delete_note(&self, id: NoteID) -> BoxFuture<Result<DeleteOutcome, NoteStoreError>>;
    /// Insert a new category.
    ///
    /// Fails with [`NoteStoreError::CategoryIDConflict`] if the ID is taken.
    fn insert_category(&self, category: CategoryRecord) -> BoxFuture<Result<(), NoteStoreError>>;
    fn find_categories(&self) -> BoxFuture<Result<Vec<CategoryRecord>, NoteStoreError>>;
    fn delete_category<'a>(
        &'a self,
        id: &'a CategoryID,
    ) -> BoxFuture<'a, Result<DeleteOutcome, NoteStoreError>>;
}
