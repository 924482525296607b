use thiserror::Error;

use crate::note::{CategoryID, NoteID};

#[derive(Error, Debug)]
pub enum NoteStoreError {
    #[error("note `{0}` already exists")]
    NoteIDConflict(NoteID),
    #[error("category `{0}` already exists")]
    CategoryIDConflict(CategoryID),
    #[error("PostgreSQL error")]
    PostgreSQLError(#[from] sqlx::Error),
}

/// Error type of [`crate::NoteService`] operations.
///
/// All variants except [`NoteServiceError::Store`] are expected outcomes of a request.
#[derive(Error, Debug)]
pub enum NoteServiceError {
    /// Title or description is empty.
    #[error("note incomplete")]
    Incomplete,
    #[error("category `{0}` is not accepted")]
    InvalidCategory(CategoryID),
    /// Either the title or the ID is already taken.
    #[error("{0}")]
    Duplicate(String),
    #[error("note with id `{0}` was not found")]
    NotFound(NoteID),
    #[error("category `{0}` doesn't exist")]
    CategoryNotExist(CategoryID),
    #[error("note store error")]
    Store(#[from] NoteStoreError),
}

/// Error type for parsing identifiers supplied by clients.
#[derive(Error, Debug)]
pub enum IdParseError {
    #[error("`{0}` is not a UUID")]
    NotUuid(String),
}
