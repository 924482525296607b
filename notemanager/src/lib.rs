//! NoteManager: notes filed under categories.
#[macro_use]
extern crate tracing;

pub mod errors;
pub mod note;
pub mod notestore;
pub mod service;
pub mod validation;

pub use note::{CategoryDto, CategoryID, NoteDto, NoteID, OwnerID};
pub use notestore::{BoxedNoteStore, InMemoryStore, NoteStore, PostgreSQLStoreBuilder};
pub use service::NoteService;
