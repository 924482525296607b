//! Core types of NoteManager.
//!
//! Notes and categories exist in two shapes: the DTOs exchanged with clients
//! ([`NoteDto`], [`CategoryDto`]) and the records kept by a note store
//! ([`NoteRecord`], [`CategoryRecord`]). Conversion between them is a plain
//! field-for-field copy.
use crate::errors::IdParseError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

/// ID of notes.
///
/// In a given note store ([`crate::notestore`]), [`NoteID`] uniquely identifies a note.
/// The nil UUID stands for "not assigned yet".
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash, Default)]
#[serde(transparent)]
pub struct NoteID {
    id: Uuid,
}

impl NoteID {
    pub fn new(id: Uuid) -> Self {
        NoteID { id }
    }

    /// Generate a fresh ID.
    ///
    /// We use the UUID V4 scheme.
    pub fn generate() -> Self {
        NoteID::new(Uuid::new_v4())
    }

    pub fn is_unset(&self) -> bool {
        self.id.is_nil()
    }

    pub fn to_uuid(&self) -> Uuid {
        self.id
    }
}

impl From<Uuid> for NoteID {
    fn from(id: Uuid) -> NoteID {
        NoteID::new(id)
    }
}

impl FromStr for NoteID {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(NoteID::new)
            .map_err(|_| IdParseError::NotUuid(s.to_owned()))
    }
}

impl Display for NoteID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// ID of the user owning a note.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy, Hash, Default)]
#[serde(transparent)]
pub struct OwnerID {
    id: Uuid,
}

impl OwnerID {
    pub fn new(id: Uuid) -> Self {
        OwnerID { id }
    }

    pub fn to_uuid(&self) -> Uuid {
        self.id
    }
}

impl From<Uuid> for OwnerID {
    fn from(id: Uuid) -> OwnerID {
        OwnerID::new(id)
    }
}

impl FromStr for OwnerID {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(OwnerID::new)
            .map_err(|_| IdParseError::NotUuid(s.to_owned()))
    }
}

impl Display for OwnerID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// ID of categories.
///
/// Categories are keyed by arbitrary strings, e.g. `"1"`.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Hash, Default)]
#[serde(into = "String", from = "String")]
pub struct CategoryID {
    id: String,
}

impl CategoryID {
    pub fn new(id: String) -> Self {
        CategoryID { id }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl From<CategoryID> for String {
    fn from(id: CategoryID) -> String {
        id.id
    }
}

impl From<String> for CategoryID {
    fn from(id: String) -> CategoryID {
        CategoryID::new(id)
    }
}

impl From<&str> for CategoryID {
    fn from(id: &str) -> CategoryID {
        CategoryID::new(id.to_owned())
    }
}

impl Display for CategoryID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl AsRef<str> for CategoryID {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

/// Deserialize `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A note as exchanged with clients.
///
/// Every field may be omitted or `null` on input; such IDs become nil and such
/// text fields become empty, and validation decides what to make of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteDto {
    #[serde(deserialize_with = "null_as_default")]
    pub id: NoteID,
    #[serde(deserialize_with = "null_as_default")]
    pub owner_id: OwnerID,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category_id: CategoryID,
}

/// A note as persisted by a note store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: NoteID,
    pub owner_id: OwnerID,
    pub title: String,
    pub description: String,
    pub category_id: CategoryID,
}

impl From<NoteDto> for NoteRecord {
    fn from(note: NoteDto) -> Self {
        NoteRecord {
            id: note.id,
            owner_id: note.owner_id,
            title: note.title,
            description: note.description,
            category_id: note.category_id,
        }
    }
}

impl From<NoteRecord> for NoteDto {
    fn from(note: NoteRecord) -> Self {
        NoteDto {
            id: note.id,
            owner_id: note.owner_id,
            title: note.title,
            description: note.description,
            category_id: note.category_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CategoryDto {
    #[serde(deserialize_with = "null_as_default")]
    pub id: CategoryID,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecord {
    pub id: CategoryID,
    pub name: String,
}

impl From<CategoryDto> for CategoryRecord {
    fn from(category: CategoryDto) -> Self {
        CategoryRecord {
            id: category.id,
            name: category.name,
        }
    }
}

impl From<CategoryRecord> for CategoryDto {
    fn from(category: CategoryRecord) -> Self {
        CategoryDto {
            id: category.id,
            name: category.name,
        }
    }
}
