//! Validation rules shared by note creation and update.
use crate::note::{CategoryID, NoteDto};
use std::collections::HashSet;

/// The categories a note may be filed under.
///
/// This set is fixed when the service is built and is not reconciled with the categories
/// stored in a note store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedCategories {
    ids: HashSet<CategoryID>,
}

impl AcceptedCategories {
    pub fn new<I, C>(ids: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CategoryID>,
    {
        AcceptedCategories {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, category_id: &CategoryID) -> bool {
        self.ids.contains(category_id)
    }
}

impl Default for AcceptedCategories {
    /// "To Do", "Done" and "Doing".
    fn default() -> Self {
        AcceptedCategories::new(["1", "2", "3"])
    }
}

/// Both title and description carry some non-whitespace text.
pub fn is_complete(note: &NoteDto) -> bool {
    !note.title.trim().is_empty() && !note.description.trim().is_empty()
}

pub fn is_valid_category(note: &NoteDto, accepted: &AcceptedCategories) -> bool {
    accepted.contains(&note.category_id)
}
