//! Business rules on top of a note store.
use crate::errors::{NoteServiceError, NoteStoreError};
use crate::note::{CategoryDto, CategoryID, NoteDto, NoteID, NoteRecord, OwnerID};
use crate::notestore::BoxedNoteStore;
use crate::validation::{is_complete, is_valid_category, AcceptedCategories};

/// Notes and categories, with validation.
///
/// The duplicate-title check on creation and the insert that follows are separate store
/// operations. Two concurrent creations with the same title can both succeed.
pub struct NoteService {
    store: BoxedNoteStore,
    accepted_categories: AcceptedCategories,
}

impl NoteService {
    /// A service accepting the default categories.
    pub fn new(store: BoxedNoteStore) -> Self {
        Self::with_accepted_categories(store, AcceptedCategories::default())
    }

    pub fn with_accepted_categories(
        store: BoxedNoteStore,
        accepted_categories: AcceptedCategories,
    ) -> Self {
        NoteService {
            store,
            accepted_categories,
        }
    }

    pub async fn get_all(&self) -> Result<Vec<NoteDto>, NoteServiceError> {
        let notes = self.store.find_notes().await?;
        Ok(notes.into_iter().map(NoteDto::from).collect())
    }

    pub async fn get_by_id(&self, id: NoteID) -> Result<NoteDto, NoteServiceError> {
        self.store
            .find_note_by_id(id)
            .await?
            .map(NoteDto::from)
            .ok_or(NoteServiceError::NotFound(id))
    }

    pub async fn get_by_owner(&self, owner_id: OwnerID) -> Result<Vec<NoteDto>, NoteServiceError> {
        let notes = self.store.find_notes_by_owner(owner_id).await?;
        Ok(notes.into_iter().map(NoteDto::from).collect())
    }

    /// Notes filed under a category. An empty category ID matches every note.
    pub async fn get_by_category(
        &self,
        category_id: &CategoryID,
    ) -> Result<Vec<NoteDto>, NoteServiceError> {
        if category_id.as_str().is_empty() {
            return self.get_all().await;
        }
        let notes = self.store.find_notes_by_category(category_id).await?;
        Ok(notes.into_iter().map(NoteDto::from).collect())
    }

    /// Create a note, assigning an ID if it has none.
    ///
    /// Returns the note as stored, including the assigned ID.
    pub async fn create(&self, mut note: NoteDto) -> Result<NoteDto, NoteServiceError> {
        if note.id.is_unset() {
            note.id = NoteID::generate();
        }
        if !is_complete(&note) {
            return Err(NoteServiceError::Incomplete);
        }
        if !is_valid_category(&note, &self.accepted_categories) {
            return Err(NoteServiceError::InvalidCategory(note.category_id));
        }
        if self.store.find_note_by_title(&note.title).await?.is_some() {
            debug!("Rejected note {} with a duplicate title", note.id);
            return Err(NoteServiceError::Duplicate(
                "a note with the same title already exists".to_owned(),
            ));
        }
        match self.store.insert_note(NoteRecord::from(note.clone())).await {
            Ok(()) => {
                info!("Created note {}", note.id);
                Ok(note)
            }
            Err(NoteStoreError::NoteIDConflict(_)) => Err(NoteServiceError::Duplicate(
                "a note with the same id already exists".to_owned(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the note at `id` with `note`; the ID carried by `note` is ignored.
    ///
    /// Returns `false` when the store didn't acknowledge the replacement and the note was
    /// inserted instead.
    pub async fn update(&self, id: NoteID, mut note: NoteDto) -> Result<bool, NoteServiceError> {
        note.id = id;
        if !is_valid_category(&note, &self.accepted_categories) {
            return Err(NoteServiceError::InvalidCategory(note.category_id));
        }
        if !is_complete(&note) {
            return Err(NoteServiceError::Incomplete);
        }
        let record = NoteRecord::from(note);
        let outcome = self.store.replace_note(id, record.clone()).await?;
        if !outcome.acknowledged && outcome.modified_count == 0 {
            warn!("Replacing note {} was not acknowledged, inserting it", id);
            self.store.insert_note(record).await?;
            return Ok(false);
        }
        Ok(true)
    }

    pub async fn delete(&self, id: NoteID) -> Result<bool, NoteServiceError> {
        let outcome = self.store.delete_note(id).await?;
        if !outcome.acknowledged || outcome.deleted_count == 0 {
            return Err(NoteServiceError::NotFound(id));
        }
        info!("Deleted note {}", id);
        Ok(true)
    }

    pub async fn get_all_categories(&self) -> Result<Vec<CategoryDto>, NoteServiceError> {
        let categories = self.store.find_categories().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub async fn create_category(
        &self,
        category: CategoryDto,
    ) -> Result<CategoryDto, NoteServiceError> {
        self.store.insert_category(category.clone().into()).await?;
        Ok(category)
    }

    pub async fn delete_category(&self, id: &CategoryID) -> Result<bool, NoteServiceError> {
        let outcome = self.store.delete_category(id).await?;
        if !outcome.acknowledged || outcome.deleted_count == 0 {
            return Err(NoteServiceError::CategoryNotExist(id.clone()));
        }
        Ok(true)
    }
}
