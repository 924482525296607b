//! In-memory storage of notes
use crate::errors::NoteStoreError;
use crate::note::{CategoryID, CategoryRecord, NoteID, NoteRecord, OwnerID};
use crate::notestore::{DeleteOutcome, NoteStore, ReplaceOutcome};
use futures::future::BoxFuture;
use tokio::sync::RwLock;

/// In-memory storage.
///
/// This is mostly designed for development use, because there is no persistence layer.
/// Collections are kept in insertion order.
#[derive(Debug, Default)]
struct InMemoryStoreInner {
    notes: Vec<NoteRecord>,
    categories: Vec<CategoryRecord>,
}

impl InMemoryStoreInner {
    fn new() -> Self {
        Default::default()
    }

    fn note_position(&self, id: NoteID) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    fn category_position(&self, id: &CategoryID) -> Option<usize> {
        self.categories.iter().position(|c| &c.id == id)
    }

    fn insert_note(&mut self, note: NoteRecord) -> Result<(), NoteStoreError> {
        if self.note_position(note.id).is_some() {
            return Err(NoteStoreError::NoteIDConflict(note.id));
        }
        self.notes.push(note);
        Ok(())
    }

    fn find_notes_by<P>(&self, predicate: P) -> Vec<NoteRecord>
    where
        P: Fn(&NoteRecord) -> bool,
    {
        self.notes.iter().filter(|&n| predicate(n)).cloned().collect()
    }

    fn replace_note(&mut self, id: NoteID, note: NoteRecord) -> ReplaceOutcome {
        match self.note_position(id) {
            Some(i) => {
                let modified = self.notes[i] != note;
                self.notes[i] = note;
                ReplaceOutcome {
                    acknowledged: true,
                    matched_count: 1,
                    modified_count: modified as u64,
                }
            }
            None => ReplaceOutcome {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            },
        }
    }

    fn delete_note(&mut self, id: NoteID) -> DeleteOutcome {
        let deleted_count = match self.note_position(id) {
            Some(i) => {
                self.notes.remove(i);
                1
            }
            None => 0,
        };
        DeleteOutcome {
            acknowledged: true,
            deleted_count,
        }
    }

    fn insert_category(&mut self, category: CategoryRecord) -> Result<(), NoteStoreError> {
        if self.category_position(&category.id).is_some() {
            return Err(NoteStoreError::CategoryIDConflict(category.id));
        }
        self.categories.push(category);
        Ok(())
    }

    fn delete_category(&mut self, id: &CategoryID) -> DeleteOutcome {
        let deleted_count = match self.category_position(id) {
            Some(i) => {
                self.categories.remove(i);
                1
            }
            None => 0,
        };
        DeleteOutcome {
            acknowledged: true,
            deleted_count,
        }
    }
}

#[derive(Debug)]
pub struct InMemoryStore {
    ims: RwLock<InMemoryStoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore {
            ims: RwLock::new(InMemoryStoreInner::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore for InMemoryStore {
    fn insert_note(&self, note: NoteRecord) -> BoxFuture<Result<(), NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            ims.insert_note(note)
        })
    }

    fn find_notes(&self) -> BoxFuture<Result<Vec<NoteRecord>, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            Ok(ims.notes.clone())
        })
    }

    fn find_note_by_id(&self, id: NoteID) -> BoxFuture<Result<Option<NoteRecord>, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            Ok(ims.notes.iter().find(|n| n.id == id).cloned())
        })
    }

    fn find_note_by_title<'a>(
        &'a self,
        title: &'a str,
    ) -> BoxFuture<'a, Result<Option<NoteRecord>, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            Ok(ims.notes.iter().find(|n| n.title == title).cloned())
        })
    }

    fn find_notes_by_owner(
        &self,
        owner_id: OwnerID,
    ) -> BoxFuture<Result<Vec<NoteRecord>, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            Ok(ims.find_notes_by(|n| n.owner_id == owner_id))
        })
    }

    fn find_notes_by_category<'a>(
        &'a self,
        category_id: &'a CategoryID,
    ) -> BoxFuture<'a, Result<Vec<NoteRecord>, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            Ok(ims.find_notes_by(|n| &n.category_id == category_id))
        })
    }

    fn replace_note(
        &self,
        id: NoteID,
        note: NoteRecord,
    ) -> BoxFuture<Result<ReplaceOutcome, NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            Ok(ims.replace_note(id, note))
        })
    }

    fn delete_note(&self, id: NoteID) -> BoxFuture<Result<DeleteOutcome, NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            Ok(ims.delete_note(id))
        })
    }

    fn insert_category(&self, category: CategoryRecord) -> BoxFuture<Result<(), NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            ims.insert_category(category)
        })
    }

    fn find_categories(&self) -> BoxFuture<Result<Vec<CategoryRecord>, NoteStoreError>> {
        Box::pin(async move {
            let ims = self.ims.read().await;
            Ok(ims.categories.clone())
        })
    }

    fn delete_category<'a>(
        &'a self,
        id: &'a CategoryID,
    ) -> BoxFuture<'a, Result<DeleteOutcome, NoteStoreError>> {
        Box::pin(async move {
            let mut ims = self.ims.write().await;
            Ok(ims.delete_category(id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notestore::tests as common_tests;

    #[tokio::test]
    async fn insert_and_find() {
        common_tests::insert_and_find(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn note_id_conflict() {
        common_tests::note_id_conflict(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn find_by_title() {
        common_tests::find_by_title(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn find_by_owner_and_category() {
        common_tests::find_by_owner_and_category(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn replace_note() {
        common_tests::replace_note(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn replace_missing_note() {
        common_tests::replace_missing_note(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn delete_note() {
        common_tests::delete_note(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn categories() {
        common_tests::categories(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn insertion_order() {
        let store = InMemoryStore::new();
        let titles = ["c", "a", "b"];
        for title in titles {
            store
                .insert_note(common_tests::record(title, "1"))
                .await
                .unwrap();
        }
        let found: Vec<String> = store
            .find_notes()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(found, titles);
    }

    #[tokio::test]
    async fn replace_identical_note_modifies_nothing() {
        let store = InMemoryStore::new();
        let note = common_tests::record("Same", "1");
        store.insert_note(note.clone()).await.unwrap();
        let outcome = store.replace_note(note.id, note.clone()).await.unwrap();
        assert_eq!(outcome.matched_count, 1);
        assert_eq!(outcome.modified_count, 0);
        assert!(store.ims.read().await.notes.contains(&note));
    }
}
