use crate::errors::NoteStoreError;
use crate::note::CategoryRecord;
use crate::notestore::NoteStore;

/// Categories a fresh store starts with.
pub const DEFAULT_CATEGORIES: [(&str, &str); 3] = [("1", "To Do"), ("2", "Done"), ("3", "Doing")];

/// Insert the [`DEFAULT_CATEGORIES`] that are not in the store yet.
pub async fn populate_default_categories(store: &dyn NoteStore) -> Result<(), NoteStoreError> {
    for (id, name) in DEFAULT_CATEGORIES {
        let category = CategoryRecord {
            id: id.into(),
            name: name.to_owned(),
        };
        match store.insert_category(category).await {
            Ok(()) => debug!("Added default category {}", id),
            Err(NoteStoreError::CategoryIDConflict(_)) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notestore::InMemoryStore;

    #[tokio::test]
    async fn populate_twice() {
        let store = InMemoryStore::new();
        populate_default_categories(&store).await.unwrap();
        populate_default_categories(&store).await.unwrap();
        let names: Vec<String> = store
            .find_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["To Do", "Done", "Doing"]);
    }
}
