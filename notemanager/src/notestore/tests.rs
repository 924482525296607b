use crate::errors::NoteStoreError;
use crate::note::{CategoryRecord, NoteID, NoteRecord, OwnerID};
use crate::notestore::NoteStore;
use uuid::Uuid;

pub(super) fn record(title: &str, category_id: &str) -> NoteRecord {
    NoteRecord {
        id: NoteID::generate(),
        owner_id: OwnerID::default(),
        title: title.to_owned(),
        description: format!("Description of {}", title),
        category_id: category_id.into(),
    }
}

pub(super) async fn insert_and_find(store: impl NoteStore) {
    let note = record("Foo", "1");
    store.insert_note(note.clone()).await.unwrap();
    assert_eq!(
        store.find_note_by_id(note.id).await.unwrap(),
        Some(note.clone())
    );
    assert_eq!(store.find_notes().await.unwrap(), vec![note]);
    assert_eq!(store.find_note_by_id(NoteID::generate()).await.unwrap(), None);
}

pub(super) async fn note_id_conflict(store: impl NoteStore) {
    let note = record("Foo", "1");
    store.insert_note(note.clone()).await.unwrap();
    let mut other = record("Bar", "2");
    other.id = note.id;
    assert!(matches!(
        store.insert_note(other).await,
        Err(NoteStoreError::NoteIDConflict(id)) if id == note.id
    ));
    assert_eq!(store.find_notes().await.unwrap().len(), 1);
}

pub(super) async fn find_by_title(store: impl NoteStore) {
    let note = record("Buy milk", "1");
    store.insert_note(note.clone()).await.unwrap();
    assert_eq!(
        store.find_note_by_title("Buy milk").await.unwrap(),
        Some(note)
    );
    assert_eq!(store.find_note_by_title("buy milk").await.unwrap(), None);
    assert_eq!(store.find_note_by_title("Buy milk ").await.unwrap(), None);
}

pub(super) async fn find_by_owner_and_category(store: impl NoteStore) {
    let owner = OwnerID::new(Uuid::new_v4());
    let mut mine = record("Mine", "1");
    mine.owner_id = owner;
    let theirs = record("Theirs", "2");
    store.insert_note(mine.clone()).await.unwrap();
    store.insert_note(theirs.clone()).await.unwrap();

    assert_eq!(
        store.find_notes_by_owner(owner).await.unwrap(),
        vec![mine.clone()]
    );
    assert!(store
        .find_notes_by_owner(OwnerID::new(Uuid::new_v4()))
        .await
        .unwrap()
        .is_empty());
    assert_eq!(
        store.find_notes_by_category(&"2".into()).await.unwrap(),
        vec![theirs]
    );
    assert!(store
        .find_notes_by_category(&"3".into())
        .await
        .unwrap()
        .is_empty());
}

pub(super) async fn replace_note(store: impl NoteStore) {
    let note = record("Foo", "1");
    store.insert_note(note.clone()).await.unwrap();
    let mut updated = note.clone();
    updated.title = "Foo1".to_owned();
    updated.category_id = "3".into();
    let outcome = store.replace_note(note.id, updated.clone()).await.unwrap();
    assert!(outcome.acknowledged);
    assert_eq!(outcome.matched_count, 1);
    assert_eq!(outcome.modified_count, 1);
    assert_eq!(
        store.find_note_by_id(note.id).await.unwrap(),
        Some(updated)
    );
}

pub(super) async fn replace_missing_note(store: impl NoteStore) {
    let note = record("Ghost", "1");
    let outcome = store.replace_note(note.id, note.clone()).await.unwrap();
    assert!(outcome.acknowledged);
    assert_eq!(outcome.matched_count, 0);
    assert_eq!(outcome.modified_count, 0);
    assert_eq!(store.find_note_by_id(note.id).await.unwrap(), None);
}

pub(super) async fn delete_note(store: impl NoteStore) {
    let note = record("Foo", "1");
    store.insert_note(note.clone()).await.unwrap();
    let outcome = store.delete_note(note.id).await.unwrap();
    assert!(outcome.acknowledged);
    assert_eq!(outcome.deleted_count, 1);
    assert_eq!(store.find_note_by_id(note.id).await.unwrap(), None);
    assert_eq!(store.delete_note(note.id).await.unwrap().deleted_count, 0);
}

pub(super) async fn categories(store: impl NoteStore) {
    let todo = CategoryRecord {
        id: "1".into(),
        name: "To Do".to_owned(),
    };
    store.insert_category(todo.clone()).await.unwrap();
    assert!(matches!(
        store.insert_category(todo.clone()).await,
        Err(NoteStoreError::CategoryIDConflict(_))
    ));
    assert_eq!(store.find_categories().await.unwrap(), vec![todo.clone()]);
    assert_eq!(
        store.delete_category(&todo.id).await.unwrap().deleted_count,
        1
    );
    assert_eq!(
        store.delete_category(&todo.id).await.unwrap().deleted_count,
        0
    );
    assert!(store.find_categories().await.unwrap().is_empty());
}
