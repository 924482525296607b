use crate::errors::NoteStoreError;
use crate::note::{CategoryID, CategoryRecord, NoteID, NoteRecord, OwnerID};
use crate::notestore::{DeleteOutcome, ReplaceOutcome};
use sqlx::{query, query_as, PgPool};
use uuid::Uuid;

#[derive(sqlx::FromRow)]
pub(super) struct NoteRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    description: String,
    category_id: String,
}

impl From<NoteRow> for NoteRecord {
    fn from(row: NoteRow) -> Self {
        NoteRecord {
            id: NoteID::new(row.id),
            owner_id: OwnerID::new(row.owner_id),
            title: row.title,
            description: row.description,
            category_id: row.category_id.into(),
        }
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct CategoryRow {
    id: String,
    name: String,
}

impl From<CategoryRow> for CategoryRecord {
    fn from(row: CategoryRow) -> Self {
        CategoryRecord {
            id: row.id.into(),
            name: row.name,
        }
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

pub(super) async fn insert_note(pool: &PgPool, note: &NoteRecord) -> Result<(), NoteStoreError> {
    let res = query(
        r#"
        INSERT INTO note(id, owner_id, title, description, category_id)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(note.id.to_uuid())
    .bind(note.owner_id.to_uuid())
    .bind(&note.title)
    .bind(&note.description)
    .bind(note.category_id.as_str())
    .execute(pool)
    .await;
    match res {
        Ok(_) => Ok(()),
        Err(e) if is_unique_violation(&e) => Err(NoteStoreError::NoteIDConflict(note.id)),
        Err(e) => Err(NoteStoreError::PostgreSQLError(e)),
    }
}

pub(super) async fn select_notes(pool: &PgPool) -> Result<Vec<NoteRecord>, NoteStoreError> {
    let rows: Vec<NoteRow> = query_as(
        r#"
        SELECT id, owner_id, title, description, category_id
        FROM note
        ORDER BY seq
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(NoteRecord::from).collect())
}

pub(super) async fn select_note_by_id(
    pool: &PgPool,
    id: NoteID,
) -> Result<Option<NoteRecord>, NoteStoreError> {
    let row: Option<NoteRow> = query_as(
        r#"
        SELECT id, owner_id, title, description, category_id
        FROM note
        WHERE id = $1
        "#,
    )
    .bind(id.to_uuid())
    .fetch_optional(pool)
    .await?;
    Ok(row.map(NoteRecord::from))
}

pub(super) async fn select_note_by_title(
    pool: &PgPool,
    title: &str,
) -> Result<Option<NoteRecord>, NoteStoreError> {
    let row: Option<NoteRow> = query_as(
        r#"
        SELECT id, owner_id, title, description, category_id
        FROM note
        WHERE title = $1
        ORDER BY seq
        LIMIT 1
        "#,
    )
    .bind(title)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(NoteRecord::from))
}

pub(super) async fn select_notes_by_owner(
    pool: &PgPool,
    owner_id: OwnerID,
) -> Result<Vec<NoteRecord>, NoteStoreError> {
    let rows: Vec<NoteRow> = query_as(
        r#"
        SELECT id, owner_id, title, description, category_id
        FROM note
        WHERE owner_id = $1
        ORDER BY seq
        "#,
    )
    .bind(owner_id.to_uuid())
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(NoteRecord::from).collect())
}

pub(super) async fn select_notes_by_category(
    pool: &PgPool,
    category_id: &CategoryID,
) -> Result<Vec<NoteRecord>, NoteStoreError> {
    let rows: Vec<NoteRow> = query_as(
        r#"
        SELECT id, owner_id, title, description, category_id
        FROM note
        WHERE category_id = $1
        ORDER BY seq
        "#,
    )
    .bind(category_id.as_str())
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(NoteRecord::from).collect())
}

/// PostgreSQL counts matched rows as affected, even when no column changes.
pub(super) async fn update_note(
    pool: &PgPool,
    id: NoteID,
    note: &NoteRecord,
) -> Result<ReplaceOutcome, NoteStoreError> {
    let res = query(
        r#"
        UPDATE note
        SET owner_id = $2, title = $3, description = $4, category_id = $5
        WHERE id = $1
        "#,
    )
    .bind(id.to_uuid())
    .bind(note.owner_id.to_uuid())
    .bind(&note.title)
    .bind(&note.description)
    .bind(note.category_id.as_str())
    .execute(pool)
    .await?;
    Ok(ReplaceOutcome {
        acknowledged: true,
        matched_count: res.rows_affected(),
        modified_count: res.rows_affected(),
    })
}

pub(super) async fn delete_note(pool: &PgPool, id: NoteID) -> Result<DeleteOutcome, NoteStoreError> {
    let res = query(r#"DELETE FROM note WHERE id = $1"#)
        .bind(id.to_uuid())
        .execute(pool)
        .await?;
    Ok(DeleteOutcome {
        acknowledged: true,
        deleted_count: res.rows_affected(),
    })
}

pub(super) async fn insert_category(
    pool: &PgPool,
    category: &CategoryRecord,
) -> Result<(), NoteStoreError> {
    let res = query(r#"INSERT INTO category(id, name) VALUES ($1, $2)"#)
        .bind(category.id.as_str())
        .bind(&category.name)
        .execute(pool)
        .await;
    match res {
        Ok(_) => Ok(()),
        Err(e) if is_unique_violation(&e) => {
            Err(NoteStoreError::CategoryIDConflict(category.id.clone()))
        }
        Err(e) => Err(NoteStoreError::PostgreSQLError(e)),
    }
}

pub(super) async fn select_categories(pool: &PgPool) -> Result<Vec<CategoryRecord>, NoteStoreError> {
    let rows: Vec<CategoryRow> = query_as(r#"SELECT id, name FROM category ORDER BY seq"#)
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(CategoryRecord::from).collect())
}

pub(super) async fn delete_category(
    pool: &PgPool,
    id: &CategoryID,
) -> Result<DeleteOutcome, NoteStoreError> {
    let res = query(r#"DELETE FROM category WHERE id = $1"#)
        .bind(id.as_str())
        .execute(pool)
        .await?;
    Ok(DeleteOutcome {
        acknowledged: true,
        deleted_count: res.rows_affected(),
    })
}
