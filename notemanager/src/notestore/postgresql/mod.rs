use crate::errors::NoteStoreError;
use crate::note::{CategoryID, CategoryRecord, NoteID, NoteRecord, OwnerID};
use crate::notestore::{DeleteOutcome, NoteStore, ReplaceOutcome};
use futures::future::BoxFuture;
use sqlx::postgres::PgConnectOptions;
use sqlx::PgPool;

mod queries;

#[cfg(test)]
mod tests;

pub struct PostgreSQLStoreBuilder {
    db_options: PgConnectOptions,
}

impl PostgreSQLStoreBuilder {
    pub fn new(db_options: PgConnectOptions) -> Self {
        Self { db_options }
    }

    /// Connect to the database and bring its schema up to date.
    pub async fn build(self) -> Result<PostgreSQLStore, NoteStoreError> {
        let connection_pool = PgPool::connect_with(self.db_options).await?;
        sqlx::migrate!("./migrations")
            .run(&connection_pool)
            .await
            .map_err(sqlx::Error::from)?;
        info!("PostgreSQL note store ready");
        Ok(PostgreSQLStore {
            db_pool: connection_pool,
        })
    }
}

/// Storage on PostgreSQL.
///
/// Notes and categories live in the `note` and `category` tables, keyed by their IDs.
pub struct PostgreSQLStore {
    db_pool: PgPool,
}

impl NoteStore for PostgreSQLStore {
    fn insert_note(&self, note: NoteRecord) -> BoxFuture<Result<(), NoteStoreError>> {
        Box::pin(async move { queries::insert_note(&self.db_pool, &note).await })
    }

    fn find_notes(&self) -> BoxFuture<Result<Vec<NoteRecord>, NoteStoreError>> {
        Box::pin(async move { queries::select_notes(&self.db_pool).await })
    }

    fn find_note_by_id(&self, id: NoteID) -> BoxFuture<Result<Option<NoteRecord>, NoteStoreError>> {
        Box::pin(async move { queries::select_note_by_id(&self.db_pool, id).await })
    }

    fn find_note_by_title<'a>(
        &'a self,
        title: &'a str,
    ) -> BoxFuture<'a, Result<Option<NoteRecord>, NoteStoreError>> {
        Box::pin(async move { queries::select_note_by_title(&self.db_pool, title).await })
    }

    fn find_notes_by_owner(
        &self,
        owner_id: OwnerID,
    ) -> BoxFuture<Result<Vec<NoteRecord>, NoteStoreError>> {
        Box::pin(async move { queries::select_notes_by_owner(&self.db_pool, owner_id).await })
    }

    fn find_notes_by_category<'a>(
        &'a self,
        category_id: &'a CategoryID,
    ) -> BoxFuture<'a, Result<Vec<NoteRecord>, NoteStoreError>> {
        Box::pin(async move { queries::select_notes_by_category(&self.db_pool, category_id).await })
    }

    fn replace_note(
        &self,
        id: NoteID,
        note: NoteRecord,
    ) -> BoxFuture<Result<ReplaceOutcome, NoteStoreError>> {
        Box::pin(async move { queries::update_note(&self.db_pool, id, &note).await })
    }

    fn delete_note(&self, id: NoteID) -> BoxFuture<Result<DeleteOutcome, NoteStoreError>> {
        Box::pin(async move { queries::delete_note(&self.db_pool, id).await })
    }

    fn insert_category(&self, category: CategoryRecord) -> BoxFuture<Result<(), NoteStoreError>> {
        Box::pin(async move { queries::insert_category(&self.db_pool, &category).await })
    }

    fn find_categories(&self) -> BoxFuture<Result<Vec<CategoryRecord>, NoteStoreError>> {
        Box::pin(async move { queries::select_categories(&self.db_pool).await })
    }

    fn delete_category<'a>(
        &'a self,
        id: &'a CategoryID,
    ) -> BoxFuture<'a, Result<DeleteOutcome, NoteStoreError>> {
        Box::pin(async move { queries::delete_category(&self.db_pool, id).await })
    }
}
