//! These tests need a running PostgreSQL server; run them with `cargo test -- --ignored`.
use super::*;
use crate::notestore::tests as common_tests;
use sqlx::{Connection, Executor, PgConnection};
use std::env;
use uuid::Uuid;

/// Configure the connect options with the following environment variables
///
/// NOTEMANAGER_DATABASE_HOST: default "localhost"
/// NOTEMANAGER_DATABASE_PORT: default "5432"
/// NOTEMANAGER_DATABASE_USERNAME: default not set
/// NOTEMANAGER_DATABASE_PASSWORD: default not set
fn get_connect_options() -> PgConnectOptions {
    let host = env::var("NOTEMANAGER_DATABASE_HOST").unwrap_or("localhost".to_owned());
    let port = env::var("NOTEMANAGER_DATABASE_PORT").unwrap_or("5432".to_owned());
    let username = env::var("NOTEMANAGER_DATABASE_USERNAME");
    let password = env::var("NOTEMANAGER_DATABASE_PASSWORD");
    let options = PgConnectOptions::new()
        .host(&host)
        .port(port.parse().expect("Failed to parse port number"));
    if let Ok(ref u) = username {
        let p = password
            .as_ref()
            .expect("Password expected when a username is set");
        options.username(u).password(p)
    } else {
        options
    }
}

async fn get_store() -> PostgreSQLStore {
    let options = get_connect_options();
    let mut connection = PgConnection::connect_with(&options)
        .await
        .expect("Failed to connect to Postgres");
    let db_name = Uuid::new_v4().to_string();
    connection
        .execute(&*format!(r#"CREATE DATABASE "{db_name}";"#))
        .await
        .expect("Failed to create database.");
    PostgreSQLStoreBuilder::new(options.database(&db_name))
        .build()
        .await
        .expect("Failed to build the store")
}

#[tokio::test]
#[ignore]
async fn insert_and_find() {
    common_tests::insert_and_find(get_store().await).await;
}

#[tokio::test]
#[ignore]
async fn note_id_conflict() {
    common_tests::note_id_conflict(get_store().await).await;
}

#[tokio::test]
#[ignore]
async fn find_by_title() {
    common_tests::find_by_title(get_store().await).await;
}

#[tokio::test]
#[ignore]
async fn find_by_owner_and_category() {
    common_tests::find_by_owner_and_category(get_store().await).await;
}

#[tokio::test]
#[ignore]
async fn replace_note() {
    common_tests::replace_note(get_store().await).await;
}

#[tokio::test]
#[ignore]
async fn replace_missing_note() {
    common_tests::replace_missing_note(get_store().await).await;
}

#[tokio::test]
#[ignore]
async fn delete_note() {
    common_tests::delete_note(get_store().await).await;
}

#[tokio::test]
#[ignore]
async fn categories() {
    common_tests::categories(get_store().await).await;
}
