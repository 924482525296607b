use notemanager::notestore::util::populate_default_categories;
use notemanager::{BoxedNoteStore, InMemoryStore, NoteService, PostgreSQLStoreBuilder};
use sqlx::postgres::PgConnectOptions;

#[derive(serde::Deserialize, Debug)]
pub enum NoteStoreType {
    InMemory,
    PostgreSQL,
}

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    database: Option<DatabaseSettings>,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    notestoretype: NoteStoreType,
    populatecategories: bool,
    pub staticdir: Option<String>,
    pub otlpendpoint: Option<String>,
}

impl Settings {
    pub async fn get_note_store(&self) -> BoxedNoteStore {
        let store: BoxedNoteStore = match self.notestoretype {
            NoteStoreType::InMemory => Box::new(InMemoryStore::new()),
            NoteStoreType::PostgreSQL => {
                let db_options = self.database.as_ref().expect("When notestoretype is set to PostgreSQL, you must configure the keys under database").options();
                Box::new(
                    PostgreSQLStoreBuilder::new(db_options)
                        .build()
                        .await
                        .expect("Failed to set up the PostgreSQL note store"),
                )
            }
        };
        if self.populatecategories {
            populate_default_categories(store.as_ref())
                .await
                .expect("Failed to populate the default categories");
        }
        store
    }

    pub async fn get_note_service(&self) -> NoteService {
        NoteService::new(self.get_note_store().await)
    }
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub port: String,
    pub host: String,
    pub name: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl DatabaseSettings {
    pub fn options(&self) -> PgConnectOptions {
        self.options_without_db().database(&self.name)
    }

    pub fn options_without_db(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port.parse().expect("Failed to parse port number"));
        if let Some(ref username) = self.username {
            let password = self
                .password
                .as_ref()
                .expect("Password expected when a username is set");
            options.username(username).password(password)
        } else {
            options
        }
    }
}

lazy_static! {
    pub static ref CONFIGURATION: Settings =
        get_configuration().expect("Failed to read configuration.yml.");
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let config = config::Config::builder()
        .set_default("debug", false)?
        .set_default("host", "localhost")?
        .set_default("port", 8000)?
        .set_default("notestoretype", "InMemory")?
        .set_default("populatecategories", true)?
        .add_source(config::File::with_name("configuration").required(false))
        .add_source(
            config::Environment::default()
                .prefix("notemanager")
                .separator("_"),
        )
        .build()?;
    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_options() {
        let database = DatabaseSettings {
            port: "5432".to_owned(),
            host: "localhost".to_owned(),
            name: "notemanager".to_owned(),
            username: None,
            password: None,
        };
        let options = database.options();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("notemanager"));
    }
}
