use lazy_static::lazy_static;
use notemanager::notestore::util::populate_default_categories;
use notemanager::{BoxedNoteStore, InMemoryStore, NoteService};
use notemanager_web::configuration::CONFIGURATION;
use notemanager_web::startup::run;
use notemanager_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;

lazy_static! {
    static ref TRACING: () = {
        let subscriber = get_subscriber(&CONFIGURATION)
            .with(tracing_subscriber::fmt::Layer::default().with_test_writer());
        init_tracing(subscriber);
    };
}

pub struct TestApp {
    pub address: String,
}

/// Serve a fresh in-memory store, seeded with the default categories.
pub async fn spawn_app() -> TestApp {
    let store = InMemoryStore::new();
    populate_default_categories(&store)
        .await
        .expect("Failed to populate categories");
    spawn_app_with_store(Box::new(store)).await
}

pub async fn spawn_app_with_store(store: BoxedNoteStore) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // We retrieve the port assigned to us by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);
    lazy_static::initialize(&TRACING);

    let service = NoteService::new(store);
    let server = run(listener, service, true, None).expect("Failed to bind address");
    let _ = tokio::spawn(server);
    TestApp { address }
}
