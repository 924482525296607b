use notemanager_web::configuration::CONFIGURATION;
use notemanager_web::startup::run;
use notemanager_web::telemetry::{get_subscriber, init_tracing, shutdown_tracing};
use std::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(&CONFIGURATION).with(tracing_subscriber::fmt::layer());
    init_tracing(subscriber);

    let address = format!("{}:{}", CONFIGURATION.host, CONFIGURATION.port);
    let listener = TcpListener::bind(&address)?;
    let note_service = CONFIGURATION.get_note_service().await;
    tracing::info!("Listening on {}", address);

    let res = run(
        listener,
        note_service,
        CONFIGURATION.debug,
        CONFIGURATION.staticdir.clone(),
    )?
    .await;
    shutdown_tracing();
    res
}
