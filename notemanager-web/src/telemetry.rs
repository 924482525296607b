use crate::configuration::Settings;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{self, Tracer};
use opentelemetry_sdk::{runtime, Resource};
use tracing::Subscriber;
use tracing_log::LogTracer;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

/// Build a tracer exporting to `otlpendpoint`, if one is configured.
///
/// Must be called from within a Tokio runtime.
pub fn get_otlp_tracer(configuration: &Settings) -> Option<Tracer> {
    let end_point = configuration.otlpendpoint.as_ref()?;
    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(end_point.clone());
    let tracer_provider = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(
            trace::Config::default().with_resource(Resource::new(vec![KeyValue::new(
                "service.name",
                format!(
                    "notemanager{}",
                    if configuration.debug { "_debug" } else { "" }
                ),
            )])),
        )
        .install_batch(runtime::TokioCurrentThread)
        .expect("Failed to create an opentelemetry_otlp tracer");
    opentelemetry::global::set_tracer_provider(tracer_provider.clone());
    Some(tracer_provider.tracer("notemanager-web"))
}

pub fn get_subscriber(
    configuration: &Settings,
) -> impl Subscriber + Send + Sync + for<'span> LookupSpan<'span> {
    let default_logging_level = if configuration.debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_logging_level));
    let otlp_layer = get_otlp_tracer(configuration)
        .map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));
    Registry::default().with(env_filter).with(otlp_layer)
}

pub fn init_tracing(subscriber: impl Subscriber + Send + Sync + for<'span> LookupSpan<'span>) {
    LogTracer::init().expect("Failed to init LogTracer");
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set the default tracing subscriber");
}

pub fn shutdown_tracing() {
    opentelemetry::global::shutdown_tracer_provider();
}
