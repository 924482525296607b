use crate::routes::*;
use actix_files::Files;
use actix_web::dev::Server;
use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::web::Data;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use notemanager::NoteService;
use serde_json::json;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "message": err.to_string() }));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "message": err.to_string() }));
    InternalError::from_response(err, response).into()
}

/// Start serving on `listener`.
///
/// Outside debug mode, a prebuilt frontend in `static_dir` is served at the root.
pub fn run(
    listener: TcpListener,
    note_service: NoteService,
    debug: bool,
    static_dir: Option<String>,
) -> Result<Server, std::io::Error> {
    let ns: Data<NoteService> = Data::new(note_service);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(TracingLogger::default())
            .service(web::scope("/notes").configure(notes_config))
            .configure(index_config)
            .configure(|cfg| {
                if let (false, Some(dir)) = (debug, static_dir.as_ref()) {
                    cfg.service(Files::new("/", dir).index_file("index.html"));
                }
            })
            .app_data(ns.clone())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    })
    .listen(listener)?
    .run();
    Ok(server)
}
