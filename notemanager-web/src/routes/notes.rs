use actix_web::http::header;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use notemanager::errors::NoteServiceError;
use notemanager::{CategoryDto, CategoryID, NoteDto, NoteID, NoteService, OwnerID};
use serde::Deserialize;
use serde_json::json;
use std::fmt::Display;

fn error_body(e: &impl Display) -> serde_json::Value {
    json!({ "message": e.to_string() })
}

fn note_service_error_handler(e: &NoteServiceError) -> HttpResponse {
    match e {
        NoteServiceError::Incomplete => HttpResponse::BadRequest().json(error_body(e)),
        NoteServiceError::InvalidCategory(_) => HttpResponse::Unauthorized().json(error_body(e)),
        NoteServiceError::Duplicate(_) => HttpResponse::Conflict().json(error_body(e)),
        NoteServiceError::NotFound(_) => HttpResponse::NotFound().json(error_body(e)),
        NoteServiceError::CategoryNotExist(_) => HttpResponse::NotFound().json(error_body(e)),
        NoteServiceError::Store(_) => {
            error!("Note store internal error {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn parse_note_id(id: &str) -> Result<NoteID, HttpResponse> {
    id.parse::<NoteID>()
        .map_err(|e| HttpResponse::BadRequest().json(error_body(&e)))
}

#[derive(Deserialize, Debug)]
struct IdQuery {
    #[serde(default)]
    id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct OwnerQuery {
    owner_id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct CategoryQuery {
    #[serde(default)]
    category_id: String,
}

#[get("")]
#[instrument(skip(service))]
async fn get_notes(service: web::Data<NoteService>) -> impl Responder {
    match service.get_all().await {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => note_service_error_handler(&e),
    }
}

#[get("/GetNoteById")]
#[instrument(skip(service, query), fields(note_id = %query.id))]
async fn get_note_by_id(
    service: web::Data<NoteService>,
    query: web::Query<IdQuery>,
) -> impl Responder {
    // A missing ID looks up the nil ID, which is never assigned
    let id = if query.id.is_empty() {
        NoteID::default()
    } else {
        match parse_note_id(&query.id) {
            Ok(id) => id,
            Err(response) => return response,
        }
    };
    match service.get_by_id(id).await {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(e) => note_service_error_handler(&e),
    }
}

#[get("/GetNotesByOwnerId")]
#[instrument(skip(service, query), fields(owner_id = %query.owner_id))]
async fn get_notes_by_owner_id(
    service: web::Data<NoteService>,
    query: web::Query<OwnerQuery>,
) -> impl Responder {
    let owner_id = match query.owner_id.parse::<OwnerID>() {
        Ok(id) => id,
        Err(e) => return HttpResponse::BadRequest().json(error_body(&e)),
    };
    match service.get_by_owner(owner_id).await {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => note_service_error_handler(&e),
    }
}

#[get("/GetNotesByCategory")]
#[instrument(skip(service, query), fields(category_id = %query.category_id))]
async fn get_notes_by_category(
    service: web::Data<NoteService>,
    query: web::Query<CategoryQuery>,
) -> impl Responder {
    let category_id: CategoryID = query.into_inner().category_id.into();
    match service.get_by_category(&category_id).await {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => note_service_error_handler(&e),
    }
}

#[get("/GetCategories")]
#[instrument(skip(service))]
async fn get_categories(service: web::Data<NoteService>) -> impl Responder {
    match service.get_all_categories().await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => note_service_error_handler(&e),
    }
}

#[post("/AddCategory")]
#[instrument(skip(service, category))]
async fn add_category(
    service: web::Data<NoteService>,
    category: web::Json<CategoryDto>,
) -> impl Responder {
    match service.create_category(category.into_inner()).await {
        Ok(category) => HttpResponse::Ok().json(category),
        Err(e) => {
            warn!("Failed to add category: {:?}", e);
            HttpResponse::BadRequest().json(error_body(&e))
        }
    }
}

#[delete("/DeleteCategory")]
#[instrument(skip(service, query), fields(category_id = %query.id))]
async fn delete_category(
    service: web::Data<NoteService>,
    query: web::Query<IdQuery>,
) -> impl Responder {
    let category_id: CategoryID = query.into_inner().id.into();
    match service.delete_category(&category_id).await {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => HttpResponse::NotFound().json(error_body(&e)),
    }
}

#[post("")]
#[instrument(skip(service, note))]
async fn create_note(service: web::Data<NoteService>, note: web::Json<NoteDto>) -> impl Responder {
    match service.create(note.into_inner()).await {
        Ok(note) => HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("/notes/GetNoteById?id={}", note.id),
            ))
            .json(note),
        Err(e) => note_service_error_handler(&e),
    }
}

#[put("/{note_id}")]
#[instrument(
    skip(service, params, note),
    fields(
        note_id = %params.0
    )
)]
async fn update_note(
    service: web::Data<NoteService>,
    params: web::Path<(String,)>,
    note: web::Json<NoteDto>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match service.update(id, note.into_inner()).await {
        Ok(updated) => HttpResponse::Ok().json(updated),
        // Unlike creation, a bad category is a plain bad request here
        Err(e @ NoteServiceError::InvalidCategory(_)) => {
            HttpResponse::BadRequest().json(error_body(&e))
        }
        Err(e) => note_service_error_handler(&e),
    }
}

#[delete("/{note_id}")]
#[instrument(
    skip(service, params),
    fields(
        note_id = %params.0
    )
)]
async fn delete_note(
    service: web::Data<NoteService>,
    params: web::Path<(String,)>,
) -> impl Responder {
    let (note_id,) = params.into_inner();
    let id = match parse_note_id(&note_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    match service.delete(id).await {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) => note_service_error_handler(&e),
    }
}

/// Routes under `/notes`.
///
/// Fixed paths are registered before `/{note_id}` so they are never taken for an ID.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(get_note_by_id)
        .service(get_notes_by_owner_id)
        .service(get_notes_by_category)
        .service(get_categories)
        .service(add_category)
        .service(delete_category)
        .service(get_notes)
        .service(create_note)
        .service(update_note)
        .service(delete_note);
}
