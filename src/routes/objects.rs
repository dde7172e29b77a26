use actix_files::NamedFile;
use actix_multipart::form::MultipartForm;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, post, put, web};
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::ServerConfig;
use crate::domain::object::Object;
use crate::forms::objects::{AddObjectForm, EditObjectForm, UploadPhotoForm};
use crate::ids::UuidGenerator;
use crate::repository::DieselRepository;
use crate::routes::{CreatedId, error_response, failure, ok, ok_empty};
use crate::services::objects::{
    ObjectQuery, attach_object_photo, create_object, delete_object, get_object,
    get_object_photo_path, list_objects, update_object,
};

#[derive(Debug, Serialize)]
pub struct OptionValueResponse {
    pub id: String,
    pub value: String,
}

/// Wire representation of an object.
#[derive(Debug, Serialize)]
pub struct ObjectResponse {
    pub id: String,
    pub name: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
    pub advs: String,
    pub disadvs: String,
    pub comparison_id: String,
    pub custom_options: Vec<OptionValueResponse>,
}

impl From<Object> for ObjectResponse {
    fn from(object: Object) -> Self {
        Self {
            id: object.id,
            name: object.name,
            rating: object.rating,
            created_at: object.created_at,
            advs: object.advantages,
            disadvs: object.disadvantages,
            comparison_id: object.comparison_id,
            custom_options: object
                .associations
                .into_iter()
                .map(|association| OptionValueResponse {
                    id: association.custom_option_id,
                    value: association.value,
                })
                .collect(),
        }
    }
}

#[get("/v1/objects")]
pub async fn show_objects(
    params: web::Query<ObjectQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_objects(repo.get_ref(), params.into_inner()) {
        Ok(objects) => ok(objects
            .into_iter()
            .map(ObjectResponse::from)
            .collect::<Vec<_>>()),
        Err(err) => error_response(err, "list objects"),
    }
}

#[get("/v1/objects/{id}")]
pub async fn show_object(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_object(repo.get_ref(), &path.into_inner()) {
        Ok(object) => ok(ObjectResponse::from(object)),
        Err(err) => error_response(err, "get object"),
    }
}

#[post("/v1/objects")]
pub async fn add_object(
    repo: web::Data<DieselRepository>,
    ids: web::Data<UuidGenerator>,
    form: web::Json<AddObjectForm>,
) -> impl Responder {
    match create_object(repo.get_ref(), ids.get_ref(), form.into_inner()) {
        Ok(id) => ok(CreatedId { id }),
        Err(err) => error_response(err, "create object"),
    }
}

#[put("/v1/objects/{id}")]
pub async fn edit_object(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditObjectForm>,
) -> impl Responder {
    match update_object(repo.get_ref(), &path.into_inner(), form.into_inner()) {
        Ok(()) => ok_empty(),
        Err(err) => error_response(err, "update object"),
    }
}

#[delete("/v1/objects/{id}")]
pub async fn remove_object(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_object(repo.get_ref(), &path.into_inner()) {
        Ok(()) => ok_empty(),
        Err(err) => error_response(err, "delete object"),
    }
}

#[get("/v1/objects/{id}/photo")]
pub async fn show_object_photo(
    req: HttpRequest,
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> HttpResponse {
    let photo_path = match get_object_photo_path(repo.get_ref(), &path.into_inner()) {
        Ok(photo_path) => photo_path,
        Err(err) => return error_response(err, "get object photo"),
    };

    match NamedFile::open(&photo_path) {
        Ok(file) => file.into_response(&req),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            failure(StatusCode::NOT_FOUND, "photo file not found")
        }
        Err(err) => {
            log::error!("Failed to open photo {photo_path}: {err}");
            failure(StatusCode::INTERNAL_SERVER_ERROR, "failed to open photo")
        }
    }
}

#[post("/v1/objects/{id}/photo")]
pub async fn upload_object_photo(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    ids: web::Data<UuidGenerator>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<UploadPhotoForm>,
) -> impl Responder {
    match attach_object_photo(
        repo.get_ref(),
        ids.get_ref(),
        &server_config.photos_dir,
        &path.into_inner(),
        form,
    ) {
        Ok(_) => ok_empty(),
        Err(err) => error_response(err, "upload object photo"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::association::Association;

    #[test]
    fn object_response_uses_wire_names() {
        let object = Object {
            id: "o-1".to_string(),
            name: "BMW X5".to_string(),
            rating: 8,
            created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .expect("valid date"),
            advantages: "Good SUV".to_string(),
            disadvantages: "Thirsty".to_string(),
            photo_path: Some("/photos/x.jpg".to_string()),
            comparison_id: "c-1".to_string(),
            associations: vec![Association::new("o-1", "speed", "250")],
        };

        let json = serde_json::to_value(ObjectResponse::from(object)).expect("serializable");

        assert_eq!(
            json,
            serde_json::json!({
                "id": "o-1",
                "name": "BMW X5",
                "rating": 8,
                "created_at": "2024-01-01T00:00:00",
                "advs": "Good SUV",
                "disadvs": "Thirsty",
                "comparison_id": "c-1",
                "custom_options": [{ "id": "speed", "value": "250" }],
            })
        );
    }
}
