use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::custom_options::CustomOptionForm;
use crate::ids::UuidGenerator;
use crate::repository::DieselRepository;
use crate::routes::{CreatedId, error_response, ok, ok_empty};
use crate::services::custom_options::{
    CustomOptionQuery, create_custom_option, delete_custom_option, get_custom_option,
    list_custom_options, update_custom_option,
};

#[get("/v1/custom_options")]
pub async fn show_custom_options(
    params: web::Query<CustomOptionQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_custom_options(repo.get_ref(), params.into_inner()) {
        Ok(options) => ok(options),
        Err(err) => error_response(err, "list custom options"),
    }
}

#[get("/v1/custom_options/{id}")]
pub async fn show_custom_option(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_custom_option(repo.get_ref(), &path.into_inner()) {
        Ok(option) => ok(option),
        Err(err) => error_response(err, "get custom option"),
    }
}

#[post("/v1/custom_options")]
pub async fn add_custom_option(
    repo: web::Data<DieselRepository>,
    ids: web::Data<UuidGenerator>,
    form: web::Json<CustomOptionForm>,
) -> impl Responder {
    match create_custom_option(repo.get_ref(), ids.get_ref(), form.into_inner()) {
        Ok(option) => ok(CreatedId { id: option.id }),
        Err(err) => error_response(err, "create custom option"),
    }
}

#[put("/v1/custom_options/{id}")]
pub async fn edit_custom_option(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    form: web::Json<CustomOptionForm>,
) -> impl Responder {
    match update_custom_option(repo.get_ref(), &path.into_inner(), form.into_inner()) {
        Ok(_) => ok_empty(),
        Err(err) => error_response(err, "update custom option"),
    }
}

#[delete("/v1/custom_options/{id}")]
pub async fn remove_custom_option(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_custom_option(repo.get_ref(), &path.into_inner()) {
        Ok(()) => ok_empty(),
        Err(err) => error_response(err, "delete custom option"),
    }
}
