use actix_web::{Responder, delete, get, post, put, web};

use crate::forms::comparisons::ComparisonForm;
use crate::ids::UuidGenerator;
use crate::repository::DieselRepository;
use crate::routes::{CreatedId, error_response, ok, ok_empty};
use crate::services::comparisons::{
    ComparisonQuery, create_comparison, delete_comparison, get_comparison, list_comparisons,
    update_comparison,
};

#[get("/v1/comparisons")]
pub async fn show_comparisons(
    params: web::Query<ComparisonQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_comparisons(repo.get_ref(), params.into_inner()) {
        Ok(comparisons) => ok(comparisons),
        Err(err) => error_response(err, "list comparisons"),
    }
}

#[get("/v1/comparisons/{id}")]
pub async fn show_comparison(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_comparison(repo.get_ref(), &path.into_inner()) {
        Ok(comparison) => ok(comparison),
        Err(err) => error_response(err, "get comparison"),
    }
}

#[post("/v1/comparisons")]
pub async fn add_comparison(
    repo: web::Data<DieselRepository>,
    ids: web::Data<UuidGenerator>,
    form: web::Json<ComparisonForm>,
) -> impl Responder {
    match create_comparison(repo.get_ref(), ids.get_ref(), form.into_inner()) {
        Ok(comparison) => ok(CreatedId { id: comparison.id }),
        Err(err) => error_response(err, "create comparison"),
    }
}

#[put("/v1/comparisons/{id}")]
pub async fn edit_comparison(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
    form: web::Json<ComparisonForm>,
) -> impl Responder {
    match update_comparison(repo.get_ref(), &path.into_inner(), form.into_inner()) {
        Ok(_) => ok_empty(),
        Err(err) => error_response(err, "update comparison"),
    }
}

#[delete("/v1/comparisons/{id}")]
pub async fn remove_comparison(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_comparison(repo.get_ref(), &path.into_inner()) {
        Ok(()) => ok_empty(),
        Err(err) => error_response(err, "delete comparison"),
    }
}
