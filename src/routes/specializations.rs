use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::specializations as specializations_service;

#[get("/specializations")]
pub async fn list_specializations(repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();

    match run_blocking(move || specializations_service::list_specializations(&repo)).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "Failed to list specializations"),
    }
}

#[get("/specializations/{id}")]
pub async fn get_specialization(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let id = id.into_inner();

    match run_blocking(move || specializations_service::get_specialization(&repo, id)).await {
        Ok(specialization) => HttpResponse::Ok().json(specialization),
        Err(err) => error_response(err, "Failed to load the specialization"),
    }
}
