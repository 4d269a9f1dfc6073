use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::doctor::DoctorForm;
use crate::pagination::{ListParams, PageLimits};
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::doctors as doctors_service;

#[get("/doctors")]
pub async fn list_doctors(
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
    limits: web::Data<PageLimits>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let limits = *limits.get_ref();
    let params = params.into_inner();

    match run_blocking(move || doctors_service::list_doctors(&repo, &params, limits)).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "Failed to list doctors"),
    }
}

#[get("/doctors/{id}")]
pub async fn get_doctor(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();
    let id = id.into_inner();

    match run_blocking(move || doctors_service::get_doctor(&repo, id)).await {
        Ok(doctor) => HttpResponse::Ok().json(doctor),
        Err(err) => error_response(err, "Failed to load the doctor"),
    }
}

#[post("/doctors")]
pub async fn create_doctor(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<DoctorForm>,
) -> impl Responder {
    let repo = repo.get_ref().clone();

    match run_blocking(move || doctors_service::create_doctor(&repo, form)).await {
        Ok(doctor) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/doctors/{}", doctor.id)))
            .json(doctor),
        Err(err) => error_response(err, "Failed to add a doctor"),
    }
}

#[put("/doctors/{id}")]
pub async fn update_doctor(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<DoctorForm>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let id = id.into_inner();

    match run_blocking(move || doctors_service::update_doctor(&repo, id, form)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "Failed to update the doctor"),
    }
}

#[delete("/doctors/{id}")]
pub async fn delete_doctor(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let id = id.into_inner();

    match run_blocking(move || doctors_service::delete_doctor(&repo, id)).await {
        Ok(doctor) => HttpResponse::Ok().json(doctor),
        Err(err) => error_response(err, "Failed to delete the doctor"),
    }
}
