use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::patient::PatientForm;
use crate::pagination::{ListParams, PageLimits};
use crate::repository::DieselRepository;
use crate::routes::{error_response, run_blocking};
use crate::services::patients as patients_service;

#[get("/patients")]
pub async fn list_patients(
    params: web::Query<ListParams>,
    repo: web::Data<DieselRepository>,
    limits: web::Data<PageLimits>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let limits = *limits.get_ref();
    let params = params.into_inner();

    match run_blocking(move || patients_service::list_patients(&repo, &params, limits)).await {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "Failed to list patients"),
    }
}

#[get("/patients/{id}")]
pub async fn get_patient(id: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    let repo = repo.get_ref().clone();
    let id = id.into_inner();

    match run_blocking(move || patients_service::get_patient(&repo, id)).await {
        Ok(patient) => HttpResponse::Ok().json(patient),
        Err(err) => error_response(err, "Failed to load the patient"),
    }
}

#[post("/patients")]
pub async fn create_patient(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<PatientForm>,
) -> impl Responder {
    let repo = repo.get_ref().clone();

    match run_blocking(move || patients_service::create_patient(&repo, form)).await {
        Ok(patient) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/patients/{}", patient.id)))
            .json(patient),
        Err(err) => error_response(err, "Failed to add a patient"),
    }
}

#[put("/patients/{id}")]
pub async fn update_patient(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<PatientForm>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let id = id.into_inner();

    match run_blocking(move || patients_service::update_patient(&repo, id, form)).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "Failed to update the patient"),
    }
}

#[delete("/patients/{id}")]
pub async fn delete_patient(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let repo = repo.get_ref().clone();
    let id = id.into_inner();

    match run_blocking(move || patients_service::delete_patient(&repo, id)).await {
        Ok(patient) => HttpResponse::Ok().json(patient),
        Err(err) => error_response(err, "Failed to delete the patient"),
    }
}
