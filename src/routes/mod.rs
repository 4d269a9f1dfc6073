//! HTTP surface: `/api/doctors`, `/api/patients` and `/api/specializations`.

use actix_web::dev::{Service, ServiceRequest};
use actix_web::http::uri::{PathAndQuery, Uri};
use actix_web::{HttpRequest, HttpResponse, error, web};

use crate::dto::errors::ProblemDetails;
use crate::forms::FieldErrors;
use crate::services::{ServiceError, ServiceResult};

pub mod doctors;
pub mod patients;
pub mod specializations;

/// Registers the API scope and the extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .service(
            web::scope("/api")
                .wrap_fn(|mut req, srv| {
                    lowercase_path(&mut req);
                    srv.call(req)
                })
                .service(doctors::list_doctors)
                .service(doctors::get_doctor)
                .service(doctors::create_doctor)
                .service(doctors::update_doctor)
                .service(doctors::delete_doctor)
                .service(patients::list_patients)
                .service(patients::get_patient)
                .service(patients::create_patient)
                .service(patients::update_patient)
                .service(patients::delete_patient)
                .service(specializations::list_specializations)
                .service(specializations::get_specialization),
        );
}

/// Rewrites the request path to lower case so `/api/Doctors/1` and
/// `/api/doctors/1` reach the same handler. The query string is kept as is.
fn lowercase_path(req: &mut ServiceRequest) {
    if !req.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return;
    }

    let path = req.path().to_ascii_lowercase();
    let path_and_query = match req.query_string() {
        "" => path,
        query => format!("{path}?{query}"),
    };

    let mut parts = req.head().uri.clone().into_parts();
    parts.path_and_query = match PathAndQuery::try_from(path_and_query) {
        Ok(path_and_query) => Some(path_and_query),
        Err(_) => return,
    };

    if let Ok(uri) = Uri::from_parts(parts) {
        req.match_info_mut().get_mut().update(&uri);
        req.head_mut().uri = uri;
    }
}

/// Runs blocking repository work on the actix blocking pool.
pub(crate) async fn run_blocking<F, T>(f: F) -> ServiceResult<T>
where
    F: FnOnce() -> ServiceResult<T> + Send + 'static,
    T: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|e| ServiceError::Internal(format!("blocking task failed: {e}")))?
}

/// Maps a service failure onto a response. Failures that end in 500 are
/// logged with `context`.
pub(crate) fn error_response(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(ProblemDetails::new(404, "Not Found"))
        }
        ServiceError::IdMismatch => {
            HttpResponse::BadRequest().json(ProblemDetails::new(400, "ID mismatch"))
        }
        ServiceError::Validation(errors) => {
            HttpResponse::BadRequest().json(ProblemDetails::validation(errors))
        }
        ServiceError::InvalidReference(message) => HttpResponse::BadRequest()
            .json(ProblemDetails::new(400, "Referenced entity does not exist").detail(message)),
        ServiceError::InUse(message) => HttpResponse::Conflict()
            .json(ProblemDetails::new(409, "Entity is still referenced").detail(message)),
        err @ (ServiceError::Conflict(_) | ServiceError::Internal(_)) => {
            log::error!("{context}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn bad_request(message: String, field: &str) -> error::Error {
    let errors = FieldErrors::from([(field.to_string(), vec![message.clone()])]);
    let response = HttpResponse::BadRequest().json(ProblemDetails::validation(errors));
    error::InternalError::from_response(message, response).into()
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    bad_request(err.to_string(), "$")
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> error::Error {
    bad_request(err.to_string(), "query")
}

fn path_error_handler(err: error::PathError, _req: &HttpRequest) -> error::Error {
    let response = HttpResponse::NotFound().json(ProblemDetails::new(404, "Not Found"));
    error::InternalError::from_response(err.to_string(), response).into()
}
