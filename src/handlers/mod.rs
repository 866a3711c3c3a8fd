use actix_web::{error, web, HttpRequest};

use crate::errors::AppError;
use crate::utils::validation::ValidationError;

pub mod employee;

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::error!("error unmarshalling request body: {}", err);
    AppError::from(ValidationError::InvalidBody).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("error decoding query string: {}", err);
    AppError::BadRequest("bad request, wrong query string".to_string()).into()
}

/// Registers the employee routes and the extractor settings they rely on.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(json_error_handler),
    )
    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
    .service(web::resource("/employees").route(web::get().to(employee::get_employees)))
    .service(
        web::resource("/employees_department")
            .route(web::post().to(employee::add_employee_to_department)),
    );
}
