//! HTTP inbound adapter exposing REST endpoints.

pub mod compensation;
pub mod employees;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the directory and compensation endpoints.
///
/// Literal segments are registered before `/employee/{id}` so that
/// `compensation` and `reporting-structure` are never read as identifiers.
/// Body and path extraction failures are reported as `invalid_request`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .service(compensation::create_compensation)
        .service(compensation::compensation_history)
        .service(compensation::current_compensation)
        .service(employees::reporting_structure)
        .service(employees::create_employee)
        .service(employees::get_employee)
        .service(employees::update_employee);
}
