//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together with
//! the request/response bodies and the error wrappers from
//! [`crate::inbound::http::schemas`]. The document backs Swagger UI in debug
//! builds and is exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::compensation::CompensationBody;
use crate::inbound::http::employees::{
    EmployeeReferenceBody, EmployeeRequestBody, EmployeeResponseBody, ReportingStructureBody,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Organisation directory API",
        description = "Employee records, reporting structures and compensation history."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::reporting_structure,
        crate::inbound::http::compensation::create_compensation,
        crate::inbound::http::compensation::current_compensation,
        crate::inbound::http::compensation::compensation_history,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        EmployeeReferenceBody,
        EmployeeRequestBody,
        EmployeeResponseBody,
        ReportingStructureBody,
        CompensationBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "employees", description = "Employee directory and reporting structure"),
        (name = "compensation", description = "Append-only compensation history"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
