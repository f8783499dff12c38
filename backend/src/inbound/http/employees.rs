//! Employee directory HTTP handlers.
//!
//! ```text
//! POST /employee
//! GET  /employee/{id}
//! PUT  /employee/{id}
//! GET  /employee/reporting-structure/{id}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Employee, EmployeeDraft, Error, ReportingStructure};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_employee_id, parse_employee_id_list};

/// Reference to another employee by identifier.
///
/// Any other fields sent alongside the identifier are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeReferenceBody {
    pub employee_id: String,
}

/// Employee payload accepted by create and update.
///
/// `employeeId` is ignored: creation mints one and updates use the path.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRequestBody {
    pub employee_id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub direct_reports: Vec<EmployeeReferenceBody>,
}

/// Employee record as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponseBody {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub direct_reports: Vec<EmployeeReferenceBody>,
}

/// Computed reporting structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportingStructureBody {
    pub employee: String,
    pub number_of_reports: u64,
}

impl TryFrom<EmployeeRequestBody> for EmployeeDraft {
    type Error = Error;

    fn try_from(value: EmployeeRequestBody) -> Result<Self, Self::Error> {
        let direct_reports = parse_employee_id_list(
            value
                .direct_reports
                .into_iter()
                .map(|reference| reference.employee_id)
                .collect(),
            FieldName::new("directReports"),
        )?;
        Ok(EmployeeDraft {
            first_name: value.first_name,
            last_name: value.last_name,
            position: value.position,
            department: value.department,
            direct_reports,
        })
    }
}

impl From<Employee> for EmployeeResponseBody {
    fn from(value: Employee) -> Self {
        let (employee_id, draft) = value.into_parts();
        Self {
            employee_id: employee_id.into(),
            first_name: draft.first_name,
            last_name: draft.last_name,
            position: draft.position,
            department: draft.department,
            direct_reports: draft
                .direct_reports
                .into_iter()
                .map(|id| EmployeeReferenceBody {
                    employee_id: id.into(),
                })
                .collect(),
        }
    }
}

impl From<ReportingStructure> for ReportingStructureBody {
    fn from(value: ReportingStructure) -> Self {
        Self {
            employee: value.employee.into(),
            number_of_reports: value.number_of_reports,
        }
    }
}

/// Create an employee under a freshly assigned identifier.
#[utoipa::path(
    post,
    path = "/employee",
    request_body = EmployeeRequestBody,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employee")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = EmployeeDraft::try_from(payload.into_inner())?;
    let employee = state.employees.create_employee(draft).await?;
    Ok(HttpResponse::Created().json(EmployeeResponseBody::from(employee)))
}

/// Fetch one employee.
#[utoipa::path(
    get,
    path = "/employee/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee record", body = EmployeeResponseBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown employee", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployee"
)]
#[get("/employee/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EmployeeResponseBody>> {
    let id = parse_employee_id(path.into_inner(), FieldName::new("id"))?;
    let employee = state.employees_query.get_employee(&id).await?;
    Ok(web::Json(employee.into()))
}

/// Replace an existing employee. The path identifier overrides the body.
#[utoipa::path(
    put,
    path = "/employee/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    request_body = EmployeeRequestBody,
    responses(
        (status = 200, description = "Employee saved", body = EmployeeResponseBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown employee", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
#[put("/employee/{id}")]
pub async fn update_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<EmployeeRequestBody>,
) -> ApiResult<web::Json<EmployeeResponseBody>> {
    let id = parse_employee_id(path.into_inner(), FieldName::new("id"))?;
    let draft = EmployeeDraft::try_from(payload.into_inner())?;
    let employee = state.employees.update_employee(id, draft).await?;
    Ok(web::Json(employee.into()))
}

/// Count everyone reporting to an employee, directly or indirectly.
#[utoipa::path(
    get,
    path = "/employee/reporting-structure/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Reporting structure", body = ReportingStructureBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "Unknown employee or dangling direct report", body = ErrorSchema),
        (status = 409, description = "Cyclic or oversized reporting chain", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getReportingStructure"
)]
#[get("/employee/reporting-structure/{id}")]
pub async fn reporting_structure(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<ReportingStructureBody>> {
    let id = parse_employee_id(path.into_inner(), FieldName::new("id"))?;
    let structure = state.employees_query.reporting_structure(&id).await?;
    Ok(web::Json(structure.into()))
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
