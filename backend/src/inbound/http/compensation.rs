//! Compensation HTTP handlers.
//!
//! ```text
//! POST /employee/compensation
//! GET  /employee/compensation/{id}
//! GET  /employee/compensation/{id}/history
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Compensation, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_employee_id, parse_rfc3339_timestamp, parse_salary,
};

/// Compensation record on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompensationBody {
    /// Identifier of the employee the record belongs to.
    #[schema(example = "16a596ae-edd3-4847-99fe-c4518e82c86f")]
    pub employee: String,
    #[schema(example = 125000.0)]
    pub salary: f64,
    /// RFC 3339 timestamp from which the salary applies.
    #[schema(example = "2024-01-01T00:00:00Z")]
    pub effective_date: String,
}

impl TryFrom<CompensationBody> for Compensation {
    type Error = Error;

    fn try_from(value: CompensationBody) -> Result<Self, Self::Error> {
        let employee = parse_employee_id(value.employee, FieldName::new("employee"))?;
        let salary = parse_salary(value.salary, FieldName::new("salary"))?;
        let effective_date =
            parse_rfc3339_timestamp(&value.effective_date, FieldName::new("effectiveDate"))?;
        Ok(Compensation::new(employee, salary, effective_date))
    }
}

impl From<Compensation> for CompensationBody {
    fn from(value: Compensation) -> Self {
        Self {
            employee: value.employee().to_string(),
            salary: value.salary().amount(),
            effective_date: value
                .effective_date()
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

/// Append a compensation record for an existing employee.
#[utoipa::path(
    post,
    path = "/employee/compensation",
    request_body = CompensationBody,
    responses(
        (status = 201, description = "Compensation recorded", body = CompensationBody),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown employee", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["compensation"],
    operation_id = "createCompensation"
)]
#[post("/employee/compensation")]
pub async fn create_compensation(
    state: web::Data<HttpState>,
    payload: web::Json<CompensationBody>,
) -> ApiResult<HttpResponse> {
    let compensation = Compensation::try_from(payload.into_inner())?;
    let created = state.compensation.create_compensation(compensation).await?;
    Ok(HttpResponse::Created().json(CompensationBody::from(created)))
}

/// Current compensation: the record with the latest effective date.
#[utoipa::path(
    get,
    path = "/employee/compensation/{id}",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Current compensation", body = CompensationBody),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "No compensation recorded", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["compensation"],
    operation_id = "getCompensation"
)]
#[get("/employee/compensation/{id}")]
pub async fn current_compensation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CompensationBody>> {
    let id = parse_employee_id(path.into_inner(), FieldName::new("id"))?;
    let current = state.compensation_query.current_compensation(&id).await?;
    Ok(web::Json(current.into()))
}

/// Every compensation record for an employee, oldest effective date first.
#[utoipa::path(
    get,
    path = "/employee/compensation/{id}/history",
    params(("id" = String, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Compensation history", body = [CompensationBody]),
        (status = 400, description = "Invalid identifier", body = ErrorSchema),
        (status = 404, description = "No compensation recorded", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["compensation"],
    operation_id = "getCompensationHistory"
)]
#[get("/employee/compensation/{id}/history")]
pub async fn compensation_history(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<CompensationBody>>> {
    let id = parse_employee_id(path.into_inner(), FieldName::new("id"))?;
    let history = state.compensation_query.compensation_history(&id).await?;
    Ok(web::Json(history.into_iter().map(Into::into).collect()))
}
