//! Request field parsing shared by the HTTP handlers.
//!
//! Every failure becomes an `invalid_request` error whose details name the
//! offending field and a stable `code`.

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::{EmployeeId, Error, Salary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValidationCode {
    InvalidEmployeeId,
    InvalidSalary,
    InvalidTimestamp,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidEmployeeId => "invalid_employee_id",
            Self::InvalidSalary => "invalid_salary",
            Self::InvalidTimestamp => "invalid_timestamp",
        }
    }
}

/// Wire name of a request field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }
}

fn invalid(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.0,
        "code": code.as_str(),
    }))
}

pub(crate) fn parse_employee_id(raw: String, field: FieldName) -> Result<EmployeeId, Error> {
    EmployeeId::try_from(raw).map_err(|err| {
        invalid(
            field,
            ValidationCode::InvalidEmployeeId,
            format!("{}: {err}", field.0),
        )
    })
}

/// Parse a list of references, reporting the index of the first bad entry.
pub(crate) fn parse_employee_id_list(
    raw: Vec<String>,
    field: FieldName,
) -> Result<Vec<EmployeeId>, Error> {
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            EmployeeId::new(&value).map_err(|err| {
                Error::invalid_request(format!("{}[{index}]: {err}", field.0)).with_details(
                    json!({
                        "field": field.0,
                        "index": index,
                        "value": value,
                        "code": ValidationCode::InvalidEmployeeId.as_str(),
                    }),
                )
            })
        })
        .collect()
}

pub(crate) fn parse_salary(raw: f64, field: FieldName) -> Result<Salary, Error> {
    Salary::new(raw).map_err(|err| invalid(field, ValidationCode::InvalidSalary, err.to_string()))
}

pub(crate) fn parse_rfc3339_timestamp(
    raw: &str,
    field: FieldName,
) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(raw)
        .map(|value| value.with_timezone(&Utc))
        .map_err(|_| {
            invalid(
                field,
                ValidationCode::InvalidTimestamp,
                format!("{} must be an RFC 3339 timestamp", field.0),
            )
        })
}
