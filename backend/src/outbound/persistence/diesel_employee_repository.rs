//! PostgreSQL-backed `EmployeeRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDraft, EmployeeId};

use super::error_mapping::StoreFailure;
use super::models::{EmployeeRecord, EmployeeRow};
use super::pool::DbPool;
use super::schema::employees;

/// Diesel implementation of the employee directory port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_port_error(failure: impl Into<StoreFailure>, employee_id: &EmployeeId) -> EmployeeRepositoryError {
    match failure.into() {
        StoreFailure::Connection(message) => EmployeeRepositoryError::connection(message),
        StoreFailure::Query(message) => EmployeeRepositoryError::query(message),
        StoreFailure::UniqueViolation => EmployeeRepositoryError::duplicate(employee_id.as_ref()),
    }
}

fn to_record(employee: &Employee) -> EmployeeRecord<'_> {
    EmployeeRecord {
        employee_id: employee.employee_id().as_ref(),
        first_name: employee.first_name(),
        last_name: employee.last_name(),
        position: employee.position(),
        department: employee.department(),
        direct_reports: employee
            .direct_reports()
            .iter()
            .map(|report| report.as_ref().to_owned())
            .collect(),
    }
}

fn from_row(row: EmployeeRow) -> Result<Employee, EmployeeRepositoryError> {
    let employee_id = EmployeeId::new(&row.employee_id).map_err(|err| {
        EmployeeRepositoryError::query(format!("stored employee id is invalid: {err}"))
    })?;
    let direct_reports = row
        .direct_reports
        .into_iter()
        .map(|raw| {
            EmployeeId::try_from(raw).map_err(|err| {
                warn!(employee_id = %employee_id, error = %err, "malformed stored direct report");
                EmployeeRepositoryError::query(format!(
                    "stored direct report of {employee_id} is invalid: {err}"
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Employee::new(
        employee_id,
        EmployeeDraft {
            first_name: row.first_name,
            last_name: row.last_name,
            position: row.position,
            department: row.department,
            direct_reports,
        },
    ))
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(|err| to_port_error(err, id))?;

        let row: Option<EmployeeRow> = employees::table
            .find(id.as_ref())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| to_port_error(err, id))?;

        row.map(from_row).transpose()
    }

    async fn insert(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let id = employee.employee_id();
        let mut conn = self.pool.get().await.map_err(|err| to_port_error(err, id))?;

        diesel::insert_into(employees::table)
            .values(to_record(employee))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| to_port_error(err, id))
    }

    async fn save(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let id = employee.employee_id();
        let mut conn = self.pool.get().await.map_err(|err| to_port_error(err, id))?;
        let record = to_record(employee);

        diesel::insert_into(employees::table)
            .values(&record)
            .on_conflict(employees::employee_id)
            .do_update()
            .set((&record, employees::updated_at.eq(diesel::dsl::now)))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| to_port_error(err, id))
    }
}
