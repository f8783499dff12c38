//! PostgreSQL-backed `CompensationRepository`.
//!
//! Rows are only ever inserted. The serial `id` column preserves insertion
//! order so equal effective dates resolve to the latest write.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CompensationRepository, CompensationRepositoryError};
use crate::domain::{Compensation, EmployeeId, Salary};

use super::error_mapping::StoreFailure;
use super::models::{CompensationRow, NewCompensationRow};
use super::pool::DbPool;
use super::schema::compensations;

/// Diesel implementation of the compensation port.
#[derive(Clone)]
pub struct DieselCompensationRepository {
    pool: DbPool,
}

impl DieselCompensationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_port_error(failure: impl Into<StoreFailure>) -> CompensationRepositoryError {
    match failure.into() {
        StoreFailure::Connection(message) => CompensationRepositoryError::connection(message),
        StoreFailure::Query(message) => CompensationRepositoryError::query(message),
        StoreFailure::UniqueViolation => {
            CompensationRepositoryError::query("unexpected unique violation")
        }
    }
}

fn from_row(row: CompensationRow) -> Result<Compensation, CompensationRepositoryError> {
    let employee = EmployeeId::try_from(row.employee_id)
        .map_err(|err| CompensationRepositoryError::query(format!("stored employee id: {err}")))?;
    let salary = Salary::new(row.salary)
        .map_err(|err| CompensationRepositoryError::query(format!("stored salary: {err}")))?;
    Ok(Compensation::new(employee, salary, row.effective_date))
}

#[async_trait]
impl CompensationRepository for DieselCompensationRepository {
    async fn insert(&self, compensation: &Compensation) -> Result<(), CompensationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(to_port_error)?;

        diesel::insert_into(compensations::table)
            .values(NewCompensationRow {
                employee_id: compensation.employee().as_ref(),
                salary: compensation.salary().amount(),
                effective_date: compensation.effective_date(),
            })
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(to_port_error)
    }

    async fn list_for_employee(
        &self,
        employee: &EmployeeId,
    ) -> Result<Vec<Compensation>, CompensationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(to_port_error)?;

        let rows: Vec<CompensationRow> = compensations::table
            .filter(compensations::employee_id.eq(employee.as_ref()))
            .order(compensations::id.asc())
            .select(CompensationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(to_port_error)?;

        rows.into_iter().map(from_row).collect()
    }
}
