//! Compensation service.
//!
//! Gates compensation writes on the referenced employee existing, then appends
//! without touching earlier records.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::compensation::{chronological, current_of};
use crate::domain::employee_service::map_repository_error as map_employee_error;
use crate::domain::ports::{
    CompensationCommand, CompensationQuery, CompensationRepository, CompensationRepositoryError,
    EmployeeRepository,
};
use crate::domain::{Compensation, EmployeeId, Error};

fn map_repository_error(error: CompensationRepositoryError) -> Error {
    match error {
        CompensationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("compensation repository unavailable: {message}"))
        }
        CompensationRepositoryError::Query { message } => {
            Error::internal(format!("compensation repository error: {message}"))
        }
    }
}

/// Compensation service implementing [`CompensationCommand`] and
/// [`CompensationQuery`].
pub struct CompensationService<E: ?Sized, C: ?Sized> {
    employee_repo: Arc<E>,
    compensation_repo: Arc<C>,
}

impl<E: ?Sized, C: ?Sized> Clone for CompensationService<E, C> {
    fn clone(&self) -> Self {
        Self {
            employee_repo: Arc::clone(&self.employee_repo),
            compensation_repo: Arc::clone(&self.compensation_repo),
        }
    }
}

impl<E: ?Sized, C: ?Sized> CompensationService<E, C> {
    pub fn new(employee_repo: Arc<E>, compensation_repo: Arc<C>) -> Self {
        Self {
            employee_repo,
            compensation_repo,
        }
    }
}

impl<E, C> CompensationService<E, C>
where
    E: ?Sized,
    C: CompensationRepository + ?Sized,
{
    async fn history(&self, employee: &EmployeeId) -> Result<Vec<Compensation>, Error> {
        let history = self
            .compensation_repo
            .list_for_employee(employee)
            .await
            .map_err(map_repository_error)?;
        if history.is_empty() {
            return Err(Error::not_found(format!(
                "no compensation recorded for employee {employee}"
            )));
        }
        Ok(history)
    }
}

#[async_trait]
impl<E, C> CompensationCommand for CompensationService<E, C>
where
    E: EmployeeRepository + ?Sized,
    C: CompensationRepository + ?Sized,
{
    async fn create_compensation(&self, compensation: Compensation) -> Result<Compensation, Error> {
        let employee = compensation.employee();
        let exists = self
            .employee_repo
            .find_by_id(employee)
            .await
            .map_err(map_employee_error)?
            .is_some();
        if !exists {
            return Err(Error::not_found(format!("employee {employee} not found")));
        }

        self.compensation_repo
            .insert(&compensation)
            .await
            .map_err(map_repository_error)?;
        info!(
            employee_id = %employee,
            effective_date = %compensation.effective_date(),
            "compensation recorded"
        );
        Ok(compensation)
    }
}

#[async_trait]
impl<E, C> CompensationQuery for CompensationService<E, C>
where
    E: EmployeeRepository + ?Sized,
    C: CompensationRepository + ?Sized,
{
    async fn current_compensation(&self, employee: &EmployeeId) -> Result<Compensation, Error> {
        let history = self.history(employee).await?;
        current_of(&history).cloned().ok_or_else(|| {
            Error::not_found(format!("no compensation recorded for employee {employee}"))
        })
    }

    async fn compensation_history(
        &self,
        employee: &EmployeeId,
    ) -> Result<Vec<Compensation>, Error> {
        self.history(employee).await.map(chronological)
    }
}

#[cfg(test)]
#[path = "compensation_service_tests.rs"]
mod tests;
