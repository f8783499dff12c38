//! Employee directory service.
//!
//! Implements the employee driving ports on top of an [`EmployeeRepository`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    EmployeeCommand, EmployeeQuery, EmployeeRepository, EmployeeRepositoryError,
};
use crate::domain::reporting_structure::{self, ReportingStructure, TraversalLimits};
use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

pub(crate) fn map_repository_error(error: EmployeeRepositoryError) -> Error {
    match error {
        EmployeeRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("employee repository unavailable: {message}"))
        }
        EmployeeRepositoryError::Query { message } => {
            Error::internal(format!("employee repository error: {message}"))
        }
        EmployeeRepositoryError::Duplicate { employee_id } => {
            Error::conflict(format!("employee {employee_id} already exists"))
        }
    }
}

fn employee_not_found(id: &EmployeeId) -> Error {
    Error::not_found(format!("employee {id} not found"))
}

/// Employee service implementing [`EmployeeCommand`] and [`EmployeeQuery`].
pub struct EmployeeDirectoryService<R: ?Sized> {
    employee_repo: Arc<R>,
    limits: TraversalLimits,
}

impl<R: ?Sized> Clone for EmployeeDirectoryService<R> {
    fn clone(&self) -> Self {
        Self {
            employee_repo: Arc::clone(&self.employee_repo),
            limits: self.limits,
        }
    }
}

impl<R: ?Sized> EmployeeDirectoryService<R> {
    /// Create a service with the default traversal limits.
    pub fn new(employee_repo: Arc<R>) -> Self {
        Self {
            employee_repo,
            limits: TraversalLimits::default(),
        }
    }

    /// Override the budget applied to reporting structure queries.
    pub fn with_limits(mut self, limits: TraversalLimits) -> Self {
        self.limits = limits;
        self
    }
}

impl<R> EmployeeDirectoryService<R>
where
    R: EmployeeRepository + ?Sized,
{
    async fn require(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.employee_repo
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| employee_not_found(id))
    }
}

#[async_trait]
impl<R> EmployeeCommand for EmployeeDirectoryService<R>
where
    R: EmployeeRepository + ?Sized,
{
    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        let employee = Employee::new(EmployeeId::random(), draft);
        self.employee_repo
            .insert(&employee)
            .await
            .map_err(map_repository_error)?;
        info!(employee_id = %employee.employee_id(), "employee created");
        Ok(employee)
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        draft: EmployeeDraft,
    ) -> Result<Employee, Error> {
        self.require(&id).await?;
        let employee = Employee::new(id, draft);
        self.employee_repo
            .save(&employee)
            .await
            .map_err(map_repository_error)?;
        info!(employee_id = %employee.employee_id(), "employee updated");
        Ok(employee)
    }
}

#[async_trait]
impl<R> EmployeeQuery for EmployeeDirectoryService<R>
where
    R: EmployeeRepository + ?Sized,
{
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, Error> {
        self.require(id).await
    }

    async fn reporting_structure(&self, id: &EmployeeId) -> Result<ReportingStructure, Error> {
        reporting_structure::resolve(self.employee_repo.as_ref(), id, self.limits)
            .await
            .map_err(Error::from)
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
