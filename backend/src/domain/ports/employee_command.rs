//! Driving port for employee directory mutations.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

/// Driving port for creating and replacing employee records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeCommand: Send + Sync {
    /// Store a new employee under a freshly minted identifier.
    async fn create_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Replace every attribute of an existing employee.
    ///
    /// Fails with `not_found` when `id` is unknown; `id` always wins over any
    /// identifier the caller supplied elsewhere.
    async fn update_employee(&self, id: EmployeeId, draft: EmployeeDraft)
    -> Result<Employee, Error>;
}
