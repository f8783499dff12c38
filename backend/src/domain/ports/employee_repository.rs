//! Port for the authoritative employee directory store.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "employee repository query failed: {message}",
        /// An insert collided with an existing identifier.
        Duplicate { employee_id: String } =>
            "employee {employee_id} already exists",
    }
}

/// Single-record access to the employee directory.
///
/// Every call is an atomic, strongly consistent operation on one record.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Fetch the authoritative record for `id`.
    async fn find_by_id(&self, id: &EmployeeId)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Persist a new record. Fails with `Duplicate` if the identifier is taken.
    async fn insert(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError>;

    /// Overwrite the full record keyed by its identifier.
    async fn save(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError>;
}
