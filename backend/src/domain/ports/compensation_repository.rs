//! Port for the append-only compensation store.

use async_trait::async_trait;

use crate::domain::{Compensation, EmployeeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by compensation repository adapters.
    pub enum CompensationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "compensation repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "compensation repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompensationRepository: Send + Sync {
    /// Append a record. Existing records for the same employee are untouched.
    async fn insert(&self, compensation: &Compensation) -> Result<(), CompensationRepositoryError>;

    /// All records for an employee in insertion order.
    async fn list_for_employee(
        &self,
        employee: &EmployeeId,
    ) -> Result<Vec<Compensation>, CompensationRepositoryError>;
}
