//! Driving port for compensation reads.

use async_trait::async_trait;

use crate::domain::{Compensation, EmployeeId, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompensationQuery: Send + Sync {
    /// The record currently in force for `employee`.
    async fn current_compensation(&self, employee: &EmployeeId) -> Result<Compensation, Error>;

    /// Every record for `employee`, oldest effective date first.
    async fn compensation_history(&self, employee: &EmployeeId)
    -> Result<Vec<Compensation>, Error>;
}
