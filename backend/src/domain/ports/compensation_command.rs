//! Driving port for recording compensation.

use async_trait::async_trait;

use crate::domain::{Compensation, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompensationCommand: Send + Sync {
    /// Append a compensation record for an existing employee.
    async fn create_compensation(&self, compensation: Compensation) -> Result<Compensation, Error>;
}
