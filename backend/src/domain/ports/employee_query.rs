//! Driving port for employee directory reads.
//!
//! Inbound adapters use this port to read employee records and their computed
//! reporting structure without touching the store directly.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, Error, ReportingStructure};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeQuery: Send + Sync {
    /// Fetch a single employee.
    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee, Error>;

    /// Count everyone reporting to `id`, directly or indirectly.
    ///
    /// Computed fresh on every call.
    async fn reporting_structure(&self, id: &EmployeeId) -> Result<ReportingStructure, Error>;
}
