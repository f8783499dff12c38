//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle through `web::Data` and only see driving
//! ports, so they can be exercised without any store.

use std::sync::Arc;

use crate::domain::ports::{CompensationCommand, CompensationQuery, EmployeeCommand, EmployeeQuery};

/// Port implementations used by the HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeCommand>,
    pub employees_query: Arc<dyn EmployeeQuery>,
    pub compensation: Arc<dyn CompensationCommand>,
    pub compensation_query: Arc<dyn CompensationQuery>,
}

impl HttpState {
    pub fn new(
        employees: Arc<dyn EmployeeCommand>,
        employees_query: Arc<dyn EmployeeQuery>,
        compensation: Arc<dyn CompensationCommand>,
        compensation_query: Arc<dyn CompensationQuery>,
    ) -> Self {
        Self {
            employees,
            employees_query,
            compensation,
            compensation_query,
        }
    }

    /// Wire one service value into both halves of each port pair.
    pub fn from_services<E, C>(employee_service: Arc<E>, compensation_service: Arc<C>) -> Self
    where
        E: EmployeeCommand + EmployeeQuery + 'static,
        C: CompensationCommand + CompensationQuery + 'static,
    {
        Self {
            employees: employee_service.clone(),
            employees_query: employee_service,
            compensation: compensation_service.clone(),
            compensation_query: compensation_service,
        }
    }
}
