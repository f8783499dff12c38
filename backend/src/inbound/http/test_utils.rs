//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::{CompensationService, EmployeeDirectoryService, TraversalLimits};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryCompensationRepository, InMemoryEmployeeRepository};

/// In-memory stores behind a fully wired [`HttpState`].
pub struct MemoryBackedState {
    pub employees: Arc<InMemoryEmployeeRepository>,
    pub compensations: Arc<InMemoryCompensationRepository>,
    pub state: web::Data<HttpState>,
}

/// Wire the real services over empty in-memory stores.
pub fn memory_backed_state(limits: TraversalLimits) -> MemoryBackedState {
    let employees = Arc::new(InMemoryEmployeeRepository::default());
    let compensations = Arc::new(InMemoryCompensationRepository::default());
    let employee_service =
        Arc::new(EmployeeDirectoryService::new(employees.clone()).with_limits(limits));
    let compensation_service = Arc::new(CompensationService::new(
        employees.clone(),
        compensations.clone(),
    ));
    MemoryBackedState {
        employees,
        compensations,
        state: web::Data::new(HttpState::from_services(
            employee_service,
            compensation_service,
        )),
    }
}
