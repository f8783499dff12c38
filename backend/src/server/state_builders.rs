//! Builders wiring repository adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;

use org_directory::domain::ports::{CompensationRepository, EmployeeRepository};
use org_directory::domain::{CompensationService, EmployeeDirectoryService, TraversalLimits};
use org_directory::inbound::http::state::HttpState;
use org_directory::outbound::memory::{InMemoryCompensationRepository, InMemoryEmployeeRepository};
use org_directory::outbound::persistence::{
    DbPool, DieselCompensationRepository, DieselEmployeeRepository,
};

/// Trait-object repositories selected at startup.
pub type DynRepositories = Repositories<dyn EmployeeRepository, dyn CompensationRepository>;

/// Repository pair backing both services.
///
/// The employee store is shared between the two services and startup seeding.
pub struct Repositories<E: ?Sized, C: ?Sized> {
    pub employees: Arc<E>,
    pub compensations: Arc<C>,
}

/// Diesel adapters when a pool is configured, otherwise in-memory stores.
pub fn build_repositories(pool: Option<&DbPool>) -> DynRepositories {
    match pool {
        Some(pool) => Repositories {
            employees: Arc::new(DieselEmployeeRepository::new(pool.clone())),
            compensations: Arc::new(DieselCompensationRepository::new(pool.clone())),
        },
        None => Repositories {
            employees: Arc::new(InMemoryEmployeeRepository::new()),
            compensations: Arc::new(InMemoryCompensationRepository::new()),
        },
    }
}

/// Wire both services over the chosen repositories.
pub(crate) fn build_http_state<E, C>(
    repositories: Repositories<E, C>,
    limits: TraversalLimits,
) -> web::Data<HttpState>
where
    E: EmployeeRepository + ?Sized + 'static,
    C: CompensationRepository + ?Sized + 'static,
{
    let Repositories {
        employees,
        compensations,
    } = repositories;
    let employee_service =
        Arc::new(EmployeeDirectoryService::new(employees.clone()).with_limits(limits));
    let compensation_service = Arc::new(CompensationService::new(employees, compensations));
    web::Data::new(HttpState::from_services(
        employee_service,
        compensation_service,
    ))
}
