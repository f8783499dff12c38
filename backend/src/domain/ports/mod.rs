//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports (`*Command`, `*Query`) are implemented by domain services and called
//! by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod compensation_command;
mod compensation_query;
mod compensation_repository;
mod employee_command;
mod employee_query;
mod employee_repository;

pub use compensation_command::CompensationCommand;
#[cfg(test)]
pub use compensation_command::MockCompensationCommand;
pub use compensation_query::CompensationQuery;
#[cfg(test)]
pub use compensation_query::MockCompensationQuery;
#[cfg(test)]
pub use compensation_repository::MockCompensationRepository;
pub use compensation_repository::{CompensationRepository, CompensationRepositoryError};
pub use employee_command::EmployeeCommand;
#[cfg(test)]
pub use employee_command::MockEmployeeCommand;
pub use employee_query::EmployeeQuery;
#[cfg(test)]
pub use employee_query::MockEmployeeQuery;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
