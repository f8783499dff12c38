//! In-process adapters for the repository ports.
//!
//! Used when no database is configured and by the HTTP and behaviour tests.
//! State lives behind Tokio read-write locks and is lost on restart.

mod compensation_store;
mod employee_store;

pub use compensation_store::InMemoryCompensationRepository;
pub use employee_store::InMemoryEmployeeRepository;
