//! PostgreSQL persistence adapters using Diesel, `diesel-async` and `bb8`.
//!
//! Adapters only translate between row structs and domain types. Row structs
//! (`models.rs`) and table definitions (`schema.rs`) stay private to this
//! module.
//!
//! ```ignore
//! use org_directory::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/directory")).await?;
//! let employees = DieselEmployeeRepository::new(pool);
//! ```

mod diesel_compensation_repository;
mod diesel_employee_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_compensation_repository::DieselCompensationRepository;
pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
