//! Outbound adapters implementing the domain's driven ports.
//!
//! - **memory**: process-local stores for development and tests
//! - **persistence**: PostgreSQL repositories using Diesel
//!
//! Adapters translate between domain types and infrastructure
//! representations and carry no business rules.

pub mod memory;
pub mod persistence;
