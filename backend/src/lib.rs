//! Organisation directory backend.
//!
//! Employee records, transitive reporting-structure resolution and an
//! append-only compensation history behind an actix-web REST API. The crate
//! is laid out hexagonally: [`domain`] owns the entities, services and ports,
//! [`inbound`] adapts HTTP onto the driving ports and [`outbound`] provides
//! in-memory and PostgreSQL repositories.

pub mod doc;
pub mod domain;
pub mod example_data;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
