//! Domain layer: entities, value objects, services and ports.
//!
//! Nothing in this module depends on HTTP or persistence frameworks. Inbound
//! and outbound adapters reach it through the traits in [`ports`].

pub mod compensation;
pub mod compensation_service;
pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;
pub mod reporting_structure;
pub mod trace_id;

pub use self::compensation::{Compensation, Salary, SalaryValidationError};
pub use self::compensation_service::CompensationService;
pub use self::employee::{Employee, EmployeeDraft, EmployeeId, EmployeeValidationError};
pub use self::employee_service::EmployeeDirectoryService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::reporting_structure::{ReportingStructure, ReportingStructureError, TraversalLimits};
pub use self::trace_id::TraceId;
