//! Reporting structure resolution.
//!
//! Walks the management tree below one employee. Each employee contributes
//! the length of their `direct_reports` list plus the counts of everyone on
//! it, so a subordinate listed twice, or reachable through two managers, is
//! counted once per listing. Every reference is re-fetched from the
//! [`EmployeeRepository`] before its own reports are followed, since embedded
//! reference data may be stale.
//!
//! The walk uses an explicit stack, so deep hierarchies never grow the async
//! call stack. Subtree counts are memoised per resolution, which keeps each
//! identifier to a single fetch without changing the result. A reference back
//! onto the current path is reported as a cycle rather than followed.

use std::collections::{HashMap, HashSet};

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{EmployeeId, Error};

/// Computed reporting structure for one employee. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportingStructure {
    pub employee: EmployeeId,
    pub number_of_reports: u64,
}

/// Upper bounds applied to a single resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalLimits {
    /// Longest management chain followed below the root.
    pub max_depth: usize,
    /// Largest report count any subtree may reach before giving up.
    pub max_reports: usize,
}

impl TraversalLimits {
    pub const DEFAULT_MAX_DEPTH: usize = 256;
    pub const DEFAULT_MAX_REPORTS: usize = 100_000;
}

impl Default for TraversalLimits {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_reports: Self::DEFAULT_MAX_REPORTS,
        }
    }
}

/// Reasons a resolution can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportingStructureError {
    #[error("employee {employee_id} not found")]
    NotFound { employee_id: EmployeeId },
    #[error("employee {manager_id} lists unknown direct report {employee_id}")]
    DanglingReference {
        manager_id: EmployeeId,
        employee_id: EmployeeId,
    },
    #[error("employee {employee_id} appears in their own reporting chain")]
    Cycle { employee_id: EmployeeId },
    #[error("reporting chain is deeper than {max_depth} levels")]
    DepthExceeded { max_depth: usize },
    #[error("more than {max_reports} reports reachable")]
    ReportLimitExceeded { max_reports: usize },
    #[error(transparent)]
    Repository(#[from] EmployeeRepositoryError),
}

impl From<ReportingStructureError> for Error {
    fn from(value: ReportingStructureError) -> Self {
        let message = value.to_string();
        match value {
            ReportingStructureError::NotFound { .. } => Error::not_found(message),
            ReportingStructureError::DanglingReference {
                manager_id,
                employee_id,
            } => Error::not_found(message).with_details(json!({
                "code": "dangling_reference",
                "managerId": manager_id.as_ref(),
                "employeeId": employee_id.as_ref(),
            })),
            ReportingStructureError::Cycle { employee_id } => {
                Error::conflict(message).with_details(json!({
                    "code": "cyclic_structure",
                    "employeeId": employee_id.as_ref(),
                }))
            }
            ReportingStructureError::DepthExceeded { max_depth } => {
                Error::conflict(message).with_details(json!({
                    "code": "traversal_limit_exceeded",
                    "maxDepth": max_depth,
                }))
            }
            ReportingStructureError::ReportLimitExceeded { max_reports } => {
                Error::conflict(message).with_details(json!({
                    "code": "traversal_limit_exceeded",
                    "maxReports": max_reports,
                }))
            }
            ReportingStructureError::Repository(EmployeeRepositoryError::Connection {
                message,
            }) => Error::service_unavailable(format!("employee repository unavailable: {message}")),
            ReportingStructureError::Repository(error) => {
                Error::internal(format!("employee repository error: {error}"))
            }
        }
    }
}

/// One employee on the current management path with its unvisited reports.
struct Frame {
    employee_id: EmployeeId,
    reports: std::vec::IntoIter<EmployeeId>,
    /// Listed reports plus the completed subtrees below them so far.
    total: u64,
}

impl Frame {
    fn new(employee_id: EmployeeId, reports: Vec<EmployeeId>) -> Self {
        let total = reports.len() as u64;
        Self {
            employee_id,
            reports: reports.into_iter(),
            total,
        }
    }
}

fn within_budget(
    total: u64,
    root: &EmployeeId,
    limits: TraversalLimits,
) -> Result<(), ReportingStructureError> {
    if total > limits.max_reports as u64 {
        warn!(root = %root, max_reports = limits.max_reports, "report budget exhausted");
        return Err(ReportingStructureError::ReportLimitExceeded {
            max_reports: limits.max_reports,
        });
    }
    Ok(())
}

/// Count the reports of `root`: its direct reports plus, recursively, theirs.
///
/// Siblings are visited in stored order, so the reported dangling reference
/// is deterministic for a given directory state.
pub async fn resolve<R>(
    repository: &R,
    root: &EmployeeId,
    limits: TraversalLimits,
) -> Result<ReportingStructure, ReportingStructureError>
where
    R: EmployeeRepository + ?Sized,
{
    debug!(employee_id = %root, "resolving reporting structure");

    let root_record = repository
        .find_by_id(root)
        .await?
        .ok_or_else(|| ReportingStructureError::NotFound {
            employee_id: root.clone(),
        })?;

    let mut on_path: HashSet<EmployeeId> = HashSet::from([root.clone()]);
    let mut subtree_counts: HashMap<EmployeeId, u64> = HashMap::new();
    let (root_id, root_draft) = root_record.into_parts();
    let root_frame = Frame::new(root_id, root_draft.direct_reports);
    within_budget(root_frame.total, root, limits)?;
    let mut stack = vec![root_frame];
    let mut number_of_reports = 0;

    loop {
        let depth = stack.len();
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let Some(report_id) = frame.reports.next() else {
            let Some(done) = stack.pop() else {
                break;
            };
            on_path.remove(&done.employee_id);
            match stack.last_mut() {
                Some(parent) => {
                    parent.total = parent.total.saturating_add(done.total);
                    within_budget(parent.total, root, limits)?;
                }
                None => number_of_reports = done.total,
            }
            subtree_counts.insert(done.employee_id, done.total);
            continue;
        };

        if on_path.contains(&report_id) {
            warn!(employee_id = %report_id, root = %root, "cycle in reporting structure");
            return Err(ReportingStructureError::Cycle {
                employee_id: report_id,
            });
        }
        if let Some(known) = subtree_counts.get(&report_id) {
            frame.total = frame.total.saturating_add(*known);
            within_budget(frame.total, root, limits)?;
            continue;
        }
        if depth > limits.max_depth {
            warn!(root = %root, max_depth = limits.max_depth, "reporting chain too deep");
            return Err(ReportingStructureError::DepthExceeded {
                max_depth: limits.max_depth,
            });
        }

        let manager_id = frame.employee_id.clone();
        let Some(record) = repository.find_by_id(&report_id).await? else {
            warn!(
                manager_id = %manager_id,
                employee_id = %report_id,
                "dangling direct report reference"
            );
            return Err(ReportingStructureError::DanglingReference {
                manager_id,
                employee_id: report_id,
            });
        };

        on_path.insert(report_id.clone());
        let (_, draft) = record.into_parts();
        let child = Frame::new(report_id, draft.direct_reports);
        within_budget(child.total, root, limits)?;
        stack.push(child);
    }

    debug!(employee_id = %root, number_of_reports, "resolved reporting structure");
    Ok(ReportingStructure {
        employee: root.clone(),
        number_of_reports,
    })
}

#[cfg(test)]
#[path = "reporting_structure_tests.rs"]
mod tests;
