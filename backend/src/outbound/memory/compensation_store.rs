//! In-memory `CompensationRepository`.
//!
//! Entries are kept in insertion order, matching the serial ordering of the
//! PostgreSQL adapter.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{CompensationRepository, CompensationRepositoryError};
use crate::domain::{Compensation, EmployeeId};

/// Append-only compensation log.
#[derive(Debug, Default)]
pub struct InMemoryCompensationRepository {
    entries: RwLock<Vec<Compensation>>,
}

impl InMemoryCompensationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompensationRepository for InMemoryCompensationRepository {
    async fn insert(&self, compensation: &Compensation) -> Result<(), CompensationRepositoryError> {
        self.entries.write().await.push(compensation.clone());
        Ok(())
    }

    async fn list_for_employee(
        &self,
        employee: &EmployeeId,
    ) -> Result<Vec<Compensation>, CompensationRepositoryError> {
        Ok(self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| entry.employee() == employee)
            .cloned()
            .collect())
    }
}
