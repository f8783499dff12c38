//! In-memory `EmployeeRepository` keyed by identifier.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId};

/// Employee directory held in a hash map keyed by identifier.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: RwLock<HashMap<EmployeeId, Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored employees.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(
        &self,
        id: &EmployeeId,
    ) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn insert(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut records = self.records.write().await;
        if records.contains_key(employee.employee_id()) {
            return Err(EmployeeRepositoryError::duplicate(
                employee.employee_id().as_ref(),
            ));
        }
        records.insert(employee.employee_id().clone(), employee.clone());
        Ok(())
    }

    async fn save(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        self.records
            .write()
            .await
            .insert(employee.employee_id().clone(), employee.clone());
        Ok(())
    }
}
