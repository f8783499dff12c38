//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; adapters convert them to domain
//! types at the boundary.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{compensations, employees};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub employee_id: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub department: String,
    pub direct_reports: Vec<String>,
}

/// Insertable and changeset form of an employee record.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = employees, primary_key(employee_id))]
pub(crate) struct EmployeeRecord<'a> {
    pub employee_id: &'a str,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub position: &'a str,
    pub department: &'a str,
    pub direct_reports: Vec<String>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = compensations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CompensationRow {
    pub employee_id: String,
    pub salary: f64,
    pub effective_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = compensations)]
pub(crate) struct NewCompensationRow<'a> {
    pub employee_id: &'a str,
    pub salary: f64,
    pub effective_date: DateTime<Utc>,
}
