//! Compensation records.
//!
//! Records are append-only: a new entry for an employee sits alongside the
//! earlier ones and is selected by its effective date.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::EmployeeId;

/// Validation errors raised for salary amounts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SalaryValidationError {
    Negative { value: f64 },
    NotFinite,
}

impl fmt::Display for SalaryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { value } => write!(f, "salary must not be negative (got {value})"),
            Self::NotFinite => write!(f, "salary must be a finite number"),
        }
    }
}

impl std::error::Error for SalaryValidationError {}

/// Non-negative, finite salary amount.
///
/// # Examples
/// ```
/// use org_directory::domain::Salary;
///
/// assert_eq!(Salary::new(120_000.0).map(Salary::amount), Ok(120_000.0));
/// assert!(Salary::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Salary(f64);

impl Salary {
    pub fn new(amount: f64) -> Result<Self, SalaryValidationError> {
        if !amount.is_finite() {
            return Err(SalaryValidationError::NotFinite);
        }
        if amount < 0.0 {
            return Err(SalaryValidationError::Negative { value: amount });
        }
        Ok(Self(amount))
    }

    pub fn amount(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Salary {
    type Error = SalaryValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Salary taking effect for an employee from a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct Compensation {
    employee: EmployeeId,
    salary: Salary,
    effective_date: DateTime<Utc>,
}

impl Compensation {
    pub fn new(employee: EmployeeId, salary: Salary, effective_date: DateTime<Utc>) -> Self {
        Self {
            employee,
            salary,
            effective_date,
        }
    }

    pub fn employee(&self) -> &EmployeeId {
        &self.employee
    }

    pub fn salary(&self) -> Salary {
        self.salary
    }

    pub fn effective_date(&self) -> DateTime<Utc> {
        self.effective_date
    }
}

/// Pick the record in force from a history held in insertion order.
///
/// The latest effective date wins; among equal dates the record inserted last
/// wins.
pub fn current_of(history: &[Compensation]) -> Option<&Compensation> {
    history.iter().fold(None, |best, candidate| match best {
        Some(current) if current.effective_date > candidate.effective_date => Some(current),
        _ => Some(candidate),
    })
}

/// Order a history by effective date, keeping insertion order for ties.
pub fn chronological(mut history: Vec<Compensation>) -> Vec<Compensation> {
    history.sort_by_key(Compensation::effective_date);
    history
}
