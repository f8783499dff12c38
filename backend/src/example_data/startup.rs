//! Startup seeding of the sample directory.

use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDraft, EmployeeId, EmployeeValidationError};
use crate::example_data::config::ExampleDataSettings;

/// Errors returned while seeding the directory.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    #[error("failed to read fixture at {path}: {source}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fixture at {path} is not valid JSON: {source}")]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("fixture contains an invalid employee id: {0}")]
    InvalidId(#[from] EmployeeValidationError),
    #[error("failed to store sample employee: {0}")]
    Repository(#[from] EmployeeRepositoryError),
}

/// Counts reported after a seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeedOutcome {
    pub inserted: usize,
    pub skipped: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedReference {
    employee_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedEmployee {
    employee_id: String,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    position: String,
    #[serde(default)]
    department: String,
    #[serde(default)]
    direct_reports: Vec<SeedReference>,
}

impl TryFrom<SeedEmployee> for Employee {
    type Error = EmployeeValidationError;

    fn try_from(value: SeedEmployee) -> Result<Self, Self::Error> {
        let direct_reports = value
            .direct_reports
            .into_iter()
            .map(|reference| EmployeeId::try_from(reference.employee_id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Employee::new(
            EmployeeId::try_from(value.employee_id)?,
            EmployeeDraft {
                first_name: value.first_name,
                last_name: value.last_name,
                position: value.position,
                department: value.department,
                direct_reports,
            },
        ))
    }
}

/// Parse a JSON array of employees in the public wire shape.
pub fn parse_fixture(path: &Path, contents: &str) -> Result<Vec<Employee>, StartupSeedingError> {
    let records: Vec<SeedEmployee> =
        serde_json::from_str(contents).map_err(|source| StartupSeedingError::FixtureParse {
            path: path.to_path_buf(),
            source,
        })?;
    records
        .into_iter()
        .map(|record| Employee::try_from(record).map_err(StartupSeedingError::from))
        .collect()
}

/// Insert every fixture employee that is not already stored.
pub async fn seed_employees<R>(
    repository: &R,
    employees: Vec<Employee>,
) -> Result<SeedOutcome, StartupSeedingError>
where
    R: EmployeeRepository + ?Sized,
{
    let mut outcome = SeedOutcome::default();
    for employee in employees {
        match repository.insert(&employee).await {
            Ok(()) => outcome.inserted += 1,
            Err(EmployeeRepositoryError::Duplicate { .. }) => outcome.skipped += 1,
            Err(other) => return Err(other.into()),
        }
    }
    Ok(outcome)
}

/// Seed the directory on startup when enabled.
///
/// Returns `None` when seeding is disabled.
pub async fn seed_example_data_on_startup<R>(
    settings: &ExampleDataSettings,
    repository: &R,
) -> Result<Option<SeedOutcome>, StartupSeedingError>
where
    R: EmployeeRepository + ?Sized,
{
    if !settings.enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let path = settings.fixture_path();
    let contents = read_fixture(&path)?;
    let employees = parse_fixture(&path, &contents)?;
    let outcome = seed_employees(repository, employees).await?;
    info!(
        path = %path.display(),
        inserted = outcome.inserted,
        skipped = outcome.skipped,
        "example data seeding applied"
    );
    Ok(Some(outcome))
}

fn read_fixture(path: &Path) -> Result<String, StartupSeedingError> {
    let read_error = |source: std::io::Error| StartupSeedingError::FixtureRead {
        path: path.to_path_buf(),
        source,
    };
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        read_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "fixture path must name a file",
        ))
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
    dir.read_to_string(Path::new(file_name)).map_err(read_error)
}
