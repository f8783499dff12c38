//! Tests for the employee directory service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::MockEmployeeRepository;

fn id(raw: &str) -> EmployeeId {
    EmployeeId::new(raw).expect("fixture ids are valid")
}

#[fixture]
fn draft() -> EmployeeDraft {
    EmployeeDraft {
        first_name: "George".to_owned(),
        last_name: "Harrison".to_owned(),
        position: "Developer III".to_owned(),
        department: "Engineering".to_owned(),
        direct_reports: Vec::new(),
    }
}

#[rstest]
#[tokio::test]
async fn create_employee_assigns_fresh_identifier(draft: EmployeeDraft) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_insert().times(1).returning(|_| Ok(()));

    let service = EmployeeDirectoryService::new(Arc::new(repo));
    let created = service
        .create_employee(draft)
        .await
        .expect("create succeeds");

    assert!(uuid::Uuid::parse_str(created.employee_id().as_ref()).is_ok());
    assert_eq!(created.first_name(), "George");
    assert!(created.direct_reports().is_empty());
}

#[rstest]
#[tokio::test]
async fn create_employee_maps_duplicate_to_conflict(draft: EmployeeDraft) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_insert()
        .times(1)
        .returning(|employee| {
            Err(EmployeeRepositoryError::duplicate(
                employee.employee_id().as_ref(),
            ))
        });

    let service = EmployeeDirectoryService::new(Arc::new(repo));
    let error = service
        .create_employee(draft)
        .await
        .expect_err("duplicate insert fails");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn get_employee_returns_record(draft: EmployeeDraft) {
    let stored = Employee::new(id("george"), draft);
    let returned = stored.clone();
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(id("george")))
        .times(1)
        .return_once(move |_| Ok(Some(returned)));

    let service = EmployeeDirectoryService::new(Arc::new(repo));
    let found = service
        .get_employee(&id("george"))
        .await
        .expect("lookup succeeds");

    assert_eq!(found, stored);
}

#[rstest]
#[tokio::test]
async fn get_employee_missing_is_not_found() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let service = EmployeeDirectoryService::new(Arc::new(repo));
    let error = service
        .get_employee(&id("nobody"))
        .await
        .expect_err("missing employee");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert!(error.message().contains("nobody"));
}

#[rstest]
#[case(EmployeeRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(EmployeeRepositoryError::query("bad sql"), ErrorCode::InternalError)]
#[tokio::test]
async fn get_employee_maps_repository_errors(
    #[case] failure: EmployeeRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Err(failure));

    let service = EmployeeDirectoryService::new(Arc::new(repo));
    let error = service
        .get_employee(&id("a"))
        .await
        .expect_err("repository failure");

    assert_eq!(error.code(), expected);
}

#[rstest]
#[tokio::test]
async fn update_employee_overwrites_under_path_identifier(draft: EmployeeDraft) {
    let existing = Employee::new(id("george"), EmployeeDraft::default());
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id()
        .with(eq(id("george")))
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_save()
        .withf(|employee| {
            employee.employee_id().as_ref() == "george" && employee.position() == "Developer III"
        })
        .times(1)
        .returning(|_| Ok(()));

    let service = EmployeeDirectoryService::new(Arc::new(repo));
    let updated = service
        .update_employee(id("george"), draft)
        .await
        .expect("update succeeds");

    assert_eq!(updated.employee_id(), &id("george"));
    assert_eq!(updated.last_name(), "Harrison");
}

#[rstest]
#[tokio::test]
async fn update_employee_missing_is_not_found(draft: EmployeeDraft) {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));
    repo.expect_save().times(0);

    let service = EmployeeDirectoryService::new(Arc::new(repo));
    let error = service
        .update_employee(id("ghost"), draft)
        .await
        .expect_err("update of unknown employee fails");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn reporting_structure_uses_configured_limits() {
    let root = Employee::new(
        id("a"),
        EmployeeDraft {
            direct_reports: vec![id("b"), id("c")],
            ..EmployeeDraft::default()
        },
    );
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().returning(move |lookup| {
        Ok(match lookup.as_ref() {
            "a" => Some(root.clone()),
            other => Some(Employee::new(id(other), EmployeeDraft::default())),
        })
    });

    let service = EmployeeDirectoryService::new(Arc::new(repo)).with_limits(TraversalLimits {
        max_depth: 8,
        max_reports: 1,
    });
    let error = service
        .reporting_structure(&id("a"))
        .await
        .expect_err("budget of one report is exceeded");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn reporting_structure_of_unknown_employee_is_not_found() {
    let mut repo = MockEmployeeRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let service = EmployeeDirectoryService::new(Arc::new(repo));
    let error = service
        .reporting_structure(&id("does-not-exist"))
        .await
        .expect_err("unknown root");

    assert_eq!(error.code(), ErrorCode::NotFound);
}
