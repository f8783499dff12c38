//! Shared world and steps for the directory behaviour tests.
//!
//! Each request runs the full actix app in-process on a short-lived actix
//! system over in-memory repositories held by the world.

use std::future::Future;
use std::sync::Arc;

use actix_web::http::Method;
use actix_web::{App, test, web};
use org_directory::Trace;
use org_directory::domain::ports::EmployeeRepository;
use org_directory::domain::{
    CompensationService, Employee, EmployeeDirectoryService, EmployeeDraft, EmployeeId,
    TRACE_ID_HEADER, TraversalLimits,
};
use org_directory::inbound::http::configure;
use org_directory::inbound::http::state::HttpState;
use org_directory::outbound::memory::{InMemoryCompensationRepository, InMemoryEmployeeRepository};
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, then};
use serde_json::Value;

#[derive(Default, ScenarioState)]
pub struct DirectoryWorld {
    pub employees: Slot<Arc<InMemoryEmployeeRepository>>,
    pub state: Slot<web::Data<HttpState>>,
    pub last_status: Slot<u16>,
    pub last_body: Slot<Value>,
    pub last_trace_id: Slot<String>,
    pub created_id: Slot<String>,
}

/// Drive a future to completion on a fresh actix system.
pub fn block_on<F: Future>(future: F) -> F::Output {
    actix_rt::System::new().block_on(future)
}

pub fn unquote(raw: &str) -> &str {
    raw.trim_matches('"')
}

impl DirectoryWorld {
    pub fn reset(&self) {
        let employees = Arc::new(InMemoryEmployeeRepository::new());
        let compensations = Arc::new(InMemoryCompensationRepository::new());
        let employee_service = Arc::new(
            EmployeeDirectoryService::new(employees.clone())
                .with_limits(TraversalLimits::default()),
        );
        let compensation_service =
            Arc::new(CompensationService::new(employees.clone(), compensations));
        self.state.set(web::Data::new(HttpState::from_services(
            employee_service,
            compensation_service,
        )));
        self.employees.set(employees);
    }

    pub fn employee_repository(&self) -> Arc<InMemoryEmployeeRepository> {
        self.employees.get().expect("directory initialised")
    }

    pub fn store(&self, raw_id: &str, reports: Vec<EmployeeId>) {
        let employee = Employee::new(
            EmployeeId::new(raw_id).expect("valid employee id"),
            EmployeeDraft {
                first_name: raw_id.to_owned(),
                direct_reports: reports,
                ..EmployeeDraft::default()
            },
        );
        let repository = self.employee_repository();
        block_on(async move { repository.insert(&employee).await }).expect("store employee");
    }

    pub fn send(&self, method: Method, path: &str, payload: Option<Value>) {
        let state = self.state.get().expect("directory initialised");
        let uri = path.to_owned();
        let (status, trace_id, body) = block_on(async move {
            let app = test::init_service(
                App::new()
                    .app_data(state)
                    .wrap(Trace)
                    .configure(configure),
            )
            .await;
            let mut request = test::TestRequest::default().method(method).uri(&uri);
            if let Some(payload) = payload {
                request = request.set_json(payload);
            }
            let response = test::call_service(&app, request.to_request()).await;
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = test::read_body(response).await;
            let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, trace_id, body)
        });
        self.last_status.set(status);
        self.last_body.set(body);
        if let Some(trace_id) = trace_id {
            self.last_trace_id.set(trace_id);
        }
    }

    pub fn body(&self) -> Value {
        self.last_body.get().expect("response body recorded")
    }
}

#[given("an empty employee directory")]
fn an_empty_employee_directory(world: &DirectoryWorld) {
    world.reset();
}

#[given("employee {id} has no direct reports")]
fn employee_has_no_direct_reports(world: &DirectoryWorld, id: String) {
    world.store(unquote(&id), Vec::new());
}

#[given("employee {id} manages {reports}")]
fn employee_manages(world: &DirectoryWorld, id: String, reports: String) {
    let reports = unquote(&reports)
        .split(',')
        .map(|report| EmployeeId::new(report.trim()).expect("valid report id"))
        .collect();
    world.store(unquote(&id), reports);
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &DirectoryWorld, status: u16) {
    let actual = world.last_status.get().expect("response recorded");
    assert_eq!(actual, status, "body: {}", world.body());
}

#[then("the error code is {code}")]
fn the_error_code_is(world: &DirectoryWorld, code: String) {
    let body = world.body();
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some(unquote(&code))
    );
}

#[then("the error detail code is {code}")]
fn the_error_detail_code_is(world: &DirectoryWorld, code: String) {
    let body = world.body();
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some(unquote(&code))
    );
}
