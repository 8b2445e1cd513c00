use httpmock::prelude::*;
use serde_json::json;

use crate::api::{ApiClient, EmployeeForm, PhotoUpload};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_urls(server.url("/api"), server.url("/api"))
}

#[tokio::test]
async fn login_parses_session_user() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/login")
            .json_body(json!({ "credential": "token-123" }));
        then.status(200).json_body(json!({
            "message": "Login successful",
            "user": { "username": "pat@corp-hr.example", "email": "pat@corp-hr.example" }
        }));
    });

    let response = client_for(&server).login("token-123").await.expect("login");
    assert_eq!(response.message, "Login successful");
    assert_eq!(response.user.username, "pat@corp-hr.example");
}

#[tokio::test]
async fn login_surfaces_gateway_message_on_failure() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/login");
        then.status(401)
            .json_body(json!({ "message": "Invalid credentials" }));
    });

    let error = client_for(&server)
        .login("bogus")
        .await
        .expect_err("rejected");
    assert_eq!(error.message, "Invalid credentials");
}

#[tokio::test]
async fn check_auth_maps_missing_session_to_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/check-auth");
        then.status(401).json_body(json!({ "message": "Unauthorized" }));
    });

    let error = client_for(&server)
        .check_auth()
        .await
        .expect_err("unauthenticated");
    assert_eq!(error.message, "Unauthorized");
}

#[tokio::test]
async fn check_auth_parses_session_claims() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/check-auth");
        then.status(200).json_body(json!({
            "isAuthenticated": true,
            "user": {
                "username": "pat@corp-hr.example",
                "email": "pat@corp-hr.example",
                "iat": 1_756_000_000i64,
                "exp": 1_756_003_600i64
            }
        }));
    });

    let response = client_for(&server).check_auth().await.expect("check-auth");
    assert!(response.is_authenticated);
    assert_eq!(response.user.email.as_deref(), Some("pat@corp-hr.example"));
}

#[tokio::test]
async fn get_employees_parses_rows() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/employee/get");
        then.status(200).json_body(json!([
            {
                "employee_id": 1,
                "first_name": "Mina",
                "last_name": "Park",
                "email": "mina@corp.example",
                "title": "Recruiter",
                "department_id": 2,
                "department_name": "People",
                "photograph_path": "/uploads/mina.png"
            },
            {
                "employee_id": 2,
                "first_name": "Joel",
                "last_name": "Reyes",
                "email": "joel@corp.example",
                "title": "Engineer",
                "department_id": 1,
                "department_name": null,
                "photograph_path": null
            }
        ]));
    });

    let employees = client_for(&server).get_employees().await.expect("list");
    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].department_name.as_deref(), Some("People"));
    assert!(employees[1].photograph_path.is_none());
}

#[tokio::test]
async fn department_seats_parse_mixed_casing() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/department/seats-left");
        then.status(200).json_body(json!([
            { "departmentId": 1, "name": "Engineering", "seats_left": 0 },
            { "departmentId": 2, "name": "People", "seats_left": 4 }
        ]));
    });

    let seats = client_for(&server)
        .get_department_seats()
        .await
        .expect("seats");
    assert_eq!(seats[0].seats_left, 0);
    assert_eq!(seats[1].department_id, 2);
}

#[tokio::test]
async fn update_employee_returns_stored_record() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(PUT).path("/api/employee/update/7");
        then.status(200).json_body(json!({
            "employee_id": 7,
            "first_name": "Mina",
            "last_name": "Park",
            "email": "mina.park@corp.example",
            "title": "Senior Recruiter",
            "department_id": 2,
            "department_name": "People",
            "photograph_path": "/uploads/mina.png"
        }));
    });

    let form = EmployeeForm {
        first_name: "Mina".into(),
        last_name: "Park".into(),
        email: "mina.park@corp.example".into(),
        title: "Senior Recruiter".into(),
        department_id: 2,
        photograph: Some(PhotoUpload {
            file_name: "mina.png".into(),
            content_type: "image/png".into(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }),
    };

    let updated = client_for(&server)
        .update_employee(7, &form)
        .await
        .expect("update");
    assert_eq!(updated.title, "Senior Recruiter");
    assert_eq!(updated.department_name.as_deref(), Some("People"));
}

#[tokio::test]
async fn delete_employee_surfaces_error_body() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(DELETE).path("/api/employee/delete/99");
        then.status(404)
            .json_body(json!({ "message": "Employee not found" }));
    });

    let error = client_for(&server)
        .delete_employee(99)
        .await
        .expect_err("missing employee");
    assert_eq!(error.message, "Employee not found");
}

#[tokio::test]
async fn add_employee_posts_multipart_form() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/employee/add")
            .header_exists("content-type");
        then.status(200).json_body(json!({
            "employee_id": 12,
            "first_name": "Ada",
            "last_name": "Lane",
            "email": "ada@corp.example",
            "title": "Analyst",
            "department_id": 2,
            "department_name": "People"
        }));
    });

    let form = EmployeeForm {
        first_name: "Ada".into(),
        last_name: "Lane".into(),
        email: "ada@corp.example".into(),
        title: "Analyst".into(),
        department_id: 2,
        photograph: None,
    };

    let created = client_for(&server).add_employee(&form).await.expect("add");
    assert_eq!(created.employee_id, 12);
    mock.assert_async().await;
}
