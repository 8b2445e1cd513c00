use crate::api::{
    ApiClient, ApiError, DepartmentSeats, EmployeeForm, EmployeeRecord, PhotoUpload,
};

use super::utils::{self, RegisterForm};

pub const REGISTER_FALLBACK_MESSAGE: &str = "Failed to register employee. Please try again.";

/// Validates locally, then submits the multipart registration. Transport
/// failures get the generic fallback message; anything the HR API said is
/// surfaced verbatim.
pub async fn submit(
    api: &ApiClient,
    form: &RegisterForm,
    departments: &[DepartmentSeats],
    photograph: Option<PhotoUpload>,
) -> Result<EmployeeRecord, ApiError> {
    let department_id = utils::validate(form, departments).map_err(ApiError::new)?;
    let payload = EmployeeForm {
        first_name: form.first_name.trim().to_string(),
        last_name: form.last_name.trim().to_string(),
        email: form.email.trim().to_string(),
        title: form.title.trim().to_string(),
        department_id,
        photograph,
    };
    api.add_employee(&payload).await.map_err(|e| {
        if e.message.starts_with("Request failed") || e.message.starts_with("Failed to parse") {
            ApiError::new(REGISTER_FALLBACK_MESSAGE)
        } else {
            e
        }
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::sample_departments;
    use httpmock::prelude::*;
    use serde_json::json;

    fn complete_form() -> RegisterForm {
        RegisterForm {
            first_name: "Ada".into(),
            last_name: "Lane".into(),
            email: "ada@corp.example".into(),
            title: "Analyst".into(),
            department_id: Some(2),
        }
    }

    #[tokio::test]
    async fn submit_registers_a_valid_employee() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/employee/add");
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

        let api = ApiClient::new_with_base_urls(server.url("/api"), server.url("/api"));
        let created = submit(&api, &complete_form(), &sample_departments(), None)
            .await
            .expect("register");
        assert_eq!(created.employee_id, 12);
    }

    #[tokio::test]
    async fn submit_rejects_invalid_form_without_a_request() {
        let server = MockServer::start_async().await;
        let add_mock = server.mock(|when, then| {
            when.method(POST).path("/api/employee/add");
            then.status(200).json_body(json!({}));
        });

        let api = ApiClient::new_with_base_urls(server.url("/api"), server.url("/api"));
        let mut form = complete_form();
        form.email = "broken".into();

        let error = submit(&api, &form, &sample_departments(), None)
            .await
            .expect_err("invalid form");
        assert_eq!(error.message, "Valid email is required");
        assert_eq!(add_mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn submit_keeps_the_server_message_on_api_rejection() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/employee/add");
            then.status(409)
                .json_body(json!({ "message": "Email already registered" }));
        });

        let api = ApiClient::new_with_base_urls(server.url("/api"), server.url("/api"));
        let error = submit(&api, &complete_form(), &sample_departments(), None)
            .await
            .expect_err("conflict");
        assert_eq!(error.message, "Email already registered");
    }
}
