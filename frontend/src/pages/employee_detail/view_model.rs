use leptos::*;

use crate::api::{ApiClient, ApiError, DepartmentSeats, EmployeeRecord};

use super::repository;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DetailData {
    pub departments: Vec<DepartmentSeats>,
    pub employee: EmployeeRecord,
    pub hr_origin: String,
}

/// Departments load before the employee so the select already knows seat
/// availability when the current department renders.
pub async fn fetch_detail(api: &ApiClient, id: i64) -> Result<DetailData, ApiError> {
    let departments = repository::fetch_departments(api).await?;
    let employee = repository::fetch_employee(api, id).await?;
    let hr_origin = api.hr_origin().await;
    Ok(DetailData {
        departments,
        employee,
        hr_origin,
    })
}

pub fn use_detail(id: Memo<Option<i64>>) -> Resource<Option<i64>, Result<DetailData, ApiError>> {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_resource(
        move || id.get(),
        move |id| {
            let api = api.clone();
            async move {
                let id = id.ok_or_else(|| ApiError::new("Failed to load employee data"))?;
                fetch_detail(&api, id).await
            }
        },
    )
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn detail_fetch_requires_departments_before_employee() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/department/seats-left");
            then.status(200).json_body(json!([
                { "departmentId": 2, "name": "People", "seats_left": 4 }
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/employee/get-by-id/7");
            then.status(200).json_body(json!({
                "employee_id": 7,
                "first_name": "Mina",
                "last_name": "Park",
                "email": "mina@corp.example",
                "title": "Recruiter",
                "department_id": 2,
                "department_name": "People"
            }));
        });

        let api = ApiClient::new_with_base_urls(server.url("/api"), server.url("/api"));
        let detail = fetch_detail(&api, 7).await.expect("detail");
        assert_eq!(detail.departments.len(), 1);
        assert_eq!(detail.employee.employee_id, 7);
    }

    #[tokio::test]
    async fn department_failure_short_circuits_the_employee_fetch() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/department/seats-left");
            then.status(500).json_body(json!({ "message": "boom" }));
        });
        let employee_mock = server.mock(|when, then| {
            when.method(GET).path("/api/employee/get-by-id/7");
            then.status(200).json_body(json!({}));
        });

        let api = ApiClient::new_with_base_urls(server.url("/api"), server.url("/api"));
        let error = fetch_detail(&api, 7).await.expect_err("must fail");
        assert_eq!(error.message, "Failed to load department information");
        assert_eq!(employee_mock.hits_async().await, 0);
    }
}
