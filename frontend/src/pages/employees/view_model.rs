use leptos::*;

use crate::api::{ApiClient, ApiError};

use super::repository::{self, EmployeeCard};

pub fn use_employee_cards() -> Resource<(), Result<Vec<EmployeeCard>, ApiError>> {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    create_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { repository::fetch_employee_cards(&api).await }
        },
    )
}
