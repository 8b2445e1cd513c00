use reqwest::multipart::{Form, Part};

use crate::api::{
    client::ApiClient,
    types::{ApiError, EmployeeForm, EmployeeRecord},
};

/// The HR API takes employee writes as multipart form data. Field names match
/// its contract exactly; note `departmentId` against the otherwise snake_case
/// fields.
fn employee_multipart(form: &EmployeeForm) -> Result<Form, ApiError> {
    let mut parts = Form::new()
        .text("first_name", form.first_name.clone())
        .text("last_name", form.last_name.clone())
        .text("email", form.email.clone())
        .text("title", form.title.clone())
        .text("departmentId", form.department_id.to_string());

    if let Some(photo) = &form.photograph {
        let part = Part::bytes(photo.bytes.clone())
            .file_name(photo.file_name.clone())
            .mime_str(&photo.content_type)
            .map_err(|e| ApiError::new(format!("Invalid photograph type: {}", e)))?;
        parts = parts.part("photograph", part);
    }

    Ok(parts)
}

impl ApiClient {
    pub async fn get_employees(&self) -> Result<Vec<EmployeeRecord>, ApiError> {
        let base_url = self.hr_base_url().await;
        let response =
            Self::send(self.http().get(format!("{}/employee/get", base_url))).await?;
        Self::parse_json(response).await
    }

    pub async fn get_employee_by_id(&self, employee_id: i64) -> Result<EmployeeRecord, ApiError> {
        let base_url = self.hr_base_url().await;
        let response = Self::send(
            self.http()
                .get(format!("{}/employee/get-by-id/{}", base_url, employee_id)),
        )
        .await?;
        Self::parse_json(response).await
    }

    pub async fn add_employee(&self, form: &EmployeeForm) -> Result<EmployeeRecord, ApiError> {
        let base_url = self.hr_base_url().await;
        let response = Self::send(
            self.http()
                .post(format!("{}/employee/add", base_url))
                .multipart(employee_multipart(form)?),
        )
        .await?;
        Self::parse_json(response).await
    }

    /// Returns the record as the server stored it so callers can reconcile
    /// their local draft against it.
    pub async fn update_employee(
        &self,
        employee_id: i64,
        form: &EmployeeForm,
    ) -> Result<EmployeeRecord, ApiError> {
        let base_url = self.hr_base_url().await;
        let response = Self::send(
            self.http()
                .put(format!("{}/employee/update/{}", base_url, employee_id))
                .multipart(employee_multipart(form)?),
        )
        .await?;
        Self::parse_json(response).await
    }

    pub async fn delete_employee(&self, employee_id: i64) -> Result<(), ApiError> {
        let base_url = self.hr_base_url().await;
        let response = Self::send(
            self.http()
                .delete(format!("{}/employee/delete/{}", base_url, employee_id)),
        )
        .await?;
        Self::expect_success(response).await
    }
}
