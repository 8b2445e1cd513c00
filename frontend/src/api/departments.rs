use crate::api::{
    client::ApiClient,
    types::{ApiError, DepartmentSeats},
};

impl ApiClient {
    pub async fn get_department_seats(&self) -> Result<Vec<DepartmentSeats>, ApiError> {
        let base_url = self.hr_base_url().await;
        let response =
            Self::send(self.http().get(format!("{}/department/seats-left", base_url))).await?;
        Self::parse_json(response).await
    }
}
