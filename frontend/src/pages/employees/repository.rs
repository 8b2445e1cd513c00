use crate::{
    api::{ApiClient, ApiError, EmployeeRecord},
    utils::photos::normalize_photo_url,
};

/// Row shape the directory grid renders.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EmployeeCard {
    pub id: i64,
    pub full_name: String,
    pub headline: String,
    pub email: String,
    pub photo_url: Option<String>,
}

pub fn card_from_record(record: &EmployeeRecord, hr_origin: &str) -> EmployeeCard {
    let department = record
        .department_name
        .clone()
        .unwrap_or_else(|| "Unassigned".into());
    EmployeeCard {
        id: record.employee_id,
        full_name: format!("{} {}", record.first_name, record.last_name),
        headline: format!("{} - {}", record.title, department),
        email: record.email.clone(),
        photo_url: record
            .photograph_path
            .as_deref()
            .and_then(|path| normalize_photo_url(path, hr_origin)),
    }
}

pub async fn fetch_employee_cards(api: &ApiClient) -> Result<Vec<EmployeeCard>, ApiError> {
    let origin = api.hr_origin().await;
    let rows = api.get_employees().await.map_err(|e| {
        log::error!("employee list fetch failed: {}", e);
        ApiError::new("Failed to load employees")
    })?;
    Ok(rows
        .iter()
        .map(|record| card_from_record(record, &origin))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::sample_employee;

    #[test]
    fn card_carries_name_headline_and_normalized_photo() {
        let card = card_from_record(&sample_employee(), "http://localhost:8000");
        assert_eq!(card.full_name, "Mina Park");
        assert_eq!(card.headline, "Recruiter - People");
        assert_eq!(card.email, "mina@corp.example");
        assert_eq!(
            card.photo_url.as_deref(),
            Some("http://localhost:8000/uploads/mina.png")
        );
    }

    #[test]
    fn card_falls_back_when_department_and_photo_are_missing() {
        let mut record = sample_employee();
        record.department_name = None;
        record.photograph_path = None;
        let card = card_from_record(&record, "http://localhost:8000");
        assert_eq!(card.headline, "Recruiter - Unassigned");
        assert!(card.photo_url.is_none());
    }
}
