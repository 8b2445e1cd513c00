use crate::api::{
    ApiClient, ApiError, DepartmentSeats, EmployeeForm, EmployeeRecord, PhotoUpload,
};

/// Local editing copy of an employee. The screen mutates this draft and only
/// syncs back once the server confirms a save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub department_id: i64,
    pub department_name: Option<String>,
    pub photograph_path: Option<String>,
}

impl EmployeeDraft {
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            title: record.title.clone(),
            department_id: record.department_id,
            department_name: record.department_name.clone(),
            photograph_path: record.photograph_path.clone(),
        }
    }

    /// Reconciles the draft against the record the server stored, so the
    /// screen reflects any server-side normalization.
    pub fn apply_record(&mut self, record: &EmployeeRecord) {
        *self = Self::from_record(record);
    }

    /// Switching departments updates both the id and the displayed name in
    /// one step.
    pub fn change_department(&mut self, departments: &[DepartmentSeats], department_id: i64) {
        self.department_id = department_id;
        self.department_name = departments
            .iter()
            .find(|d| d.department_id == department_id)
            .map(|d| d.name.clone());
    }

    pub fn to_form(&self, photograph: Option<PhotoUpload>) -> EmployeeForm {
        EmployeeForm {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            title: self.title.clone(),
            department_id: self.department_id,
            photograph,
        }
    }
}

/// Full departments can still be selected when they are the employee's
/// current one, otherwise the option is greyed out.
pub fn department_option_disabled(dept: &DepartmentSeats, current_id: i64) -> bool {
    dept.seats_left <= 0 && dept.department_id != current_id
}

pub async fn fetch_departments(api: &ApiClient) -> Result<Vec<DepartmentSeats>, ApiError> {
    api.get_department_seats().await.map_err(|e| {
        log::error!("department seats fetch failed: {}", e);
        ApiError::new("Failed to load department information")
    })
}

pub async fn fetch_employee(api: &ApiClient, id: i64) -> Result<EmployeeRecord, ApiError> {
    api.get_employee_by_id(id).await.map_err(|e| {
        log::error!("employee {} fetch failed: {}", id, e);
        ApiError::new("Failed to load employee data")
    })
}

pub async fn save_employee(
    api: &ApiClient,
    id: i64,
    draft: &EmployeeDraft,
    photograph: Option<PhotoUpload>,
) -> Result<EmployeeRecord, ApiError> {
    api.update_employee(id, &draft.to_form(photograph)).await
}

pub async fn delete_employee(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.delete_employee(id).await
}
