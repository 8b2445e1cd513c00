use serde::{Deserialize, Serialize};

/// Error body shared by the auth gateway and the HR API: `{"message": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub credential: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: SessionUser,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAuthResponse {
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
    pub user: SessionUser,
}

/// Employee row as the HR API serializes it (snake_case throughout).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(default)]
    pub employee_id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department_id: i64,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub photograph_path: Option<String>,
}

/// Seat availability per department. The HR API mixes casings on this one:
/// `departmentId` is camelCase while `seats_left` stays snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentSeats {
    #[serde(rename = "departmentId")]
    pub department_id: i64,
    pub name: String,
    pub seats_left: i64,
}

/// Photograph payload read from a file input, ready for a multipart part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fields submitted when registering or updating an employee.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub department_id: i64,
    pub photograph: Option<PhotoUpload>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn check_auth_response_uses_camel_case_flag() {
        let parsed: CheckAuthResponse = serde_json::from_value(json!({
            "isAuthenticated": true,
            "user": { "username": "pat@corp-hr.example", "email": "pat@corp-hr.example" }
        }))
        .expect("parse");
        assert!(parsed.is_authenticated);
        assert_eq!(parsed.user.username, "pat@corp-hr.example");
    }

    #[test]
    fn department_seats_accepts_mixed_casing() {
        let parsed: DepartmentSeats = serde_json::from_value(json!({
            "departmentId": 3,
            "name": "Engineering",
            "seats_left": 2
        }))
        .expect("parse");
        assert_eq!(parsed.department_id, 3);
        assert_eq!(parsed.seats_left, 2);
    }

    #[test]
    fn employee_record_tolerates_missing_optional_fields() {
        let parsed: EmployeeRecord = serde_json::from_value(json!({
            "employee_id": 7,
            "first_name": "Mina",
            "last_name": "Park",
            "email": "mina@corp.example"
        }))
        .expect("parse");
        assert_eq!(parsed.employee_id, 7);
        assert!(parsed.department_name.is_none());
        assert!(parsed.photograph_path.is_none());
    }
}
