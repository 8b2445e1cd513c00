use serde::{Deserialize, Serialize};

use crate::utils::jwt::SessionClaims;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub credential: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
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
    pub user: SessionClaims,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_auth_response_uses_camel_case_flag() {
        let response = CheckAuthResponse {
            is_authenticated: true,
            user: SessionClaims::new("pat@corp-hr.example".into(), None, 1),
        };
        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(json["isAuthenticated"], true);
        assert_eq!(json["user"]["username"], "pat@corp-hr.example");
    }

    #[test]
    fn login_request_tolerates_missing_credential() {
        let request: LoginRequest = serde_json::from_str("{}").expect("deserialize");
        assert!(request.credential.is_empty());
    }
}
