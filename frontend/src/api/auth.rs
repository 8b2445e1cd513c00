use crate::api::{
    client::ApiClient,
    types::{ApiError, CheckAuthResponse, LoginRequest, LoginResponse, MessageResponse},
};

impl ApiClient {
    /// Exchanges a Google ID token for the gateway's session cookie.
    pub async fn login(&self, credential: &str) -> Result<LoginResponse, ApiError> {
        let base_url = self.auth_base_url().await;
        let request = Self::with_credentials(
            self.http()
                .post(format!("{}/login", base_url))
                .json(&LoginRequest {
                    credential: credential.to_string(),
                }),
        );
        let response = Self::send(request).await?;
        Self::parse_json(response).await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        let base_url = self.auth_base_url().await;
        let request = Self::with_credentials(self.http().post(format!("{}/logout", base_url)));
        let response = Self::send(request).await?;
        Self::parse_json(response).await
    }

    /// Asks the gateway whether the session cookie is still good. 401 and 403
    /// both come back as `Err`, which callers treat as "not signed in".
    pub async fn check_auth(&self) -> Result<CheckAuthResponse, ApiError> {
        let base_url = self.auth_base_url().await;
        let request = Self::with_credentials(self.http().get(format!("{}/check-auth", base_url)));
        let response = Self::send(request).await?;
        Self::parse_json(response).await
    }
}
