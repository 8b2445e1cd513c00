use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

/// HTTP client for the two backends the portal talks to: the auth gateway
/// (session cookie endpoints) and the HR API (employee and department data).
/// Base URLs resolve lazily from runtime config unless pinned via
/// `new_with_base_urls`, which the host tests use to point at a mock server.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    auth_base_url: Option<String>,
    hr_base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            auth_base_url: None,
            hr_base_url: None,
        }
    }

    pub fn new_with_base_urls(
        auth_base_url: impl Into<String>,
        hr_base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            auth_base_url: Some(auth_base_url.into()),
            hr_base_url: Some(hr_base_url.into()),
        }
    }

    pub(crate) fn http(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn auth_base_url(&self) -> String {
        if let Some(base) = &self.auth_base_url {
            base.clone()
        } else {
            config::await_auth_base_url().await
        }
    }

    pub(crate) async fn hr_base_url(&self) -> String {
        if let Some(base) = &self.hr_base_url {
            base.clone()
        } else {
            config::await_hr_base_url().await
        }
    }

    /// Origin the HR API serves employee photographs from.
    pub async fn hr_origin(&self) -> String {
        config::origin_of(&self.hr_base_url().await)
    }

    /// The gateway session lives in an HttpOnly cookie, so every gateway
    /// request must opt into credentialed fetch. Browser-only; the native
    /// reqwest client used by host tests carries cookies per request anyway.
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder.fetch_credentials_include()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
        builder
    }

    pub(crate) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder
            .send()
            .await
            .map_err(|e| ApiError::new(format!("Request failed: {}", e)))
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::new(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::error_from(response).await)
        }
    }

    pub(crate) async fn expect_success(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    pub(crate) async fn error_from(response: Response) -> ApiError {
        response
            .json::<ApiError>()
            .await
            .unwrap_or_else(|_| ApiError::new("Request failed"))
    }
}
