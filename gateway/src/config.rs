use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
    pub google_client_id: String,
    pub allowed_origin: String,
    pub cookie_secure: bool,
    /// Development escape hatch: when true, a credential that fails provider
    /// verification is decoded without signature checks. Never enable in
    /// production; every use is logged as a warning.
    pub allow_unverified_credentials: bool,
    pub port: u16,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-secret-key-change-this-in-production".to_string());

        let jwt_expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .unwrap_or(1);

        let google_client_id = env::var("GOOGLE_CLIENT_ID").unwrap_or_default();

        let allowed_origin =
            env::var("ALLOWED_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let allow_unverified_credentials = env::var("ALLOW_UNVERIFIED_CREDENTIALS")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000);

        Ok(Config {
            jwt_secret,
            jwt_expiration_hours,
            google_client_id,
            allowed_origin,
            cookie_secure,
            allow_unverified_credentials,
            port,
        })
    }
}
