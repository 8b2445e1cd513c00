use std::time::Duration;

use axum::{
    extract::{Extension, State},
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse},
    Json,
};

use crate::{
    error::AppError,
    models::session::{
        CheckAuthResponse, LoginRequest, LoginResponse, MessageResponse, SessionUser,
    },
    state::AppState,
    utils::{
        cookies::{build_clear_cookie, build_session_cookie, CookieOptions},
        google::{decode_unverified, IdentityClaims},
        jwt::{create_session_token, SessionClaims},
    },
};

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.credential.trim().is_empty() {
        return Err(AppError::BadRequest("No credential provided".to_string()));
    }

    let identity = match state.verifier.verify(&payload.credential).await {
        Ok(identity) => identity,
        Err(verify_error) => {
            if state.config.allow_unverified_credentials {
                // Development-only path: the payload is accepted without a
                // signature check. Anything decoded here is untrusted.
                tracing::warn!(
                    error = %verify_error,
                    "credential verification failed; falling back to unverified decode"
                );
                decode_unverified(&payload.credential).map_err(|decode_error| {
                    tracing::warn!(error = %decode_error, "unverified credential decode failed");
                    AppError::Unauthorized("Invalid credentials".to_string())
                })?
            } else {
                tracing::warn!(error = %verify_error, "credential verification failed");
                return Err(AppError::Unauthorized("Invalid credentials".to_string()));
            }
        }
    };

    let (cookie, response) = issue_session(&state, identity)?;
    tracing::info!(username = %response.user.username, "login successful");

    Ok((AppendHeaders([(SET_COOKIE, cookie)]), Json(response)))
}

pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = build_clear_cookie(cookie_options(&state));
    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

pub async fn check_auth(Extension(claims): Extension<SessionClaims>) -> Json<CheckAuthResponse> {
    Json(CheckAuthResponse {
        is_authenticated: true,
        user: claims,
    })
}

/// Mints the session token and Set-Cookie value for a verified identity.
pub fn issue_session(
    state: &AppState,
    identity: IdentityClaims,
) -> Result<(String, LoginResponse), AppError> {
    let username = identity
        .email
        .clone()
        .unwrap_or_else(|| identity.subject.clone());

    let claims = SessionClaims::new(
        username.clone(),
        identity.email.clone(),
        state.config.jwt_expiration_hours,
    );
    let token = create_session_token(&claims, &state.config.jwt_secret)
        .map_err(AppError::InternalServerError)?;

    let max_age = Duration::from_secs(state.config.jwt_expiration_hours * 60 * 60);
    let cookie = build_session_cookie(&token, max_age, cookie_options(state));

    Ok((
        cookie,
        LoginResponse {
            message: "Login successful".to_string(),
            user: SessionUser {
                username,
                email: identity.email,
            },
        },
    ))
}

fn cookie_options(state: &AppState) -> CookieOptions {
    CookieOptions {
        secure: state.config.cookie_secure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::utils::google::CredentialVerifier;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct RejectAll;

    #[async_trait]
    impl CredentialVerifier for RejectAll {
        async fn verify(&self, _credential: &str) -> anyhow::Result<IdentityClaims> {
            Err(anyhow::anyhow!("always rejects"))
        }
    }

    fn test_state() -> AppState {
        AppState::new(
            Config {
                jwt_secret: "test-secret".into(),
                jwt_expiration_hours: 1,
                google_client_id: "client-id".into(),
                allowed_origin: "http://localhost:5173".into(),
                cookie_secure: false,
                allow_unverified_credentials: false,
                port: 3000,
            },
            Arc::new(RejectAll),
        )
    }

    #[test]
    fn issue_session_prefers_email_as_username() {
        let state = test_state();
        let (cookie, response) = issue_session(
            &state,
            IdentityClaims {
                subject: "google-sub-1".into(),
                email: Some("pat@corp-hr.example".into()),
            },
        )
        .expect("issue session");

        assert!(cookie.starts_with("token="));
        assert!(cookie.contains("Max-Age=3600"));
        assert_eq!(response.message, "Login successful");
        assert_eq!(response.user.username, "pat@corp-hr.example");
    }

    #[test]
    fn issue_session_falls_back_to_subject_without_email() {
        let state = test_state();
        let (_, response) = issue_session(
            &state,
            IdentityClaims {
                subject: "google-sub-2".into(),
                email: None,
            },
        )
        .expect("issue session");

        assert_eq!(response.user.username, "google-sub-2");
        assert!(response.user.email.is_none());
    }
}
