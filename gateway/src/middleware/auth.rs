use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    state::AppState,
    utils::{
        cookies::{extract_cookie_value, SESSION_COOKIE_NAME},
        jwt::verify_session_token,
    },
};

/// Session-cookie gate for authenticated routes. Missing cookie and invalid
/// cookie are distinct failures: the former never held a session, the latter
/// held one that is expired or tampered with.
pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let cookie_header = request
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_owned());

    let token = cookie_header
        .as_deref()
        .and_then(|raw| extract_cookie_value(raw, SESSION_COOKIE_NAME))
        .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

    let claims = verify_session_token(&token, &state.config.jwt_secret)
        .map_err(|_| AppError::Forbidden("Invalid token".to_string()))?;

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}
