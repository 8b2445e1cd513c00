use leptos::WriteSignal;

use crate::{
    api::{ApiClient, ApiError},
    state::auth::{refresh_auth, AuthState},
};

use super::utils;

/// Full sign-in sequence for a Google credential. The HR marker gate runs
/// locally first; a non-HR account never reaches the gateway.
pub async fn sign_in(
    api: &ApiClient,
    credential: &str,
    hr_marker: &str,
    set_auth: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    utils::validate_credential(credential, hr_marker).map_err(ApiError::new)?;
    api.login(credential).await?;
    refresh_auth(api, set_auth).await;
    Ok(())
}
