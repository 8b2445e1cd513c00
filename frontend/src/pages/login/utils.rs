use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::Value;

pub const HR_ONLY_MESSAGE: &str = "Only HR personnel are allowed to access this portal.";

/// Pulls the email claim out of a Google ID token without verifying it. Good
/// enough for the client-side HR gate; the gateway does the real signature
/// check.
pub fn extract_email(credential: &str) -> Option<String> {
    let segments: Vec<&str> = credential.split('.').collect();
    if segments.len() != 3 {
        return None;
    }
    let payload = URL_SAFE_NO_PAD.decode(segments[1]).ok()?;
    let claims: Value = serde_json::from_slice(&payload).ok()?;
    claims
        .get("email")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

pub fn passes_hr_marker(email: &str, marker: &str) -> bool {
    email.to_lowercase().contains(&marker.to_lowercase())
}

/// Local gate run before any network traffic: only accounts whose email
/// carries the HR marker may proceed to the gateway.
pub fn validate_credential(credential: &str, marker: &str) -> Result<String, &'static str> {
    match extract_email(credential) {
        Some(email) if passes_hr_marker(&email, marker) => Ok(email),
        _ => Err(HR_ONLY_MESSAGE),
    }
}
