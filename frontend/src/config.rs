use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Runtime configuration delivered alongside the static bundle. Every field is
/// optional; anything missing falls back to the localhost defaults below.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub auth_base_url: Option<String>,
    pub hr_base_url: Option<String>,
    pub google_client_id: Option<String>,
    pub hr_marker: Option<String>,
}

pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:3000/api";
pub const DEFAULT_HR_BASE_URL: &str = "http://localhost:8000/api";
/// Substring an account's email must contain to use the portal.
pub const DEFAULT_HR_MARKER: &str = "hr";

static CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

const ENV_GLOBAL: &str = "__HR_PORTAL_ENV";
const CONFIG_GLOBAL: &str = "__HR_PORTAL_CONFIG";

fn read_global_key(obj: &js_sys::Object, upper: &str, lower: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &upper.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(obj, &lower.into()).ok())
        .and_then(|v| v.as_string())
}

fn read_global_object(name: &str) -> Option<js_sys::Object> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    Some(js_sys::Object::from(any))
}

fn config_from_object(obj: &js_sys::Object) -> RuntimeConfig {
    RuntimeConfig {
        auth_base_url: read_global_key(obj, "AUTH_BASE_URL", "auth_base_url"),
        hr_base_url: read_global_key(obj, "HR_BASE_URL", "hr_base_url"),
        google_client_id: read_global_key(obj, "GOOGLE_CLIENT_ID", "google_client_id"),
        hr_marker: read_global_key(obj, "HR_MARKER", "hr_marker"),
    }
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    // window.__HR_PORTAL_ENV (env.js) takes precedence over
    // window.__HR_PORTAL_CONFIG written from a previous config.json load.
    read_global_object(ENV_GLOBAL)
        .or_else(|| read_global_object(CONFIG_GLOBAL))
        .map(|obj| config_from_object(&obj))
}

fn write_window_config(cfg: &RuntimeConfig) {
    let window = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    let pairs = [
        ("auth_base_url", &cfg.auth_base_url),
        ("hr_base_url", &cfg.hr_base_url),
        ("google_client_id", &cfg.google_client_id),
        ("hr_marker", &cfg.hr_marker),
    ];
    for (key, value) in pairs {
        if let Some(value) = value {
            let _ = js_sys::Reflect::set(
                &obj,
                &(*key).into(),
                &wasm_bindgen::JsValue::from_str(value),
            );
        }
    }
    let _ = js_sys::Reflect::set(&window, &CONFIG_GLOBAL.into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

fn cache_config(cfg: RuntimeConfig) -> &'static RuntimeConfig {
    CONFIG.get_or_init(|| cfg)
}

async fn resolved_config() -> &'static RuntimeConfig {
    if let Some(cached) = CONFIG.get() {
        return cached;
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_config(existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        return cache_config(cfg);
    }
    cache_config(RuntimeConfig::default())
}

pub async fn await_auth_base_url() -> String {
    resolved_config()
        .await
        .auth_base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_AUTH_BASE_URL.into())
}

pub async fn await_hr_base_url() -> String {
    resolved_config()
        .await
        .hr_base_url
        .clone()
        .unwrap_or_else(|| DEFAULT_HR_BASE_URL.into())
}

/// Marker checked against the signed-in account's email before the portal
/// talks to the gateway at all.
pub fn hr_marker() -> String {
    CONFIG
        .get()
        .and_then(|cfg| cfg.hr_marker.clone())
        .unwrap_or_else(|| DEFAULT_HR_MARKER.into())
}

pub fn google_client_id() -> Option<String> {
    CONFIG.get().and_then(|cfg| cfg.google_client_id.clone())
}

/// Origin serving employee photographs, derived from the HR API base URL by
/// dropping its `/api` suffix.
pub fn origin_of(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    trimmed.strip_suffix("/api").unwrap_or(trimmed).to_string()
}

pub async fn init() {
    let _ = resolved_config().await;
}
