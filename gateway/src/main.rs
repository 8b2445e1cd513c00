use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hr_portal_gateway::{build_router, config::Config, state::AppState, utils::google::GoogleVerifier};

fn mask_secret(s: &str) -> String {
    if s.is_empty() {
        return "<empty>".into();
    }
    let prefix = s.chars().take(4).collect::<String>();
    format!("{}*** (len={})", prefix, s.len())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hr_portal_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        jwt_secret = %mask_secret(&config.jwt_secret),
        jwt_expiration_hours = config.jwt_expiration_hours,
        google_client_id = %config.google_client_id,
        allowed_origin = %config.allowed_origin,
        allow_unverified_credentials = config.allow_unverified_credentials,
        "Loaded configuration from environment/.env"
    );
    if config.allow_unverified_credentials {
        tracing::warn!(
            "ALLOW_UNVERIFIED_CREDENTIALS is enabled; credentials that fail provider \
             verification will be trusted without a signature check"
        );
    }

    let verifier = Arc::new(GoogleVerifier::new(config.google_client_id.clone()));
    let state = AppState::new(config.clone(), verifier);
    let app = build_router(state)?;

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Auth gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
