use anyhow::{anyhow, Context};
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use jsonwebtoken::{decode, decode_header, DecodingKey, Validation};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

const GOOGLE_CERTS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";
const GOOGLE_ISSUERS: [&str; 2] = ["https://accounts.google.com", "accounts.google.com"];
const KEY_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

/// Identity asserted by the third-party provider after credential verification.
#[derive(Debug, Clone)]
pub struct IdentityClaims {
    pub subject: String,
    pub email: Option<String>,
}

#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> anyhow::Result<IdentityClaims>;
}

#[derive(Debug, Deserialize)]
struct GoogleIdClaims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct Jwk {
    kid: String,
    n: String,
    e: String,
}

#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

struct CachedKeys {
    keys: Vec<Jwk>,
    fetched_at: Instant,
}

/// Verifies Google ID tokens against Google's published JWKS for the configured
/// OAuth client id. Keys are cached and refetched on expiry or unknown `kid`.
pub struct GoogleVerifier {
    http: reqwest::Client,
    client_id: String,
    certs_url: String,
    cache: RwLock<Option<CachedKeys>>,
}

impl GoogleVerifier {
    pub fn new(client_id: String) -> Self {
        Self::with_certs_url(client_id, GOOGLE_CERTS_URL.to_string())
    }

    pub fn with_certs_url(client_id: String, certs_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            certs_url,
            cache: RwLock::new(None),
        }
    }

    async fn cached_key(&self, kid: &str) -> Option<Jwk> {
        let guard = self.cache.read().await;
        let cached = guard.as_ref()?;
        if cached.fetched_at.elapsed() > KEY_CACHE_TTL {
            return None;
        }
        cached.keys.iter().find(|k| k.kid == kid).cloned()
    }

    async fn fetch_key(&self, kid: &str) -> anyhow::Result<Jwk> {
        let set: JwkSet = self
            .http
            .get(&self.certs_url)
            .send()
            .await
            .context("fetching provider signing keys")?
            .error_for_status()
            .context("provider signing key endpoint returned an error")?
            .json()
            .await
            .context("parsing provider signing keys")?;

        let key = set
            .keys
            .iter()
            .find(|k| k.kid == kid)
            .cloned()
            .ok_or_else(|| anyhow!("no signing key matches kid {kid}"))?;

        let mut guard = self.cache.write().await;
        *guard = Some(CachedKeys {
            keys: set.keys,
            fetched_at: Instant::now(),
        });

        Ok(key)
    }
}

#[async_trait]
impl CredentialVerifier for GoogleVerifier {
    async fn verify(&self, credential: &str) -> anyhow::Result<IdentityClaims> {
        let header = decode_header(credential).context("decoding credential header")?;
        let kid = header
            .kid
            .ok_or_else(|| anyhow!("credential header has no kid"))?;

        let key = match self.cached_key(&kid).await {
            Some(key) => key,
            None => self.fetch_key(&kid).await?,
        };

        let decoding_key = DecodingKey::from_rsa_components(&key.n, &key.e)
            .context("building decoding key from provider components")?;

        let mut validation = Validation::new(jsonwebtoken::Algorithm::RS256);
        validation.set_audience(&[&self.client_id]);
        validation.set_issuer(&GOOGLE_ISSUERS);

        let data = decode::<GoogleIdClaims>(credential, &decoding_key, &validation)
            .context("credential signature verification failed")?;

        Ok(IdentityClaims {
            subject: data.claims.sub,
            email: data.claims.email,
        })
    }
}

/// Decodes the payload segment of a credential WITHOUT verifying its signature.
/// Only reachable when `allow_unverified_credentials` is enabled; treat any
/// output as untrusted.
pub fn decode_unverified(credential: &str) -> anyhow::Result<IdentityClaims> {
    let parts: Vec<&str> = credential.split('.').collect();
    if parts.len() != 3 {
        return Err(anyhow!("invalid token format: {} segments", parts.len()));
    }

    let payload = URL_SAFE_NO_PAD
        .decode(parts[1])
        .context("decoding credential payload")?;
    let claims: GoogleIdClaims =
        serde_json::from_slice(&payload).context("parsing credential payload")?;

    Ok(IdentityClaims {
        subject: claims.sub,
        email: claims.email,
    })
}
