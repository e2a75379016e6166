use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Header, Validation, decode, decode_header};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::RwLock;

use business::domain::identity::errors::IdentityError;
use business::domain::identity::verifier::IdentityVerifier;
use business::domain::shared::value_objects::FarmerId;

const GOOGLE_CERTS_URL: &str =
    "https://www.googleapis.com/robot/v1/metadata/x509/securetoken@system.gserviceaccount.com";
const CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct FirebaseClaims {
    sub: String,
    email: Option<String>,
    iss: String,
    aud: String,
    exp: u64,
    iat: u64,
}

struct CachedCerts {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Instant,
}

/// Verifies Firebase ID tokens against Google's rotating signing certificates.
///
/// Certificates are cached per instance for `CACHE_TTL`; a stale cache is
/// refreshed on the next verification.
pub struct FirebaseTokenVerifier {
    client: Client,
    project_id: String,
    certs_url: String,
    fetch_timeout: Duration,
    cache: RwLock<Option<CachedCerts>>,
}

impl FirebaseTokenVerifier {
    /// Fails only if the HTTP client (TLS backend) cannot be initialised.
    pub fn new(project_id: String, fetch_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(fetch_timeout).build()?;

        Ok(Self {
            client,
            project_id,
            certs_url: GOOGLE_CERTS_URL.to_string(),
            fetch_timeout,
            cache: RwLock::new(None),
        })
    }

    async fn fetch_google_certs(&self) -> Result<HashMap<String, DecodingKey>, String> {
        let response: HashMap<String, String> = self
            .client
            .get(&self.certs_url)
            .send()
            .await
            .map_err(|e| format!("auth.certs_fetch_failed: {e}"))?
            .json()
            .await
            .map_err(|e| format!("auth.certs_parse_failed: {e}"))?;

        let mut keys = HashMap::new();
        for (kid, pem) in response {
            let key = DecodingKey::from_rsa_pem(pem.as_bytes())
                .map_err(|e| format!("auth.cert_decode_failed: {e}"))?;
            keys.insert(kid, key);
        }

        Ok(keys)
    }

    async fn decoding_keys(&self) -> Result<HashMap<String, DecodingKey>, IdentityError> {
        {
            let cache = self.cache.read().await;
            if let Some(cached) = cache.as_ref()
                && cached.fetched_at.elapsed() < CACHE_TTL
            {
                return Ok(cached.keys.clone());
            }
        }

        let keys = match tokio::time::timeout(self.fetch_timeout, self.fetch_google_certs()).await
        {
            Ok(Ok(keys)) => keys,
            Ok(Err(e)) => {
                tracing::error!("Failed to fetch Google certs: {e}");
                return Err(IdentityError::Unauthenticated);
            }
            Err(_) => {
                tracing::error!("Timed out fetching Google certs");
                return Err(IdentityError::Timeout);
            }
        };

        let mut cache = self.cache.write().await;
        *cache = Some(CachedCerts {
            keys: keys.clone(),
            fetched_at: Instant::now(),
        });

        Ok(keys)
    }
}

/// Validates signature, issuer, audience and expiry, returning the `sub` claim.
fn extract_subject(
    token: &str,
    keys: &HashMap<String, DecodingKey>,
    project_id: &str,
) -> Result<String, String> {
    let header: Header =
        decode_header(token).map_err(|e| format!("auth.invalid_token_header: {e}"))?;

    let kid = header.kid.ok_or("auth.missing_kid")?;
    let decoding_key = keys.get(&kid).ok_or("auth.unknown_kid")?;

    let expected_issuer = format!("https://securetoken.google.com/{}", project_id);

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[project_id]);
    validation.set_issuer(&[&expected_issuer]);
    validation.validate_exp = true;

    let token_data = decode::<FirebaseClaims>(token, decoding_key, &validation)
        .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    if token_data.claims.sub.trim().is_empty() {
        return Err("auth.empty_subject".to_string());
    }

    Ok(token_data.claims.sub)
}

#[async_trait]
impl IdentityVerifier for FirebaseTokenVerifier {
    async fn verify(&self, id_token: &str) -> Result<FarmerId, IdentityError> {
        let token = id_token.trim();
        if token.is_empty() {
            return Err(IdentityError::Unauthenticated);
        }

        // Reject garbage before touching the network.
        if let Err(e) = decode_header(token) {
            tracing::warn!("Firebase auth failed: auth.invalid_token_header: {e}");
            return Err(IdentityError::Unauthenticated);
        }

        let keys = self.decoding_keys().await?;

        match extract_subject(token, &keys, &self.project_id) {
            Ok(uid) => Ok(FarmerId::new(uid)),
            Err(e) => {
                tracing::warn!("Firebase auth failed: {e}");
                Err(IdentityError::Unauthenticated)
            }
        }
    }
}
