//! JSON Web Key Set provider
//!
//! The verifier never fetches keys itself; it goes through the
//! [`KeySetProvider`] capability so the remote trust anchor is an explicit,
//! mockable dependency:
//!
//! - [`HttpKeySetProvider`] - fetches the JWKS endpoint with a hard timeout
//! - [`CachedKeySetProvider`] - TTL cache wrapper, refreshable on key rotation
//! - [`StaticKeySetProvider`] - fixed key set for tests and offline use

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::AuthError;

/// A single public verification key, as served by the JWKS endpoint.
///
/// Only RSA keys are expected; `n` and `e` are base64url-encoded modulus and
/// exponent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    pub kid: String,
    pub n: String,
    pub e: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
    #[serde(rename = "use", default, skip_serializing_if = "Option::is_none")]
    pub use_: Option<String>,
}

/// The set of public keys the token issuer currently trusts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeySet {
    pub keys: Vec<Jwk>,
}

impl KeySet {
    /// Look up a key by its identifier.
    pub fn find(&self, kid: &str) -> Option<&Jwk> {
        self.keys.iter().find(|k| k.kid == kid)
    }
}

/// Source of the current signing key set.
///
/// `force_refresh` bypasses any cache; the verifier sets it after a `kid`
/// miss so a freshly rotated key is picked up before the request fails.
#[async_trait]
pub trait KeySetProvider: Send + Sync {
    async fn key_set(&self, force_refresh: bool) -> Result<KeySet, AuthError>;
}

/// Fetches the key set from a remote JWKS endpoint.
///
/// Transport or parse failures surface as [`AuthError::KeySetUnavailable`],
/// a server fault - never an authorization failure.
pub struct HttpKeySetProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpKeySetProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl KeySetProvider for HttpKeySetProvider {
    async fn key_set(&self, _force_refresh: bool) -> Result<KeySet, AuthError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))?;

        response
            .json::<KeySet>()
            .await
            .map_err(|e| AuthError::KeySetUnavailable(e.to_string()))
    }
}

/// Time-bounded cache around another provider.
///
/// A cached key set is served until `ttl` elapses. `force_refresh` skips the
/// cache and repopulates it, which is how key rotation is handled without
/// waiting out the TTL.
pub struct CachedKeySetProvider<P> {
    inner: P,
    ttl: Duration,
    cached: RwLock<Option<(Instant, KeySet)>>,
}

impl<P: KeySetProvider> CachedKeySetProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: RwLock::new(None),
        }
    }
}

#[async_trait]
impl<P: KeySetProvider> KeySetProvider for CachedKeySetProvider<P> {
    async fn key_set(&self, force_refresh: bool) -> Result<KeySet, AuthError> {
        if !force_refresh {
            let cached = self.cached.read().await;
            if let Some((fetched_at, keys)) = cached.as_ref()
                && fetched_at.elapsed() < self.ttl
            {
                return Ok(keys.clone());
            }
        }

        let keys = self.inner.key_set(true).await?;
        *self.cached.write().await = Some((Instant::now(), keys.clone()));
        Ok(keys)
    }
}

/// Fixed in-memory key set.
pub struct StaticKeySetProvider {
    keys: KeySet,
}

impl StaticKeySetProvider {
    pub fn new(keys: KeySet) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl KeySetProvider for StaticKeySetProvider {
    async fn key_set(&self, _force_refresh: bool) -> Result<KeySet, AuthError> {
        Ok(self.keys.clone())
    }
}
