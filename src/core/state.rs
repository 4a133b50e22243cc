//! Server state
//!
//! Shared, cheaply clonable state handed to every handler: the drinks
//! storage and the token verifier. The key set provider is wired here - an
//! HTTP fetcher behind a TTL cache by default, or whatever a test injects
//! through [`ServerState::with_parts`].

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::Algorithm;
use tracing::info;

use crate::auth::{CachedKeySetProvider, HttpKeySetProvider, KeySetProvider, TokenVerifier};
use crate::core::Config;
use crate::db::DrinkStorage;

#[derive(Clone)]
pub struct ServerState {
    pub drinks: DrinkStorage,
    verifier: Arc<TokenVerifier>,
}

impl ServerState {
    /// Build the production state from configuration.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let drinks = DrinkStorage::open(&Path::new(&config.data_dir).join("drinks.redb"))?;
        info!("Drinks catalog opened at {}/drinks.redb", config.data_dir);

        let http = HttpKeySetProvider::new(
            config.verifier.jwks_url.clone(),
            Duration::from_millis(config.verifier.fetch_timeout_ms),
        )?;
        let provider: Arc<dyn KeySetProvider> = if config.verifier.cache_ttl_secs > 0 {
            Arc::new(CachedKeySetProvider::new(
                http,
                Duration::from_secs(config.verifier.cache_ttl_secs),
            ))
        } else {
            Arc::new(http)
        };

        let algorithm: Algorithm = config
            .verifier
            .algorithm
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid JWT_ALGORITHM: {}", e))?;

        let verifier = TokenVerifier::new(
            provider,
            algorithm,
            config.verifier.audience.clone(),
            config.verifier.issuer.clone(),
        );

        Ok(Self {
            drinks,
            verifier: Arc::new(verifier),
        })
    }

    /// Assemble state from explicit parts (tests, embedded use).
    pub fn with_parts(drinks: DrinkStorage, verifier: TokenVerifier) -> Self {
        Self {
            drinks,
            verifier: Arc::new(verifier),
        }
    }

    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }
}
