//! Shared test support: an in-process app wired to a static key set, and a
//! token mint backed by a throwaway RSA key.

use std::sync::Arc;

use axum::Router;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rsa::RsaPrivateKey;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::traits::PublicKeyParts;
use serde_json::json;

use barista_server::auth::{Jwk, KeySet, StaticKeySetProvider};
use barista_server::db::DrinkStorage;
use barista_server::{ServerState, TokenVerifier, api};

pub const AUDIENCE: &str = "drinks-api";
pub const ISSUER: &str = "https://issuer.test/";
pub const KID: &str = "test-key-1";

/// Mints tokens signed by the key the test app trusts.
pub struct TokenMint {
    encoding: EncodingKey,
    pub jwk: Jwk,
}

impl TokenMint {
    pub fn new() -> Self {
        let private = RsaPrivateKey::new(&mut rand::thread_rng(), 2048)
            .expect("failed to generate RSA key");
        let der = private.to_pkcs1_der().expect("failed to encode key");

        Self {
            encoding: EncodingKey::from_rsa_der(der.as_bytes()),
            jwk: Jwk {
                kty: "RSA".to_string(),
                kid: KID.to_string(),
                n: URL_SAFE_NO_PAD.encode(private.n().to_bytes_be()),
                e: URL_SAFE_NO_PAD.encode(private.e().to_bytes_be()),
                alg: Some("RS256".to_string()),
                use_: Some("sig".to_string()),
            },
        }
    }

    /// A valid token carrying the given scopes.
    pub fn token(&self, permissions: &[&str]) -> String {
        self.sign(KID, &self.claims(Some(permissions), 3600))
    }

    /// A valid token with no permissions claim at all.
    pub fn token_without_permissions(&self) -> String {
        self.sign(KID, &self.claims(None, 3600))
    }

    /// An otherwise valid token whose expiry has passed.
    pub fn expired_token(&self, permissions: &[&str]) -> String {
        self.sign(KID, &self.claims(Some(permissions), -3600))
    }

    /// A token referencing a key id the app does not trust.
    pub fn token_with_unknown_kid(&self, permissions: &[&str]) -> String {
        self.sign("rotated-away", &self.claims(Some(permissions), 3600))
    }

    fn claims(&self, permissions: Option<&[&str]>, expires_in: i64) -> serde_json::Value {
        let now = Utc::now().timestamp();
        let mut claims = json!({
            "iss": ISSUER,
            "aud": AUDIENCE,
            "sub": "user|tester",
            "iat": now,
            "exp": now + expires_in,
        });
        if let Some(permissions) = permissions {
            claims["permissions"] = json!(permissions);
        }
        claims
    }

    fn sign(&self, kid: &str, claims: &serde_json::Value) -> String {
        let header = Header {
            kid: Some(kid.to_string()),
            ..Header::new(Algorithm::RS256)
        };
        encode(&header, claims, &self.encoding).expect("failed to sign token")
    }
}

/// A full application over a fresh catalog, trusting only the mint's key.
pub fn test_app() -> (tempfile::TempDir, Router, TokenMint) {
    let mint = TokenMint::new();

    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let drinks = DrinkStorage::open(&dir.path().join("drinks.redb")).expect("failed to open db");

    let provider = StaticKeySetProvider::new(KeySet {
        keys: vec![mint.jwk.clone()],
    });
    let verifier = TokenVerifier::new(Arc::new(provider), Algorithm::RS256, AUDIENCE, ISSUER);

    let app = api::build_app(ServerState::with_parts(drinks, verifier));
    (dir, app, mint)
}
