//! Server configuration
//!
//! All settings come from the environment (a `.env` file is honored at
//! startup):
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | HTTP_PORT | 3000 | HTTP listen port |
//! | DATA_DIR | /var/lib/barista | Embedded database directory |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | JWKS_URL | *(required)* | Signing key set endpoint |
//! | JWT_ISSUER | *(required)* | Expected `iss` claim |
//! | JWT_AUDIENCE | *(required)* | Expected `aud` claim |
//! | JWT_ALGORITHM | RS256 | Expected signing algorithm |
//! | JWKS_TIMEOUT_MS | 3000 | Key set fetch timeout |
//! | JWKS_CACHE_TTL_SECS | 600 | Key set cache lifetime (0 disables) |

/// Token verification settings.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Remote JSON Web Key Set endpoint
    pub jwks_url: String,
    /// Expected token issuer
    pub issuer: String,
    /// Expected token audience
    pub audience: String,
    /// Expected signing algorithm name, e.g. "RS256"
    pub algorithm: String,
    /// Key set fetch timeout (milliseconds)
    pub fetch_timeout_ms: u64,
    /// Key set cache TTL (seconds); 0 fetches per verification
    pub cache_ttl_secs: u64,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Directory for the embedded database
    pub data_dir: String,
    /// Running environment: development | staging | production
    pub environment: String,
    /// Token verification settings
    pub verifier: VerifierConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `JWKS_URL`, `JWT_ISSUER` and `JWT_AUDIENCE` have no sensible defaults
    /// and must be set.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "/var/lib/barista".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            verifier: VerifierConfig {
                jwks_url: std::env::var("JWKS_URL").expect("JWKS_URL must be set"),
                issuer: std::env::var("JWT_ISSUER").expect("JWT_ISSUER must be set"),
                audience: std::env::var("JWT_AUDIENCE").expect("JWT_AUDIENCE must be set"),
                algorithm: std::env::var("JWT_ALGORITHM").unwrap_or_else(|_| "RS256".into()),
                fetch_timeout_ms: std::env::var("JWKS_TIMEOUT_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3000),
                cache_ttl_secs: std::env::var("JWKS_CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(600),
            },
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
