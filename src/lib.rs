//! Barista Server - drinks catalog resource server
//!
//! A small HTTP API for a drinks catalog with two visibility tiers and
//! scope-gated mutations. Bearer tokens are RS256 JWTs verified against a
//! remote JSON Web Key Set.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # Configuration, state, HTTP server
//! ├── auth/          # Token extraction, JWKS, verification, scope gate
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Embedded redb storage
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{AuthError, KeySetProvider, TokenPayload, TokenVerifier};
pub use core::{Config, Server, ServerState};
pub use db::DrinkStorage;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - structured auth events via tracing
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::warn!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
