//! Application state management
//!
//! The shared state passed to all request handlers via Axum's state
//! extraction. Every field is cheap to clone and read-only after startup.

use crate::auth::TokenVerifier;
use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (connects lazily)
    pub db: PgPool,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bearer token verifier with pre-computed keys
    pub tokens: TokenVerifier,
}

impl AppState {
    /// Create a new application state
    ///
    /// Derives the token keys from the configured secret; call once at startup.
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let tokens = TokenVerifier::new(&config.auth.jwt_secret, &config.auth.audience);

        Self {
            db,
            config: Arc::new(config),
            tokens,
        }
    }

    /// Get a reference to the database pool
    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the token verifier
    #[inline]
    pub fn tokens(&self) -> &TokenVerifier {
        &self.tokens
    }
}
