//! Bearer token verification
//!
//! Keys are derived once from the shared secret and kept behind `Arc`
//! so the verifier can live in `AppState` and be cloned per request.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Claims carried by auth provider access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    pub aud: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Clone)]
struct Keys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

/// Verifies HS256 tokens signed with the shared project secret
#[derive(Clone)]
pub struct TokenVerifier {
    keys: Keys,
    validation: Arc<Validation>,
    audience: String,
}

impl TokenVerifier {
    /// Build a verifier; call once at startup
    pub fn new(secret: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        Self {
            keys: Keys {
                encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
                decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            },
            validation: Arc::new(validation),
            audience: audience.to_string(),
        }
    }

    /// Validate a token and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, &self.keys.decoding, &self.validation)
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    /// Validate a token and return the user it was issued to
    pub fn verify_user(&self, token: &str) -> Result<Uuid> {
        let claims = self.verify(token)?;
        Uuid::parse_str(&claims.sub).map_err(|_| anyhow::anyhow!("Invalid user ID in token"))
    }

    /// Mint a token the way the auth provider does
    ///
    /// Only used by tests and local tooling.
    pub fn issue(&self, user_id: Uuid, expires_in_secs: i64) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (now + Duration::seconds(expires_in_secs)).timestamp(),
            iat: now.timestamp(),
            aud: self.audience.clone(),
            role: Some("authenticated".to_string()),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> TokenVerifier {
        TokenVerifier::new("test-secret-key-for-testing-only-32chars", "authenticated")
    }

    #[test]
    fn test_issue_and_verify() {
        let verifier = verifier();
        let user_id = Uuid::new_v4();

        let token = verifier.issue(user_id, 3600).unwrap();
        let claims = verifier.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.aud, "authenticated");
        assert_eq!(verifier.verify_user(&token).unwrap(), user_id);
    }

    #[test]
    fn test_expired_token_rejected() {
        let verifier = verifier();
        // Past the default 60s leeway
        let token = verifier.issue(Uuid::new_v4(), -600).unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = verifier().issue(Uuid::new_v4(), 3600).unwrap();
        let other = TokenVerifier::new("another-secret-key-entirely-different", "authenticated");
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let token = TokenVerifier::new("test-secret-key-for-testing-only-32chars", "anon")
            .issue(Uuid::new_v4(), 3600)
            .unwrap();
        assert!(verifier().verify(&token).is_err());
    }

    #[test]
    fn test_invalid_token_rejected() {
        assert!(verifier().verify("invalid.token.here").is_err());
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let verifier = verifier();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "service-account".to_string(),
            exp: now + 3600,
            iat: now,
            aud: "authenticated".to_string(),
            role: None,
        };
        let token = encode(&Header::default(), &claims, &verifier.keys.encoding).unwrap();

        assert!(verifier.verify(&token).is_ok());
        assert!(verifier.verify_user(&token).is_err());
    }
}
