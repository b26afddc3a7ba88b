use super::config::JwtConfig;
use super::error::{AuthError, AuthResult};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

impl JwtClaims {
    /// A token is valid strictly before `exp`.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Mints and verifies HS256 access tokens.
///
/// Holds the signing key for the lifetime of the process. Issue and verify only read the
/// clock, so a single instance can be cloned into every request.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    access_ttl: u64,
}

impl TokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `decode_claims` so that `now == exp` already counts as expired.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        tracing::info!(access_ttl = config.expires_in, "Token issuer initialized");
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            access_ttl: config.expires_in,
        }
    }

    /// Configured access token lifetime in seconds
    pub fn access_ttl(&self) -> u64 {
        self.access_ttl
    }

    /// Issue a token for `subject` with the configured lifetime
    pub fn issue_access_token(&self, subject: &str) -> AuthResult<String> {
        self.issue(subject, self.access_ttl)
    }

    /// Issue a token for `subject` that expires `ttl_seconds` from now
    pub fn issue(&self, subject: &str, ttl_seconds: u64) -> AuthResult<String> {
        let ttl = i64::try_from(ttl_seconds)
            .map_err(|_| AuthError::Signing(format!("ttl out of range: {}", ttl_seconds)))?;
        let now = Utc::now().timestamp();

        let claims = JwtClaims {
            sub: subject.to_string(),
            exp: now.saturating_add(ttl),
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Verify a token and return its subject
    pub fn verify(&self, token: &str) -> AuthResult<String> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    /// Verify signature and expiry, returning the full claim set
    pub fn decode_claims(&self, token: &str) -> AuthResult<JwtClaims> {
        let data = decode::<JwtClaims>(token, &self.decoding, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.is_expired_at(Utc::now().timestamp()) {
            return Err(AuthError::Expired);
        }

        Ok(data.claims)
    }
}
