//! Token signing configuration.
//!
//! Follows the same `FromEnv` pattern as `ServerConfig`.

use core_config::{env_parse_or, env_required, ConfigError, FromEnv};

/// Default access token lifetime in seconds.
pub const DEFAULT_ACCESS_TOKEN_TTL: u64 = 300;

/// Minimum accepted length of the HS256 signing secret.
pub const MIN_SECRET_LEN: usize = 32;

/// JWT signing configuration, built once at startup and handed to [`TokenIssuer`].
///
/// Loaded from environment variables:
/// - `JWT_SECRET` (required) - at least 32 characters
/// - `JWT_EXPIRES_IN` (optional) - access token lifetime in seconds, defaults to 300
///
/// [`TokenIssuer`]: super::TokenIssuer
#[derive(Clone)]
pub struct JwtConfig {
    /// HS256 signing secret
    pub secret: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

impl JwtConfig {
    /// Create a new JwtConfig.
    ///
    /// # Panics
    /// Panics if the secret is shorter than 32 characters.
    pub fn new(secret: impl Into<String>, expires_in: u64) -> Self {
        let secret = secret.into();
        assert!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT secret must be at least 32 characters"
        );
        Self { secret, expires_in }
    }
}

// The secret never ends up in logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl FromEnv for JwtConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let secret = env_required("JWT_SECRET")?;

        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::ParseError {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least 32 characters (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }

        let expires_in = env_parse_or("JWT_EXPIRES_IN", DEFAULT_ACCESS_TOKEN_TTL)?;

        Ok(Self { secret, expires_in })
    }
}
