//! Bearer token authentication.
//!
//! This module provides:
//! - HS256 token issuing and verification ([`TokenIssuer`])
//! - Authentication middleware for protected routes
//! - The [`AuthenticatedUser`] extractor for handlers behind the middleware
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{JwtConfig, TokenIssuer, jwt_auth_middleware};
//! use core_config::FromEnv;
//!
//! let config = JwtConfig::from_env()?;
//! let issuer = TokenIssuer::new(&config);
//!
//! let protected = Router::new()
//!     .route("/products", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(issuer, jwt_auth_middleware));
//! ```

pub mod config;
pub mod error;
pub mod jwt;
pub mod middleware;

// Re-export commonly used types
pub use config::{DEFAULT_ACCESS_TOKEN_TTL, JwtConfig, MIN_SECRET_LEN};
pub use error::{AuthError, AuthResult};
pub use jwt::{JwtClaims, TokenIssuer};
pub use middleware::{AuthenticatedUser, jwt_auth_middleware};
