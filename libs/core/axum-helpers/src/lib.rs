//! # Axum Helpers
//!
//! Shared HTTP plumbing for the catalog service.
//!
//! ## Modules
//!
//! - **[`auth`]**: HS256 bearer tokens, the auth middleware and the `AuthenticatedUser` extractor
//! - **[`server`]**: Router setup, graceful shutdown
//! - **[`errors`]**: `AppError` and the `{"message"}` error body
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router(Router::new());
//!     create_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod server;

// Re-export auth types
pub use auth::{
    AuthError, AuthResult, AuthenticatedUser, JwtClaims, JwtConfig, TokenIssuer,
    jwt_auth_middleware,
};

// Re-export server types
pub use server::{ShutdownCoordinator, create_app, create_router, shutdown_signal};

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse, error_response};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};
