//! Users API routes

use axum::Router;
use axum_helpers::TokenIssuer;
use domain_users::{UserRepository, UserService, handlers};

/// Create the users router; registration and token exchange are public
pub fn router<R: UserRepository + 'static>(repository: R, tokens: TokenIssuer) -> Router {
    handlers::router(UserService::new(repository, tokens))
}
