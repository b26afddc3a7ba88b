//! Products API routes

use axum::{Router, middleware};
use axum_helpers::{TokenIssuer, jwt_auth_middleware};
use domain_products::{ProductRepository, ProductService, handlers};

/// Create the products router; every route requires a bearer token
pub fn router<R: ProductRepository + 'static>(repository: R, tokens: TokenIssuer) -> Router {
    handlers::router(ProductService::new(repository))
        .layer(middleware::from_fn_with_state(tokens, jwt_auth_middleware))
}
