use super::error::AuthError;
use super::jwt::TokenIssuer;
use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};

/// Identity attached to a request that passed [`jwt_auth_middleware`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Token subject
    pub user_id: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// JWT authentication middleware
///
/// Verifies the bearer token's signature and expiry and inserts an
/// [`AuthenticatedUser`] into the request extensions. Missing, malformed, tampered
/// and expired tokens all end in 401 before the inner handler runs.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::auth::{TokenIssuer, jwt_auth_middleware};
///
/// let issuer = TokenIssuer::new(&jwt_config);
///
/// let protected_routes = Router::new()
///     .route("/products", get(list_products))
///     .layer(axum::middleware::from_fn_with_state(issuer, jwt_auth_middleware));
/// ```
pub async fn jwt_auth_middleware(
    State(issuer): State<TokenIssuer>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let Some(token) = extract_bearer_token(request.headers()) else {
        tracing::debug!("No bearer token in Authorization header");
        return Err(AuthError::MissingToken);
    };

    let user_id = issuer.verify(token).map_err(|e| {
        tracing::debug!("JWT verification failed: {}", e);
        e
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| AuthError::MissingToken.into())
    }
}
