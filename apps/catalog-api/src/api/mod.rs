//! API routes module

pub mod health;
pub mod products;
pub mod users;

use axum::Router;
use domain_products::{InMemoryProductRepository, PgProductRepository};
use domain_users::{InMemoryUserRepository, PgUserRepository};

use crate::state::{AppState, Storage};

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let tokens = state.tokens.clone();

    let (products, users) = match &state.storage {
        Storage::Postgres(db) => (
            products::router(PgProductRepository::new(db.clone()), tokens.clone()),
            users::router(PgUserRepository::new(db.clone()), tokens),
        ),
        Storage::Memory => (
            products::router(InMemoryProductRepository::new(), tokens.clone()),
            users::router(InMemoryUserRepository::new(), tokens),
        ),
    };

    Router::new()
        .nest("/products", products)
        .nest("/users", users)
        .merge(health::router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum_helpers::{JwtConfig, TokenIssuer, create_router};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const SECRET: &str = "catalog-api-test-secret-of-sufficient-length";

    fn app_with_ttl(ttl: u64) -> Router {
        let state = AppState {
            storage: Storage::Memory,
            tokens: TokenIssuer::new(&JwtConfig::new(SECRET, ttl)),
        };
        create_router(routes(&state))
    }

    fn app() -> Router {
        app_with_ttl(300)
    }

    async fn call(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn sign_up_and_get_token(app: &Router) -> String {
        let (status, _) = call(
            app,
            "POST",
            "/users",
            None,
            Some(json!({"name": "John", "email": "j@j.com", "password": "123456"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, body) = call(
            app,
            "POST",
            "/users/generate_token",
            None,
            Some(json!({"email": "j@j.com", "password": "123456"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["access_token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_products_require_token() {
        let app = app();

        for (method, uri) in [
            ("GET", "/products"),
            ("POST", "/products"),
            ("GET", "/products/0192d5c4-7c1e-7000-8000-000000000000"),
            ("PUT", "/products/0192d5c4-7c1e-7000-8000-000000000000"),
            ("DELETE", "/products/0192d5c4-7c1e-7000-8000-000000000000"),
        ] {
            let (status, body) = call(&app, method, uri, None, None).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{} {}", method, uri);
            assert!(body["message"].is_string());
        }
    }

    #[tokio::test]
    async fn test_products_reject_garbage_token() {
        let (status, _) = call(&app(), "GET", "/products", Some("not.a.jwt"), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_products_reject_expired_token() {
        let app = app_with_ttl(0);
        let token = sign_up_and_get_token(&app).await;

        let (status, body) = call(&app, "GET", "/products", Some(&token), None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body["message"].as_str().unwrap().contains("expired"));
    }

    #[tokio::test]
    async fn test_full_flow() {
        let app = app();
        let token = sign_up_and_get_token(&app).await;

        let (status, created) = call(
            &app,
            "POST",
            "/products",
            Some(&token),
            Some(json!({"name": "Notebook", "price": 1500.0})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let uri = format!("/products/{}", created["id"].as_str().unwrap());

        let (status, fetched) = call(&app, "GET", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, listed) = call(&app, "GET", "/products?sort=-price", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, _) = call(&app, "DELETE", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = call(&app, "GET", &uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_password_gets_no_token() {
        let app = app();
        sign_up_and_get_token(&app).await;

        let (status, body) = call(
            &app,
            "POST",
            "/users/generate_token",
            None,
            Some(json!({"email": "j@j.com", "password": "wrong"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.get("access_token").is_none());
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let app = app();

        let (status, body) = call(&app, "GET", "/health", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, _) = call(&app, "GET", "/ready", None, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_ready_reports_unreachable_database() {
        use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();
        let state = AppState {
            storage: Storage::Postgres(db),
            tokens: TokenIssuer::new(&JwtConfig::new(SECRET, 300)),
        };
        let app = create_router(routes(&state));

        let (status, body) = call(&app, "GET", "/ready", None, None).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (status, body) = call(&app(), "GET", "/orders", None, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["message"].is_string());
    }
}
