//! Application state management

use axum_helpers::TokenIssuer;
use database::postgres::DatabaseConnection;

/// Backing store chosen at startup
#[derive(Clone)]
pub enum Storage {
    Postgres(DatabaseConnection),
    Memory,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub tokens: TokenIssuer,
}
