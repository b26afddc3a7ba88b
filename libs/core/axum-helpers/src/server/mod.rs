//! Server infrastructure module.
//!
//! This module provides:
//! - Router setup with request tracing and a JSON 404 fallback
//! - Graceful shutdown with bounded cleanup
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router};
//!
//! let router = create_router(api_routes);
//! create_app(router, &config.server, Duration::from_secs(30), cleanup).await?;
//! ```

pub mod app;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_app, create_router};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
