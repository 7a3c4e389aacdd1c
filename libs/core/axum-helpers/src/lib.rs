//! # Axum Helpers
//!
//! Hosting layer for remote-callable operations served over Axum.
//!
//! ## Modules
//!
//! - **[`callable`]**: `{"data": ...}` request extractor, `{"result": ...}`
//!   responses and structured `{"error": ...}` failures
//! - **[`server`]**: router assembly, health checks, graceful shutdown

pub mod callable;
pub mod server;

pub use callable::{
    CallableError, CallableErrorBody, CallableRequest, CallableResponse, CallableResult,
    CallableStatus, function_not_found, method_not_allowed,
};

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_production_app, create_router,
    health_router, run_health_checks, shutdown_signal,
};
