//! Error types for the dashboard application.
//!
//! Each domain gets its own `thiserror` enum; [`Error`] aggregates them so callers can use
//! the `?` operator across domains.

pub mod api;
pub mod config;
pub mod route;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError, route::RouteTableError};

/// Main error type for the dashboard application.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid build-time environment values).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Route table construction error (duplicate or malformed paths).
    #[error(transparent)]
    RouteTableError(#[from] RouteTableError),
    /// Error talking to the auth API.
    #[error(transparent)]
    ApiError(#[from] ApiError),
}
