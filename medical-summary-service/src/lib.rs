pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod service;
pub mod tasks;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{CompletionLimits, ConfigError, ServiceConfig};
pub use error::ApiError;
pub use models::*;
pub use service::{AppState, create_app};
