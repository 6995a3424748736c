//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Check the docs path can live beside the API routes
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::ServiceConfig;
use crate::http::handlers::BASE_PATH;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    InvalidBindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("limits.max_body_bytes must be greater than zero")]
    ZeroBodyLimit,

    #[error("storage.capacity must be greater than zero when set")]
    ZeroCapacity,

    #[error("docs.path '{0}' must be an absolute, literal path usable as a Location header")]
    InvalidDocsPath(String),

    #[error("docs.path '{0}' overlaps the API base path")]
    DocsPathConflict(String),

    #[error("observability.log_level '{0}' is not a valid filter directive")]
    InvalidLogLevel(String),
}

/// True when `path` is `base` or lies in a segment below it.
fn is_under(path: &str, base: &str) -> bool {
    match path.strip_prefix(base) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if config.storage.capacity == Some(0) {
        errors.push(ValidationError::ZeroCapacity);
    }

    let docs_path = &config.docs.path;
    if !docs_path.starts_with('/')
        || docs_path.contains(|c: char| c == '{' || c == '}')
        || HeaderValue::from_str(docs_path).is_err()
    {
        errors.push(ValidationError::InvalidDocsPath(docs_path.clone()));
    } else if config.docs.enabled && is_under(docs_path, BASE_PATH) {
        errors.push(ValidationError::DocsPathConflict(docs_path.clone()));
    }

    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
