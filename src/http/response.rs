//! Response shaping.
//!
//! # Responsibilities
//! - Serialize found records as JSON
//! - Collapse "not found" and failures into an empty 200 body
//!
//! # Design Decisions
//! - Callers cannot tell a missing record from a failed operation
//! - Both cases are still logged distinctly on the server

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::storage::{StoreError, StoreResult};

/// A JSON body, or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullableJson<T>(pub Option<T>);

impl<T> NullableJson<T> {
    pub fn null() -> Self {
        Self(None)
    }

    /// Collapse a storage result, logging `failure` for real errors.
    pub fn from_store(result: StoreResult<T>, failure: &'static str) -> Self {
        match result {
            Ok(value) => Self(Some(value)),
            Err(StoreError::NotFound { identification }) => {
                tracing::debug!(identification = %identification, "Persona no encontrada");
                Self::null()
            }
            Err(e) => {
                tracing::error!(error = %e, "{}", failure);
                Self::null()
            }
        }
    }
}

impl<T: Serialize> IntoResponse for NullableJson<T> {
    fn into_response(self) -> Response {
        match self.0 {
            Some(value) => Json(value).into_response(),
            None => StatusCode::OK.into_response(),
        }
    }
}
