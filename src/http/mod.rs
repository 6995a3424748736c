//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (x-request-id assigned, request span opened)
//!     → handlers.rs (decode, normalize, call PersonRepository)
//!     → response.rs (JSON body, or an empty 200 for "null")
//!     → Send to client
//! ```

pub mod docs;
pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestUuid, X_REQUEST_ID};
pub use response::NullableJson;
pub use server::{AppState, HttpServer};
