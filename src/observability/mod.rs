//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers / storage / lifecycle
//!     → tracing macros (structured fields)
//!     → logging.rs subscriber (EnvFilter + fmt layer)
//!     → stdout (pretty or JSON lines)
//!
//! HTTP requests:
//!     → TraceLayer span per request, tagged with x-request-id
//! ```
//!
//! # Design Decisions
//! - Structured logging; JSON for machine parsing, pretty for development
//! - Request ID flows into every request span
//! - No metrics endpoint

pub mod logging;

pub use logging::init_logging;
