//! In-memory person storage.
//!
//! # Data Flow
//! ```text
//! http handlers (normalized Person)
//!     → repository.rs (linear scan over Vec<Person>)
//!     → StoreResult<T> / DeleteOutcome back to the handler
//! ```
//!
//! # Design Decisions
//! - One ordered Vec behind a RwLock: writes serialized, reads concurrent
//! - Insertion order is the only order; updates and deletes keep positions
//! - No index: lookups are O(n) and return the first match
//! - Nothing survives a restart

pub mod error;
pub mod repository;

pub use error::{StoreError, StoreResult};
pub use repository::{DeleteOutcome, PersonRepository};
