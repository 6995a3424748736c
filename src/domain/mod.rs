//! Domain model.
//!
//! # Data Flow
//! ```text
//! JSON body
//!     → person.rs (Person / Address, wire field names)
//!     → normalize.rs (uppercase pass, write paths only)
//!     → storage (held verbatim)
//! ```
//!
//! # Design Decisions
//! - Plain value types; an update replaces the whole record
//! - Addresses are owned by their person, never shared
//! - Wire names follow the existing API, typos included

pub mod normalize;
pub mod person;

pub use normalize::{upper_case, Normalize};
pub use person::{Address, AddressType, Person};
