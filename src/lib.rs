//! In-memory person registry served over HTTP.

pub mod config;
pub mod domain;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod storage;

pub use config::schema::ServiceConfig;
pub use domain::{Address, AddressType, Person};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use storage::PersonRepository;
