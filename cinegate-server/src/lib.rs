//! HTTP surface of the Cinegate gateway.
//!
//! The binary entry point lives in `main.rs`; everything routable is
//! exported here so integration tests can build the exact production router
//! against their own configuration.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::config::Config;
