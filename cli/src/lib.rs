//! Command-line host for `asana-core`.
//!
//! Supplies what the core leaves to its caller: a network transport, the
//! bearer token, configuration and logging.

pub mod app;
pub mod commands;
pub mod config;
pub mod logging;
pub mod transport;

pub use app::run;
