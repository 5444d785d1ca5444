//! # shelf-cli
//!
//! The `shelf` binary: loads a snapshot, runs one request against the
//! recommendation engine and renders the result as a table or JSON.

pub mod app;
pub mod cli;
pub mod commands;
pub mod output;
pub mod tracing_setup;

pub use app::AppContext;
pub use cli::{Cli, Commands};
