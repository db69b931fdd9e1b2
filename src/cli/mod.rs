//! CLI module
//!
//! Command-line entry point and the HTTP listener it starts.
//!
//! Every request, whatever its method or path, is acknowledged with a fixed
//! JSON reply. JSON bodies are logged and, when a format is configured,
//! rendered as a struct declaration.

mod commands;
mod runner;
mod server;

pub use commands::Cli;
pub use runner::{log_filter, Runner, DEFAULT_LOG_FILTER};
pub use server::{
    build_report, router, serve, serve_with_shutdown, RequestHead, RequestReport,
};
