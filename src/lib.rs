// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # reqparser
//!
//! A catch-all HTTP listener for inspecting JSON requests. Every JSON body
//! it receives is logged and, optionally, rendered as a Go or Rust struct
//! declaration describing its shape.
//!
//! ## Quick Start
//!
//! ```rust
//! use reqparser::{decode, print, render, PrintMode};
//!
//! let value = decode(br#"{"name":"test","value":123}"#).unwrap();
//!
//! assert_eq!(print(&value, PrintMode::Compact), r#"JSON-Body: {"name":"test","value":123}"#);
//!
//! let declaration = render(&value, "go").unwrap();
//! assert!(declaration.contains("value float64"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │              Request Handler (catch-all route)               │
//! │   Content-Type: application/json && body non-empty           │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ bytes
//!                        ┌───────┴───────┐
//!                        │    Decoder    │  depth-limited
//!                        └───────┬───────┘
//!                                │ serde_json::Value
//!                 ┌──────────────┴──────────────┐
//!          ┌──────┴──────┐               ┌──────┴──────┐
//!          │   Printer   │               │  Renderer   │
//!          │ compact     │               │ go          │
//!          │ delimited   │               │ rust        │
//!          └─────────────┘               └─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Request body decoding
pub mod decode;

/// Struct declaration rendering
pub mod schema;

/// JSON printing for the request log
pub mod output;

/// Server configuration
pub mod config;

/// Command-line interface and HTTP listener
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::ServerConfig;
pub use decode::{decode, JsonDecoder};
pub use error::{Error, Result};
pub use output::{print, PrintMode};
pub use schema::{render, RenderTarget, SchemaRenderer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
