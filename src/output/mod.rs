//! Output module
//!
//! Formats decoded JSON for the request log.
//!
//! # Overview
//!
//! - `Compact`: a single `JSON-Body:` line with minimal JSON
//! - `Delimited`: 4-space indented JSON between `JSON START` / `JSON END` banners

mod printer;

pub use printer::{print, to_indented_string, PrintMode, DELIMITER, INDENT};
