//! Request body decoder module
//!
//! Turns a raw JSON payload into a [`serde_json::Value`] tree.
//!
//! # Overview
//!
//! Objects keep the key order of the payload (`preserve_order`), so every
//! renderer downstream sees fields in the order the client sent them.
//! Nesting is bounded by [`DecoderConfig::max_depth`] on top of serde_json's
//! own recursion limit.

mod json;
mod types;

pub use json::{decode, JsonDecoder};
pub use types::{DecoderConfig, DEFAULT_MAX_DEPTH};
