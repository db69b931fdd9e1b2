//! Struct declaration rendering module
//!
//! Renders the shape of a decoded JSON value as a Go or Rust struct.
//!
//! # Features
//!
//! - **Type Inference**: Picks a type token from each field's JSON kind
//! - **Two Targets**: Go struct tags or serde-annotated Rust structs
//! - **Ordered Fields**: Field lines follow the payload's key order
//!
//! Rendering is shallow: nested objects and arrays become generic map and
//! sequence types instead of separate named declarations.

mod render;
mod types;

pub use render::{render, SchemaRenderer, DEFAULT_STRUCT_NAME};
pub use types::{FieldEntry, RenderTarget, TypeToken};

#[cfg(test)]
mod tests;
