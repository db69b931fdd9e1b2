//! Rendering types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Declaration syntax to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    /// Go struct with `json` tags
    Go,
    /// Rust struct with serde derives and rename attributes
    Rust,
}

impl RenderTarget {
    /// All supported targets
    pub const ALL: [RenderTarget; 2] = [RenderTarget::Go, RenderTarget::Rust];

    /// Selector string for this target
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderTarget::Go => "go",
            RenderTarget::Rust => "rust",
        }
    }

    /// Type text for a token in this target's vocabulary
    pub fn type_name(&self, token: TypeToken) -> &'static str {
        match (self, token) {
            (RenderTarget::Go, TypeToken::Boolean) => "bool",
            (RenderTarget::Go, TypeToken::Float) => "float64",
            (RenderTarget::Go, TypeToken::String) => "string",
            (RenderTarget::Go, TypeToken::Sequence) => "[]interface{}",
            (RenderTarget::Go, TypeToken::Map) => "map[string]interface{}",
            (RenderTarget::Go, TypeToken::Optional | TypeToken::Opaque) => "interface{}",

            (RenderTarget::Rust, TypeToken::Boolean) => "bool",
            (RenderTarget::Rust, TypeToken::Float) => "f64",
            (RenderTarget::Rust, TypeToken::String) => "String",
            (RenderTarget::Rust, TypeToken::Sequence) => "Vec<serde_json::Value>",
            (RenderTarget::Rust, TypeToken::Map) => "serde_json::Map<String, serde_json::Value>",
            (RenderTarget::Rust, TypeToken::Optional) => "Option<serde_json::Value>",
            (RenderTarget::Rust, TypeToken::Opaque) => "serde_json::Value",
        }
    }
}

impl FromStr for RenderTarget {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "go" => Ok(RenderTarget::Go),
            "rust" => Ok(RenderTarget::Rust),
            _ => Err(Error::unsupported_target(s)),
        }
    }
}

impl std::fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target-independent type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeToken {
    Boolean,
    /// Every JSON number, integral or not
    Float,
    String,
    Sequence,
    Map,
    /// A field whose value was `null`
    Optional,
    /// The synthetic field holding a non-object payload
    Opaque,
}

impl TypeToken {
    /// Infer the token for a JSON value
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => TypeToken::Optional,
            Value::Bool(_) => TypeToken::Boolean,
            Value::Number(_) => TypeToken::Float,
            Value::String(_) => TypeToken::String,
            Value::Array(_) => TypeToken::Sequence,
            Value::Object(_) => TypeToken::Map,
        }
    }
}

/// One field line's worth of information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEntry<'a> {
    /// Original key name
    pub key: &'a str,
    /// Inferred type
    pub token: TypeToken,
}

impl<'a> FieldEntry<'a> {
    /// Build an entry from a key/value pair
    pub fn new(key: &'a str, value: &Value) -> Self {
        Self {
            key,
            token: TypeToken::of(value),
        }
    }
}
