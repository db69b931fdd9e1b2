//! JSON payload decoder

use super::types::DecoderConfig;
use crate::error::{Error, Result};
use serde_json::Value;

/// JSON decoder with a nesting depth guard
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder {
    config: DecoderConfig,
}

impl JsonDecoder {
    /// Create a new JSON decoder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a JSON decoder from a config
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Create a JSON decoder with a custom depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self::with_config(DecoderConfig::with_max_depth(max_depth))
    }

    /// Maximum nesting depth accepted by this decoder
    pub fn max_depth(&self) -> usize {
        self.config.max_depth
    }

    /// Decode a raw payload into a value tree
    ///
    /// An empty payload is an error here; callers that treat "no body" as a
    /// normal case should check the length first.
    pub fn decode(&self, body: &[u8]) -> Result<Value> {
        if body.is_empty() {
            return Err(Error::decode("empty payload"));
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| Error::decode(e.to_string()))?;

        check_depth(&value, self.config.max_depth)?;
        Ok(value)
    }
}

/// Decode a payload with the default depth limit (convenience function)
pub fn decode(body: &[u8]) -> Result<Value> {
    JsonDecoder::new().decode(body)
}

/// Walk the tree without recursion and reject containers nested past `max_depth`
fn check_depth(value: &Value, max_depth: usize) -> Result<()> {
    let mut stack: Vec<(&Value, usize)> = vec![(value, 1)];

    while let Some((current, depth)) = stack.pop() {
        match current {
            Value::Array(items) => {
                if depth > max_depth {
                    return Err(too_deep(max_depth));
                }
                stack.extend(items.iter().map(|item| (item, depth + 1)));
            }
            Value::Object(map) => {
                if depth > max_depth {
                    return Err(too_deep(max_depth));
                }
                stack.extend(map.values().map(|item| (item, depth + 1)));
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
        }
    }

    Ok(())
}

fn too_deep(max_depth: usize) -> Error {
    Error::decode(format!("nesting exceeds maximum depth of {max_depth}"))
}
