//! Decoder configuration

use serde::{Deserialize, Serialize};

/// Default maximum nesting depth of arrays and objects
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Configuration for decoding request bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Maximum number of nested arrays/objects. serde_json refuses anything
    /// past 128 regardless of this value.
    pub max_depth: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecoderConfig {
    /// Create a decoder config with a custom depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}
