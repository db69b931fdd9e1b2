//! Struct declaration rendering from JSON values

use super::types::{FieldEntry, RenderTarget, TypeToken};
use crate::error::Result;
use serde_json::Value;
use std::fmt::Write as _;

/// Name given to the rendered declaration
pub const DEFAULT_STRUCT_NAME: &str = "GeneratedStruct";

const INDENT: &str = "    ";

/// Renders one struct declaration per value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRenderer {
    target: RenderTarget,
    struct_name: String,
}

impl SchemaRenderer {
    /// Create a renderer for a target
    pub fn new(target: RenderTarget) -> Self {
        Self {
            target,
            struct_name: DEFAULT_STRUCT_NAME.to_string(),
        }
    }

    /// Override the declaration name
    #[must_use]
    pub fn with_struct_name(mut self, name: impl Into<String>) -> Self {
        self.struct_name = name.into();
        self
    }

    /// Target this renderer emits
    pub fn target(&self) -> RenderTarget {
        self.target
    }

    /// Collect the field entries for the top level of a value
    ///
    /// Non-object values yield an empty list; they are rendered through the
    /// synthetic payload field instead.
    pub fn fields<'a>(&self, value: &'a Value) -> Vec<FieldEntry<'a>> {
        match value {
            Value::Object(map) => map
                .iter()
                .map(|(key, val)| FieldEntry::new(key, val))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Render the declaration for a value
    pub fn render(&self, value: &Value) -> String {
        let body = match value {
            Value::Object(_) => {
                let mut body = String::new();
                for field in self.fields(value) {
                    self.write_field(&mut body, &field);
                }
                body
            }
            _ => self.payload_field(),
        };

        match self.target {
            RenderTarget::Go => format!("type {} struct {{\n{body}}}", self.struct_name),
            RenderTarget::Rust => format!(
                "#[derive(Debug, Serialize, Deserialize)]\nstruct {} {{\n{body}}}",
                self.struct_name
            ),
        }
    }

    fn write_field(&self, out: &mut String, field: &FieldEntry<'_>) {
        let ty = self.target.type_name(field.token);
        let key = field.key;
        // Writing into a String cannot fail
        let _ = match self.target {
            RenderTarget::Go => writeln!(out, "{INDENT}{key} {ty} `json:\"{key}\"`"),
            RenderTarget::Rust => writeln!(
                out,
                "{INDENT}#[serde(rename = \"{key}\")]\n{INDENT}{key}: {ty},"
            ),
        };
    }

    /// Single field standing in for a payload that is not an object
    fn payload_field(&self) -> String {
        let ty = self.target.type_name(TypeToken::Opaque);
        match self.target {
            RenderTarget::Go => format!("{INDENT}Data {ty} `json:\"data\"`\n"),
            RenderTarget::Rust => format!("{INDENT}data: {ty},\n"),
        }
    }
}

/// Render a value for a target given by name (convenience function)
///
/// Fails with `UnsupportedTarget` before producing any text when `target` is
/// neither `go` nor `rust`.
pub fn render(value: &Value, target: &str) -> Result<String> {
    let target: RenderTarget = target.parse()?;
    Ok(SchemaRenderer::new(target).render(value))
}
