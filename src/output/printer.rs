//! JSON pretty printer

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Banner line framing delimited output, including its leading newline
pub const DELIMITER: &str = "\n==========";

/// Indentation used for multi-line JSON
pub const INDENT: &[u8] = b"    ";

/// How decoded JSON is rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintMode {
    /// Single line prefixed with `JSON-Body:`
    #[default]
    Compact,
    /// Indented JSON between start/end banners
    Delimited,
}

impl PrintMode {
    /// Mode selected by the `--pretty` flag
    pub fn from_pretty(pretty: bool) -> Self {
        if pretty {
            PrintMode::Delimited
        } else {
            PrintMode::Compact
        }
    }
}

/// Render a value for display
///
/// Serialization of a decoded tree does not fail in practice; if it does,
/// the error text is returned in place of the JSON.
pub fn print(value: &Value, mode: PrintMode) -> String {
    let rendered = match mode {
        PrintMode::Compact => serde_json::to_string(value)
            .map(|json| format!("JSON-Body: {json}"))
            .map_err(Error::from),
        PrintMode::Delimited => to_indented_string(value).map(|json| {
            format!("{DELIMITER}\nJSON START{DELIMITER}\n{json}\n{DELIMITER}\nJSON END{DELIMITER}")
        }),
    };

    rendered.unwrap_or_else(|e| format!("Error formatting JSON: {e}"))
}

/// Serialize any value as JSON indented with [`INDENT`]
pub fn to_indented_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| Error::Other(format!("JSON output was not UTF-8: {e}")))
}
