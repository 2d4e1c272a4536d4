//! JSON configuration reader
//!
//! Uses serde_json, then transcodes into the engine's `serde_yaml::Value`
//! tree so both formats feed the same expansion pipeline.

use crate::error::IngressError;
use crate::readers::ConfigReader;
use serde_yaml::Value;

/// JSON reader
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReader;

impl ConfigReader for JsonReader {
    fn read(&self, content: &str) -> Result<Value, IngressError> {
        let json: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| IngressError::Syntax(format!("JSON parse error: {e}")))?;

        if json.is_null() {
            return Err(IngressError::EmptyDocument);
        }

        serde_yaml::to_value(&json)
            .map_err(|e| IngressError::Syntax(format!("JSON transcode error: {e}")))
    }

    fn extensions(&self) -> &[&str] {
        &["json"]
    }
}
