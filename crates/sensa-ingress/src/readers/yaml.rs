//! YAML configuration reader
//!
//! Uses serde_yaml. Multi-document streams are accepted; the first
//! document is the configuration (sensitivity documents are single-doc by
//! convention, extra documents are ignored).

use crate::error::IngressError;
use crate::readers::ConfigReader;
use serde::Deserialize;
use serde_yaml::Value;

/// YAML reader
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlReader;

impl ConfigReader for YamlReader {
    fn read(&self, content: &str) -> Result<Value, IngressError> {
        let de = serde_yaml::Deserializer::from_str(content);
        let mut documents = Vec::new();

        for doc in de {
            let value = Value::deserialize(doc)
                .map_err(|e| IngressError::Syntax(format!("YAML parse error: {e}")))?;
            documents.push(value);
        }

        documents
            .into_iter()
            .find(|doc| !matches!(doc, Value::Null))
            .ok_or(IngressError::EmptyDocument)
    }

    fn extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}
