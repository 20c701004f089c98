use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A persisted content document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: u64,
    pub document_id: String,
    /// Content type UID, e.g. `api::home-page.home-page`.
    pub uid: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// String attribute of the document data, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.data.get(name).and_then(Value::as_str)
    }
}

/// Address of a value in the plugin key-value store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PluginStoreKey {
    pub environment: String,
    #[serde(rename = "type")]
    pub store_type: String,
    pub name: String,
    pub key: String,
}

impl PluginStoreKey {
    pub fn new(environment: &str, store_type: &str, name: &str, key: &str) -> Self {
        Self {
            environment: environment.to_string(),
            store_type: store_type.to_string(),
            name: name.to_string(),
            key: key.to_string(),
        }
    }

    /// Flat form used as a map key by the bundled stores.
    /// Format: {environment}:{type}:{name}:{key}
    pub fn flat(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.environment, self.store_type, self.name, self.key
        )
    }
}

/// JavaScript-style truthiness of a stored value. Unset counts as false.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
