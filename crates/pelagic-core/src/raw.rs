use std::ops::Deref;

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// A typed view over a JSON object that serializes back to the object it was
/// read from.
///
/// The view checks the object's shape and gives typed access to its fields.
/// Keys the view does not name, explicit nulls and absent optional fields all
/// survive a round trip, because only the object is ever written out.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw<T> {
    value: T,
    fields: Map<String, Value>,
}

impl<T> Raw<T> {
    /// Pair a view with the object to persist in its place.
    ///
    /// The caller keeps the two in agreement; serialization only reads `fields`.
    pub fn from_parts(value: T, fields: Map<String, Value>) -> Self {
        Self { value, fields }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl<T: DeserializeOwned> Raw<T> {
    /// Parse the typed view out of `fields`, keeping `fields` as written.
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let value = T::deserialize(Value::Object(fields.clone()))?;
        Ok(Self { value, fields })
    }
}

impl<T> Deref for Raw<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> Serialize for Raw<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Raw<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        Self::from_fields(fields).map_err(D::Error::custom)
    }
}

#[cfg(feature = "schema")]
impl<T: schemars::JsonSchema> schemars::JsonSchema for Raw<T> {
    fn inline_schema() -> bool {
        T::inline_schema()
    }

    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn schema_id() -> std::borrow::Cow<'static, str> {
        T::schema_id()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(generator)
    }
}
