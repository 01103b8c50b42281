//! Element adapter over the JSON form of vendor messages.
//!
//! A message is `{"messageType": "...", "body": {...}}`. Objects are complex
//! elements, arrays are sequences whose values inherit the array's name, and
//! everything else is a scalar leaf. Strings shaped like ISO dates surface as
//! date values.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::element::Element;
use crate::transport::Message;
use crate::Value;

/// A vendor message held as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonMessage {
    #[serde(rename = "messageType")]
    message_type: String,
    #[serde(default)]
    body: Json,
}

impl JsonMessage {
    /// Wrap a message body under its declared type.
    pub fn new(message_type: impl Into<String>, body: Json) -> Self {
        Self {
            message_type: message_type.into(),
            body,
        }
    }

    /// Message body.
    #[must_use]
    pub const fn body(&self) -> &Json {
        &self.body
    }
}

impl Message for JsonMessage {
    type Element<'a> = JsonElement<'a>;

    fn message_type(&self) -> &str {
        &self.message_type
    }

    fn root(&self) -> JsonElement<'_> {
        JsonElement {
            name: &self.message_type,
            node: &self.body,
        }
    }
}

/// Borrowed handle to one node of a [`JsonMessage`].
#[derive(Debug, Clone, Copy)]
pub struct JsonElement<'a> {
    name: &'a str,
    node: &'a Json,
}

impl<'a> JsonElement<'a> {
    /// View an arbitrary JSON node as an element named `name`.
    #[must_use]
    pub const fn new(name: &'a str, node: &'a Json) -> Self {
        Self { name, node }
    }
}

impl Element for JsonElement<'_> {
    fn name(&self) -> &str {
        self.name
    }

    fn field(&self, name: &str) -> Option<Self> {
        let map = self.node.as_object()?;
        let (k, v) = map.get_key_value(name)?;
        Some(JsonElement { name: k, node: v })
    }

    fn field_count(&self) -> usize {
        self.node.as_object().map_or(0, serde_json::Map::len)
    }

    fn field_at(&self, index: usize) -> Option<Self> {
        let (k, v) = self.node.as_object()?.iter().nth(index)?;
        Some(JsonElement { name: k, node: v })
    }

    fn value_count(&self) -> usize {
        match self.node {
            Json::Array(items) => items.len(),
            Json::Null => 0,
            _ => 1,
        }
    }

    fn value_at(&self, index: usize) -> Option<Self> {
        match self.node {
            Json::Array(items) => items.get(index).map(|node| JsonElement {
                name: self.name,
                node,
            }),
            Json::Null => None,
            _ => (index == 0).then_some(*self),
        }
    }

    fn is_array(&self) -> bool {
        self.node.is_array()
    }

    fn scalar(&self) -> Value {
        match self.node {
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Missing),
            Json::String(s) => parse_temporal(s).unwrap_or_else(|| Value::String(s.clone())),
            Json::Null | Json::Array(_) | Json::Object(_) => Value::Missing,
        }
    }
}

fn parse_temporal(s: &str) -> Option<Value> {
    if s.len() == 10 {
        return NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(Value::Date);
    }
    if s.len() >= 19 && s.as_bytes().get(10) == Some(&b'T') {
        return NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(Value::Datetime);
    }
    None
}
