//! Typed view of a JSON Schema node.
//!
//! [`SchemaNode`] is parsed best-effort from a [`serde_json::Value`]:
//! keywords with an unexpected shape are dropped instead of rejected, and
//! the original JSON is kept alongside so that a node's [`Signature`]
//! reflects the input text exactly.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::config::SignatureMode;
use crate::error::GenerateError;

/// A single JSON Schema `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    Number,
    Integer,
    Boolean,
    Null,
    Array,
    Object,
    /// A tag this generator does not know; translated to `z.any()`.
    Other(String),
}

impl TypeTag {
    /// Parse a tag name.
    pub fn parse(name: &str) -> Self {
        match name {
            "string" => TypeTag::String,
            "number" => TypeTag::Number,
            "integer" => TypeTag::Integer,
            "boolean" => TypeTag::Boolean,
            "null" => TypeTag::Null,
            "array" => TypeTag::Array,
            "object" => TypeTag::Object,
            other => TypeTag::Other(other.to_string()),
        }
    }

    /// The JSON Schema spelling of this tag.
    pub fn as_str(&self) -> &str {
        match self {
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Integer => "integer",
            TypeTag::Boolean => "boolean",
            TypeTag::Null => "null",
            TypeTag::Array => "array",
            TypeTag::Object => "object",
            TypeTag::Other(name) => name,
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `type` keyword: either one tag or a list of tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    Single(TypeTag),
    Many(Vec<TypeTag>),
}

impl TypeSpec {
    /// Whether the given tag is listed.
    pub fn contains(&self, tag: &TypeTag) -> bool {
        match self {
            TypeSpec::Single(t) => t == tag,
            TypeSpec::Many(tags) => tags.contains(tag),
        }
    }
}

/// The `additionalProperties` keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum AdditionalProperties {
    Flag(bool),
    Schema(Box<SchemaNode>),
}

/// One node of a JSON Schema document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaNode {
    pub ty: Option<TypeSpec>,
    /// Child schemas in declaration order.
    pub properties: Option<IndexMap<String, SchemaNode>>,
    pub items: Option<Box<SchemaNode>>,
    pub required: Vec<String>,
    pub enum_values: Option<Vec<Value>>,
    pub pattern: Option<String>,
    pub format: Option<String>,
    pub description: Option<String>,
    pub minimum: Option<Number>,
    pub maximum: Option<Number>,
    pub min_items: Option<u64>,
    pub max_items: Option<u64>,
    pub additional_properties: Option<AdditionalProperties>,
    raw: Value,
}

impl SchemaNode {
    /// Build a node from a JSON value.
    ///
    /// Never fails: a non-object value yields a node with no keywords,
    /// which translates to `z.any()`.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self {
                raw: value.clone(),
                ..Self::default()
            };
        };

        let ty = obj.get("type").and_then(parse_type_spec);

        let properties = obj.get("properties").and_then(Value::as_object).map(|props| {
            props
                .iter()
                .map(|(name, child)| (name.clone(), SchemaNode::from_value(child)))
                .collect()
        });

        let items = obj
            .get("items")
            .filter(|v| v.is_object())
            .map(|v| Box::new(SchemaNode::from_value(v)));

        let required = obj
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let additional_properties = match obj.get("additionalProperties") {
            Some(Value::Bool(flag)) => Some(AdditionalProperties::Flag(*flag)),
            Some(v @ Value::Object(_)) => Some(AdditionalProperties::Schema(Box::new(
                SchemaNode::from_value(v),
            ))),
            _ => None,
        };

        Self {
            ty,
            properties,
            items,
            required,
            enum_values: obj.get("enum").and_then(Value::as_array).cloned(),
            pattern: string_keyword(obj, "pattern"),
            format: string_keyword(obj, "format"),
            description: string_keyword(obj, "description"),
            minimum: number_keyword(obj, "minimum"),
            maximum: number_keyword(obj, "maximum"),
            min_items: obj.get("minItems").and_then(Value::as_u64),
            max_items: obj.get("maxItems").and_then(Value::as_u64),
            additional_properties,
            raw: value.clone(),
        }
    }

    /// The JSON this node was parsed from.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Whether `name` is listed in `required`.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Whether the node's type names `object`.
    pub fn is_object(&self) -> bool {
        self.has_type(&TypeTag::Object)
    }

    /// Whether the node's type names `array`.
    pub fn is_array(&self) -> bool {
        self.has_type(&TypeTag::Array)
    }

    fn has_type(&self, tag: &TypeTag) -> bool {
        self.ty.as_ref().is_some_and(|ty| ty.contains(tag))
    }

    /// Copy of this node narrowed to one type tag, without its description.
    ///
    /// Used for the variants of a multi-type node; the raw JSON is updated
    /// too so that a variant can match an extracted sub-schema.
    pub fn with_single_type(&self, tag: &TypeTag) -> SchemaNode {
        let mut variant = self.clone();
        variant.ty = Some(TypeSpec::Single(tag.clone()));
        variant.description = None;
        if let Value::Object(obj) = &mut variant.raw {
            obj.insert("type".to_string(), Value::String(tag.as_str().to_string()));
            obj.shift_remove("description");
        }
        variant
    }

    /// Deduplication key for this node.
    pub fn signature(&self, mode: SignatureMode) -> Signature {
        match mode {
            SignatureMode::Exact => Signature(self.raw.to_string()),
            SignatureMode::Canonical => Signature(canonicalize(&self.raw).to_string()),
        }
    }
}

impl FromStr for SchemaNode {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Ok(SchemaNode::from_value(&value))
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(SchemaNode::from_value(&value))
    }
}

impl Serialize for SchemaNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Serialized text of a node, used as the deduplication key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_type_spec(value: &Value) -> Option<TypeSpec> {
    match value {
        Value::String(name) => Some(TypeSpec::Single(TypeTag::parse(name))),
        Value::Array(names) => Some(TypeSpec::Many(
            names
                .iter()
                .filter_map(Value::as_str)
                .map(TypeTag::parse)
                .collect(),
        )),
        _ => None,
    }
}

fn string_keyword(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn number_keyword(obj: &Map<String, Value>, key: &str) -> Option<Number> {
    match obj.get(key) {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

/// Recursively sort object keys.
fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(obj) => {
            let mut entries: Vec<_> = obj.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), canonicalize(v)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}
