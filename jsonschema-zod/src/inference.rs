//! JSON Schema inference from sample documents.
//!
//! Produces a draft-07 schema describing the shape of one example value,
//! which can then be fed to the emitter. Every object key is marked
//! required and arrays are typed from their first element.

use serde_json::{json, Map, Value};

/// `$schema` URI attached by [`SchemaInferrer::infer_document`].
pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Infers JSON Schema from example values.
#[derive(Debug, Clone)]
pub struct SchemaInferrer {
    /// Descriptions keyed like the sample: a string describes that key, an
    /// object supplies descriptions for the key's children.
    descriptions: Value,
    /// Whether keys without a supplied description get `Description for <key>`.
    placeholders: bool,
}

impl Default for SchemaInferrer {
    fn default() -> Self {
        Self {
            descriptions: Value::Object(Map::new()),
            placeholders: true,
        }
    }
}

impl SchemaInferrer {
    /// Create an inferrer with no supplied descriptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply per-key descriptions.
    pub fn with_descriptions(mut self, descriptions: Value) -> Self {
        self.descriptions = descriptions;
        self
    }

    /// Set whether placeholder descriptions are generated.
    pub fn with_placeholders(mut self, placeholders: bool) -> Self {
        self.placeholders = placeholders;
        self
    }

    /// Infer a schema for `sample`.
    pub fn infer(&self, sample: &Value) -> Value {
        self.infer_value(sample, Some(&self.descriptions))
    }

    /// Infer a schema for `sample` and tag it as draft-07.
    pub fn infer_document(&self, sample: &Value) -> Value {
        let mut schema = self.infer(sample);
        if let Value::Object(obj) = &mut schema {
            obj.insert("$schema".to_string(), Value::String(DRAFT_07.to_string()));
        }
        schema
    }

    fn infer_value(&self, sample: &Value, descriptions: Option<&Value>) -> Value {
        match sample {
            Value::Object(fields) => {
                let mut properties = Map::new();
                let mut required = Vec::with_capacity(fields.len());

                for (key, value) in fields {
                    let supplied = descriptions.and_then(|d| d.get(key));
                    let nested = supplied.filter(|d| d.is_object());
                    let mut property = self.infer_value(value, nested);

                    // Scalars already carry their type description and keep it.
                    if let Value::Object(prop) = &mut property {
                        if !prop.contains_key("description") {
                            match supplied.and_then(Value::as_str).filter(|t| !t.is_empty()) {
                                Some(text) => {
                                    prop.insert("description".to_string(), json!(text));
                                }
                                None if self.placeholders => {
                                    prop.insert(
                                        "description".to_string(),
                                        json!(format!("Description for {key}")),
                                    );
                                }
                                None => {}
                            }
                        }
                    }

                    properties.insert(key.clone(), property);
                    required.push(Value::String(key.clone()));
                }

                json!({
                    "type": "object",
                    "properties": properties,
                    "required": required,
                })
            }
            Value::Array(items) => match items.first() {
                Some(first) => json!({
                    "type": "array",
                    "items": self.infer_value(first, descriptions),
                }),
                None => json!({ "type": "array", "items": {} }),
            },
            Value::String(_) => json!({ "type": "string", "description": "String value" }),
            Value::Bool(_) => json!({ "type": "boolean", "description": "Boolean value" }),
            Value::Number(n) if n.is_f64() => {
                json!({ "type": "number", "description": "Number value" })
            }
            Value::Number(_) => json!({ "type": "integer", "description": "Integer value" }),
            Value::Null => json!({ "type": "null", "description": "Null value" }),
        }
    }
}

/// Replace every leaf of `sample` with its JSON type name.
///
/// Arrays are outlined by their first element; an empty array becomes
/// `["empty_list"]`.
pub fn type_outline(sample: &Value) -> Value {
    match sample {
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), type_outline(value)))
                .collect(),
        ),
        Value::Array(items) => match items.first() {
            Some(first) => Value::Array(vec![type_outline(first)]),
            None => json!(["empty_list"]),
        },
        Value::String(_) => json!("string"),
        Value::Bool(_) => json!("boolean"),
        Value::Number(n) if n.is_f64() => json!("number"),
        Value::Number(_) => json!("integer"),
        Value::Null => json!("null"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_scalars() {
        let inferrer = SchemaInferrer::new();
        assert_eq!(
            inferrer.infer(&json!("x")),
            json!({ "type": "string", "description": "String value" })
        );
        assert_eq!(
            inferrer.infer(&json!(true)),
            json!({ "type": "boolean", "description": "Boolean value" })
        );
        assert_eq!(
            inferrer.infer(&json!(3)),
            json!({ "type": "integer", "description": "Integer value" })
        );
        assert_eq!(
            inferrer.infer(&json!(3.5)),
            json!({ "type": "number", "description": "Number value" })
        );
        assert_eq!(
            inferrer.infer(&json!(null)),
            json!({ "type": "null", "description": "Null value" })
        );
    }

    #[test]
    fn test_infer_object_marks_all_required() {
        let schema = SchemaInferrer::new().infer(&json!({ "b": 1, "a": { "c": [] } }));
        assert_eq!(
            schema,
            json!({
                "type": "object",
                "properties": {
                    "b": { "type": "integer", "description": "Integer value" },
                    "a": {
                        "type": "object",
                        "properties": {
                            "c": { "type": "array", "items": {}, "description": "Description for c" }
                        },
                        "required": ["c"],
                        "description": "Description for a"
                    }
                },
                "required": ["b", "a"]
            })
        );
    }

    #[test]
    fn test_infer_array_from_first_element() {
        let schema = SchemaInferrer::new().infer(&json!([{ "id": "x" }, 5]));
        assert_eq!(schema["type"], "array");
        assert_eq!(schema["items"]["type"], "object");
        assert_eq!(schema["items"]["required"], json!(["id"]));
    }

    #[test]
    fn test_supplied_descriptions() {
        let inferrer = SchemaInferrer::new().with_descriptions(json!({
            "trays": "Tray slots",
            "zone": { "door": "Door state" }
        }));
        let schema = inferrer.infer(&json!({
            "trays": [1, 2],
            "zone": { "door": { "open": true }, "fan": true }
        }));

        assert_eq!(schema["properties"]["trays"]["description"], "Tray slots");
        assert_eq!(schema["properties"]["zone"]["description"], "Description for zone");
        let zone = &schema["properties"]["zone"]["properties"];
        assert_eq!(zone["door"]["description"], "Door state");
        assert_eq!(zone["fan"]["description"], "Boolean value");
    }

    #[test]
    fn test_supplied_description_keeps_scalar_default() {
        let inferrer = SchemaInferrer::new().with_descriptions(json!({
            "name": "Oven name",
            "temp": "Temperature in C"
        }));
        let schema = inferrer.infer(&json!({ "name": "left", "temp": 180 }));

        assert_eq!(schema["properties"]["name"]["description"], "String value");
        assert_eq!(schema["properties"]["temp"]["description"], "Integer value");
    }

    #[test]
    fn test_placeholders_disabled() {
        let schema = SchemaInferrer::new()
            .with_placeholders(false)
            .infer(&json!({ "a": { "b": 1 } }));
        assert!(schema["properties"]["a"].get("description").is_none());
    }

    #[test]
    fn test_infer_document_adds_schema_uri() {
        let schema = SchemaInferrer::new().infer_document(&json!({ "a": 1 }));
        assert_eq!(schema["$schema"], DRAFT_07);
    }

    #[test]
    fn test_type_outline() {
        assert_eq!(
            type_outline(&json!({
                "name": "x",
                "count": 2,
                "ratio": 0.5,
                "on": false,
                "none": null,
                "tags": [],
                "zones": [{ "t": 1 }]
            })),
            json!({
                "name": "string",
                "count": "integer",
                "ratio": "number",
                "on": "boolean",
                "none": "null",
                "tags": ["empty_list"],
                "zones": [{ "t": "integer" }]
            })
        );
    }

    #[test]
    fn test_inferred_schema_translates() {
        let schema = SchemaInferrer::new().infer_document(&json!({
            "oven_id": "5b1e",
            "zones": [{ "temp": 180 }]
        }));
        let module = crate::generate(
            &crate::SchemaNode::from_value(&schema),
            &crate::GeneratorConfig::default().with_generate_docs(false),
        )
        .unwrap();

        assert!(module.content.contains("oven_id: z.string().uuid()"));
        assert!(module.content.contains("export const ZonesSchema = "));
        assert!(module.content.contains("zones: z.array(ZonesSchema)"));
    }
}
