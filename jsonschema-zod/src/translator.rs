//! JSON Schema node to Zod expression translation.
//!
//! [`Translator`] maps one [`SchemaNode`] to the text of a Zod builder
//! expression. Every call first consults the [`ProcessedRegistry`]: a node
//! whose signature is already bound is replaced by the declaration name.
//!
//! # Mappings
//!
//! | JSON Schema | Zod |
//! |-------------|-----|
//! | `string` | `z.string()` |
//! | `string` + uuid pattern or uuid-like field | `z.string().uuid()` |
//! | `string` + other `pattern` | `z.string().regex(/.../)` |
//! | `format: date-time` | `.datetime()` |
//! | `number` / `integer` | `z.number()` / `z.number().int()` |
//! | `boolean` / `null` | `z.boolean()` / `z.null()` |
//! | `array` | `z.array(T)` with `.length()` or `.min()`/`.max()` |
//! | `object` + `properties` | `z.object({ ... })` |
//! | `object` + `additionalProperties` | `z.record(z.string(), V)` |
//! | `enum` | `z.enum([...])` or `z.union([z.literal(...), ...])` |
//! | `["T", "null"]` | `T.nullable()` |
//! | `["A", "B"]` | `z.union([A, B])` |
//! | anything else | `z.any()` |

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;
use tracing::trace;

use crate::config::GeneratorConfig;
use crate::error::{GenerateError, GenerateResult};
use crate::naming::SchemaPath;
use crate::registry::ProcessedRegistry;
use crate::schema::{AdditionalProperties, SchemaNode, TypeSpec, TypeTag};

static HEX_GROUP_RE: OnceLock<Regex> = OnceLock::new();

/// Translates schema nodes against a processed registry.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'r> {
    registry: &'r ProcessedRegistry,
    config: &'r GeneratorConfig,
}

impl<'r> Translator<'r> {
    /// Create a translator reading from `registry`.
    pub fn new(registry: &'r ProcessedRegistry, config: &'r GeneratorConfig) -> Self {
        Self { registry, config }
    }

    /// Translate `node` to a Zod expression.
    ///
    /// `depth` only controls indentation of object literals. `field_name` is
    /// the enclosing property name, used to infer uuid strings.
    pub fn translate(
        &self,
        node: &SchemaNode,
        depth: usize,
        field_name: Option<&str>,
    ) -> GenerateResult<String> {
        self.translate_node(node, depth, field_name, &SchemaPath::root())
    }

    fn translate_node(
        &self,
        node: &SchemaNode,
        depth: usize,
        field_name: Option<&str>,
        path: &SchemaPath,
    ) -> GenerateResult<String> {
        let signature = node.signature(self.config.signature);
        if let Some(name) = self.registry.lookup(&signature) {
            trace!(name, path = %path, "substituted registered sub-schema");
            return Ok(name.to_string());
        }

        if path.depth() > self.config.max_depth {
            return Err(GenerateError::depth_limit(
                path.to_string(),
                self.config.max_depth,
            ));
        }

        let tag = match &node.ty {
            Some(TypeSpec::Many(tags)) => {
                return self.translate_multi(node, tags, depth, field_name, path)
            }
            Some(TypeSpec::Single(tag)) => Some(tag),
            None => None,
        };

        if let Some(values) = &node.enum_values {
            return Ok(self.describe(enum_expr(values), node));
        }

        let expr = match tag {
            Some(TypeTag::String) => self.describe(string_expr(node, field_name), node),
            Some(TypeTag::Number) => self.describe(number_expr(node, false), node),
            Some(TypeTag::Integer) => self.describe(number_expr(node, true), node),
            Some(TypeTag::Boolean) => self.describe("z.boolean()".to_string(), node),
            Some(TypeTag::Null) => "z.null()".to_string(),
            Some(TypeTag::Array) => self.array_expr(node, depth, path)?,
            Some(TypeTag::Object) => self.object_expr(node, depth, path)?,
            Some(TypeTag::Other(_)) | None => "z.any()".to_string(),
        };
        Ok(expr)
    }

    /// `type` given as a list: nullable collapse or union.
    fn translate_multi(
        &self,
        node: &SchemaNode,
        tags: &[TypeTag],
        depth: usize,
        field_name: Option<&str>,
        path: &SchemaPath,
    ) -> GenerateResult<String> {
        let (nulls, others): (Vec<&TypeTag>, Vec<&TypeTag>) =
            tags.iter().partition(|tag| **tag == TypeTag::Null);
        let nullable = !nulls.is_empty();

        let base = match others.as_slice() {
            [] if nullable => return Ok("z.null()".to_string()),
            [] => return Ok("z.any()".to_string()),
            [single] => {
                self.translate_node(&node.with_single_type(single), depth, field_name, path)?
            }
            many => {
                let variants = many
                    .iter()
                    .map(|tag| {
                        self.translate_node(&node.with_single_type(tag), depth, field_name, path)
                    })
                    .collect::<GenerateResult<Vec<_>>>()?;
                format!("z.union([{}])", variants.join(", "))
            }
        };

        let expr = if nullable {
            format!("{base}.nullable()")
        } else {
            base
        };
        Ok(self.describe(expr, node))
    }

    fn array_expr(
        &self,
        node: &SchemaNode,
        depth: usize,
        path: &SchemaPath,
    ) -> GenerateResult<String> {
        let Some(items) = &node.items else {
            return Ok("z.array(z.any())".to_string());
        };

        let inner = self.translate_node(items, depth, None, &path.items())?;
        let mut expr = format!("z.array({inner})");

        match (node.min_items, node.max_items) {
            (Some(min), Some(max)) if min == max => {
                expr.push_str(&format!(".length({min})"));
            }
            (min, max) => {
                if let Some(min) = min {
                    expr.push_str(&format!(".min({min})"));
                }
                if let Some(max) = max {
                    expr.push_str(&format!(".max({max})"));
                }
            }
        }

        Ok(self.describe(expr, node))
    }

    fn object_expr(
        &self,
        node: &SchemaNode,
        depth: usize,
        path: &SchemaPath,
    ) -> GenerateResult<String> {
        if let Some(properties) = &node.properties {
            if properties.is_empty() {
                return Ok(self.describe("z.object({})".to_string(), node));
            }

            let indent = self.config.indent.indent(depth + 1);
            let fields = properties
                .iter()
                .map(|(name, child)| {
                    let value = self.translate_node(
                        child,
                        depth + 1,
                        Some(name.as_str()),
                        &path.property(name),
                    )?;
                    let optional = if node.is_required(name) {
                        ""
                    } else {
                        ".optional()"
                    };
                    Ok(format!("{indent}{}: {value}{optional}", property_key(name)))
                })
                .collect::<GenerateResult<Vec<_>>>()?;

            let expr = format!(
                "z.object({{\n{}\n{}}})",
                fields.join(",\n"),
                self.config.indent.indent(depth)
            );
            return Ok(self.describe(expr, node));
        }

        match &node.additional_properties {
            Some(AdditionalProperties::Schema(value)) => {
                let value = self.translate_node(value, depth, None, &path.property("*"))?;
                Ok(format!("z.record(z.string(), {value})"))
            }
            Some(AdditionalProperties::Flag(true)) => {
                Ok("z.record(z.string(), z.any())".to_string())
            }
            _ => Ok("z.object({})".to_string()),
        }
    }

    /// Append `.describe(...)` when docs are enabled and a description exists.
    fn describe(&self, mut expr: String, node: &SchemaNode) -> String {
        if self.config.generate_docs {
            if let Some(description) = &node.description {
                expr.push_str(&format!(".describe(\"{}\")", escape_string(description)));
            }
        }
        expr
    }
}

fn string_expr(node: &SchemaNode, field_name: Option<&str>) -> String {
    let mut expr = String::from("z.string()");

    match node.pattern.as_deref() {
        Some(pattern) if is_uuid_pattern(pattern) => expr.push_str(".uuid()"),
        Some(pattern) => expr.push_str(&format!(".regex(/{}/)", escape_regex(pattern))),
        None if field_name.is_some_and(is_uuid_field) => expr.push_str(".uuid()"),
        None => {}
    }

    if node.format.as_deref() == Some("date-time") {
        expr.push_str(".datetime()");
    }

    expr
}

fn number_expr(node: &SchemaNode, integer: bool) -> String {
    let mut expr = String::from("z.number()");
    if integer {
        expr.push_str(".int()");
    }
    if let Some(min) = &node.minimum {
        expr.push_str(&format!(".min({min})"));
    }
    if let Some(max) = &node.maximum {
        expr.push_str(&format!(".max({max})"));
    }
    expr
}

fn enum_expr(values: &[Value]) -> String {
    if !values.is_empty() && values.iter().all(Value::is_string) {
        let members: Vec<String> = values.iter().map(Value::to_string).collect();
        return format!("z.enum([{}])", members.join(", "));
    }

    let literals: Vec<String> = values.iter().map(literal_expr).collect();
    match literals.as_slice() {
        [] => "z.never()".to_string(),
        [single] => single.clone(),
        _ => format!("z.union([{}])", literals.join(", ")),
    }
}

fn literal_expr(value: &Value) -> String {
    match value {
        Value::Null => "z.null()".to_string(),
        Value::Bool(_) | Value::Number(_) | Value::String(_) => format!("z.literal({value})"),
        // z.literal only accepts primitives
        Value::Array(_) | Value::Object(_) => "z.any()".to_string(),
    }
}

/// Whether a pattern contains an 8-hex-digit group such as `[0-9a-fA-F]{8}`.
fn is_uuid_pattern(pattern: &str) -> bool {
    let re = HEX_GROUP_RE
        .get_or_init(|| Regex::new(r"\[([^\]]+)\]\{8\}").expect("Invalid regex"));

    re.captures_iter(pattern).any(|caps| {
        let class = caps[1].replace("\\d", "0-9");
        class
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, 'a'..='f' | 'A'..='F' | '-'))
            && class.chars().any(|c| matches!(c, 'a'..='f' | 'A'..='F'))
    })
}

/// Whether a field name suggests a uuid value.
pub fn is_uuid_field(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower == "uuid" || lower.ends_with("_id") || lower.contains("uuid") || lower.contains("guid")
}

/// Render a property key, quoting it unless it is a plain identifier.
fn property_key(name: &str) -> String {
    let mut chars = name.chars();
    let is_ident = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_' || first == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        None => false,
    };

    if is_ident {
        name.to_string()
    } else {
        format!("\"{}\"", escape_string(name))
    }
}

/// Escape a string for use in JavaScript string literals.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Escape a pattern for a JavaScript regex literal.
///
/// Unescaped forward slashes would terminate the literal; an empty pattern
/// would open a comment.
fn escape_regex(pattern: &str) -> String {
    if pattern.is_empty() {
        return "(?:)".to_string();
    }

    let mut out = String::with_capacity(pattern.len());
    let mut escaped = false;
    for c in pattern.chars() {
        match c {
            '/' if !escaped => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
        escaped = c == '\\' && !escaped;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IndentStyle, SignatureMode};
    use serde_json::json;

    fn translate(value: serde_json::Value) -> String {
        translate_with(value, &GeneratorConfig::default())
    }

    fn translate_with(value: serde_json::Value, config: &GeneratorConfig) -> String {
        let registry = ProcessedRegistry::new();
        let node = SchemaNode::from_value(&value);
        Translator::new(&registry, config)
            .translate(&node, 0, None)
            .unwrap()
    }

    fn translate_field(value: serde_json::Value, field: &str) -> String {
        let registry = ProcessedRegistry::new();
        let config = GeneratorConfig::default();
        let node = SchemaNode::from_value(&value);
        Translator::new(&registry, &config)
            .translate(&node, 0, Some(field))
            .unwrap()
    }

    // =========================================================================
    // Scalar Tests
    // =========================================================================

    #[test]
    fn test_plain_string() {
        assert_eq!(translate(json!({ "type": "string" })), "z.string()");
    }

    #[test]
    fn test_string_pattern_becomes_regex() {
        assert_eq!(
            translate(json!({ "type": "string", "pattern": "^[A-Z]{3}$" })),
            "z.string().regex(/^[A-Z]{3}$/)"
        );
    }

    #[test]
    fn test_string_pattern_slashes_are_escaped() {
        assert_eq!(
            translate(json!({ "type": "string", "pattern": "^a/b\\/c$" })),
            "z.string().regex(/^a\\/b\\/c$/)"
        );
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(
            translate(json!({ "type": "string", "pattern": "" })),
            "z.string().regex(/(?:)/)"
        );
    }

    #[test]
    fn test_uuid_pattern_becomes_uuid() {
        let pattern = "^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";
        assert_eq!(
            translate(json!({ "type": "string", "pattern": pattern })),
            "z.string().uuid()"
        );
        assert_eq!(
            translate(json!({ "type": "string", "pattern": "^[a-f\\d]{8}-" })),
            "z.string().uuid()"
        );
    }

    #[test]
    fn test_digit_only_group_is_not_uuid() {
        assert_eq!(
            translate(json!({ "type": "string", "pattern": "^[0-9]{8}$" })),
            "z.string().regex(/^[0-9]{8}$/)"
        );
    }

    #[test]
    fn test_uuid_field_name_heuristic() {
        let string = json!({ "type": "string" });
        assert_eq!(translate_field(string.clone(), "uuid"), "z.string().uuid()");
        assert_eq!(translate_field(string.clone(), "UUID"), "z.string().uuid()");
        assert_eq!(translate_field(string.clone(), "oven_id"), "z.string().uuid()");
        assert_eq!(translate_field(string.clone(), "deviceGuid"), "z.string().uuid()");
        assert_eq!(translate_field(string.clone(), "parentUuidRef"), "z.string().uuid()");
        assert_eq!(translate_field(string.clone(), "id"), "z.string()");
        assert_eq!(translate_field(string, "identity"), "z.string()");
    }

    #[test]
    fn test_explicit_pattern_beats_field_heuristic() {
        assert_eq!(
            translate_field(json!({ "type": "string", "pattern": "^x+$" }), "oven_id"),
            "z.string().regex(/^x+$/)"
        );
    }

    #[test]
    fn test_datetime_format() {
        assert_eq!(
            translate(json!({ "type": "string", "format": "date-time" })),
            "z.string().datetime()"
        );
        assert_eq!(
            translate_field(json!({ "type": "string", "format": "date-time" }), "created_id"),
            "z.string().uuid().datetime()"
        );
    }

    #[test]
    fn test_other_formats_are_ignored() {
        assert_eq!(
            translate(json!({ "type": "string", "format": "email" })),
            "z.string()"
        );
    }

    #[test]
    fn test_number_and_integer() {
        assert_eq!(translate(json!({ "type": "number" })), "z.number()");
        assert_eq!(translate(json!({ "type": "integer" })), "z.number().int()");
        assert_eq!(
            translate(json!({ "type": "integer", "minimum": 0, "maximum": 300 })),
            "z.number().int().min(0).max(300)"
        );
        assert_eq!(
            translate(json!({ "type": "number", "maximum": 2.5 })),
            "z.number().max(2.5)"
        );
        assert_eq!(
            translate(json!({ "type": "number", "minimum": -40 })),
            "z.number().min(-40)"
        );
    }

    #[test]
    fn test_boolean_and_null() {
        assert_eq!(translate(json!({ "type": "boolean" })), "z.boolean()");
        assert_eq!(
            translate(json!({ "type": "null", "description": "nothing" })),
            "z.null()"
        );
    }

    #[test]
    fn test_unknown_and_absent_types() {
        assert_eq!(translate(json!({ "type": "decimal" })), "z.any()");
        assert_eq!(translate(json!({})), "z.any()");
        assert_eq!(translate(json!({ "description": "free" })), "z.any()");
    }

    // =========================================================================
    // Description Tests
    // =========================================================================

    #[test]
    fn test_description_is_last() {
        assert_eq!(
            translate(json!({
                "type": "string",
                "format": "date-time",
                "description": "When \"baked\"\nfinished"
            })),
            "z.string().datetime().describe(\"When \\\"baked\\\"\\nfinished\")"
        );
    }

    #[test]
    fn test_descriptions_disabled() {
        let config = GeneratorConfig::default().with_generate_docs(false);
        assert_eq!(
            translate_with(json!({ "type": "boolean", "description": "On" }), &config),
            "z.boolean()"
        );
    }

    // =========================================================================
    // Enum Tests
    // =========================================================================

    #[test]
    fn test_string_enum() {
        assert_eq!(
            translate(json!({ "type": "string", "enum": ["bake", "grill", "steam"] })),
            "z.enum([\"bake\", \"grill\", \"steam\"])"
        );
    }

    #[test]
    fn test_mixed_enum_uses_literals() {
        assert_eq!(
            translate(json!({ "enum": [1, "two", true, null] })),
            "z.union([z.literal(1), z.literal(\"two\"), z.literal(true), z.null()])"
        );
    }

    #[test]
    fn test_single_and_empty_enum() {
        assert_eq!(translate(json!({ "enum": [3] })), "z.literal(3)");
        assert_eq!(translate(json!({ "enum": [] })), "z.never()");
    }

    #[test]
    fn test_enum_with_description() {
        assert_eq!(
            translate(json!({ "enum": ["a"], "description": "Mode" })),
            "z.enum([\"a\"]).describe(\"Mode\")"
        );
    }

    // =========================================================================
    // Multi-type Tests
    // =========================================================================

    #[test]
    fn test_nullable_datetime() {
        assert_eq!(
            translate(json!({ "type": ["string", "null"], "format": "date-time" })),
            "z.string().datetime().nullable()"
        );
    }

    #[test]
    fn test_nullable_description_after_nullable() {
        assert_eq!(
            translate(json!({ "type": ["integer", "null"], "description": "Count" })),
            "z.number().int().nullable().describe(\"Count\")"
        );
    }

    #[test]
    fn test_union_of_types() {
        assert_eq!(
            translate(json!({ "type": ["string", "integer"], "minimum": 1 })),
            "z.union([z.string(), z.number().int().min(1)])"
        );
    }

    #[test]
    fn test_nullable_union() {
        assert_eq!(
            translate(json!({
                "type": ["string", "number", "null"],
                "description": "Value"
            })),
            "z.union([z.string(), z.number()]).nullable().describe(\"Value\")"
        );
    }

    #[test]
    fn test_degenerate_type_lists() {
        assert_eq!(translate(json!({ "type": ["null"] })), "z.null()");
        assert_eq!(translate(json!({ "type": [] })), "z.any()");
        assert_eq!(translate(json!({ "type": ["boolean"] })), "z.boolean()");
    }

    #[test]
    fn test_multi_type_passes_field_name() {
        assert_eq!(
            translate_field(json!({ "type": ["string", "null"] }), "tray_id"),
            "z.string().uuid().nullable()"
        );
    }

    // =========================================================================
    // Array Tests
    // =========================================================================

    #[test]
    fn test_exact_length_array() {
        assert_eq!(
            translate(json!({
                "type": "array",
                "items": { "type": "integer" },
                "minItems": 3,
                "maxItems": 3
            })),
            "z.array(z.number().int()).length(3)"
        );
    }

    #[test]
    fn test_array_bounds() {
        assert_eq!(
            translate(json!({
                "type": "array",
                "items": { "type": "string" },
                "minItems": 1,
                "maxItems": 4
            })),
            "z.array(z.string()).min(1).max(4)"
        );
        assert_eq!(
            translate(json!({ "type": "array", "items": { "type": "string" }, "maxItems": 2 })),
            "z.array(z.string()).max(2)"
        );
    }

    #[test]
    fn test_array_without_items() {
        assert_eq!(translate(json!({ "type": "array" })), "z.array(z.any())");
    }

    #[test]
    fn test_nested_arrays() {
        assert_eq!(
            translate(json!({
                "type": "array",
                "items": { "type": "array", "items": { "type": "number" } },
                "description": "Grid"
            })),
            "z.array(z.array(z.number())).describe(\"Grid\")"
        );
    }

    // =========================================================================
    // Object Tests
    // =========================================================================

    #[test]
    fn test_object_required_and_optional() {
        assert_eq!(
            translate(json!({
                "type": "object",
                "properties": {
                    "uuid": { "type": "string" },
                    "label": { "type": "string" }
                },
                "required": ["uuid"]
            })),
            "z.object({\n  uuid: z.string().uuid(),\n  label: z.string().optional()\n})"
        );
    }

    #[test]
    fn test_nested_object_indentation() {
        assert_eq!(
            translate(json!({
                "type": "object",
                "properties": {
                    "door": {
                        "type": "object",
                        "properties": { "open": { "type": "boolean" } },
                        "required": ["open"]
                    }
                },
                "required": ["door"]
            })),
            "z.object({\n  door: z.object({\n    open: z.boolean()\n  })\n})"
        );
    }

    #[test]
    fn test_object_indentation_style() {
        let config = GeneratorConfig::default().with_indent(IndentStyle::Tabs);
        assert_eq!(
            translate_with(
                json!({ "type": "object", "properties": { "a": { "type": "number" } } }),
                &config
            ),
            "z.object({\n\ta: z.number().optional()\n})"
        );
    }

    #[test]
    fn test_quoted_property_keys() {
        assert_eq!(
            translate(json!({
                "type": "object",
                "properties": { "heat-zone": { "type": "number" }, "$ok": { "type": "number" } },
                "required": ["heat-zone", "$ok"]
            })),
            "z.object({\n  \"heat-zone\": z.number(),\n  $ok: z.number()\n})"
        );
    }

    #[test]
    fn test_object_description() {
        assert_eq!(
            translate(json!({
                "type": "object",
                "description": "Door",
                "properties": { "open": { "type": "boolean" } },
                "required": ["open"]
            })),
            "z.object({\n  open: z.boolean()\n}).describe(\"Door\")"
        );
    }

    #[test]
    fn test_record_objects() {
        assert_eq!(
            translate(json!({ "type": "object", "additionalProperties": { "type": "number" } })),
            "z.record(z.string(), z.number())"
        );
        assert_eq!(
            translate(json!({ "type": "object", "additionalProperties": true })),
            "z.record(z.string(), z.any())"
        );
        assert_eq!(
            translate(json!({ "type": "object", "additionalProperties": false })),
            "z.object({})"
        );
        assert_eq!(translate(json!({ "type": "object" })), "z.object({})");
        assert_eq!(
            translate(json!({ "type": "object", "properties": {} })),
            "z.object({})"
        );
    }

    // =========================================================================
    // Registry Substitution Tests
    // =========================================================================

    #[test]
    fn test_registered_node_is_substituted() {
        let zone = json!({ "type": "object", "properties": { "t": { "type": "number" } } });
        let config = GeneratorConfig::default();
        let mut registry = ProcessedRegistry::new();
        registry.register(
            SchemaNode::from_value(&zone).signature(SignatureMode::Exact),
            "ZoneSchema",
        );

        let root = SchemaNode::from_value(&json!({
            "type": "object",
            "properties": { "left": zone, "right": zone },
            "required": ["left"]
        }));
        let expr = Translator::new(&registry, &config)
            .translate(&root, 0, None)
            .unwrap();

        assert_eq!(
            expr,
            "z.object({\n  left: ZoneSchema,\n  right: ZoneSchema.optional()\n})"
        );
    }

    #[test]
    fn test_nullable_variant_matches_registered_shape() {
        let door = json!({ "type": "object", "properties": { "open": { "type": "boolean" } } });
        let config = GeneratorConfig::default();
        let mut registry = ProcessedRegistry::new();
        registry.register(
            SchemaNode::from_value(&door).signature(SignatureMode::Exact),
            "DoorSchema",
        );

        let nullable = json!({
            "type": ["object", "null"],
            "properties": { "open": { "type": "boolean" } }
        });
        let node = SchemaNode::from_value(&nullable);
        let expr = Translator::new(&registry, &config)
            .translate(&node, 0, None)
            .unwrap();
        assert_eq!(expr, "DoorSchema.nullable()");
    }

    #[test]
    fn test_depth_limit() {
        let config = GeneratorConfig::default().with_max_depth(1);
        let registry = ProcessedRegistry::new();
        let node = SchemaNode::from_value(&json!({
            "type": "array",
            "items": { "type": "array", "items": { "type": "string" } }
        }));
        let err = Translator::new(&registry, &config)
            .translate(&node, 0, None)
            .unwrap_err();
        assert_eq!(err, GenerateError::depth_limit("[].[]", 1));
    }

    // =========================================================================
    // Helper Tests
    // =========================================================================

    #[test]
    fn test_escape_regex_keeps_escaped_slashes() {
        assert_eq!(escape_regex("a\\/b"), "a\\/b");
        assert_eq!(escape_regex("a\\\\/b"), "a\\\\\\/b");
        assert_eq!(escape_regex("a/b"), "a\\/b");
    }

    #[test]
    fn test_property_key() {
        assert_eq!(property_key("name"), "name");
        assert_eq!(property_key("_x1"), "_x1");
        assert_eq!(property_key("1st"), "\"1st\"");
        assert_eq!(property_key(""), "\"\"");
        assert_eq!(property_key("a b"), "\"a b\"");
    }
}
