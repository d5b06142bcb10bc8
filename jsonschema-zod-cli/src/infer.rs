//! Schema inference from sample JSON documents.

use std::path::Path;

use jsonschema_zod::{type_outline, SchemaInferrer};

use crate::error::CliResult;
use crate::input::read_json;

/// What to produce from a sample document.
#[derive(Debug, Default)]
pub struct InferOptions<'a> {
    /// JSON file with per-key descriptions.
    pub descriptions: Option<&'a Path>,
    /// Emit the type outline instead of a JSON Schema.
    pub outline: bool,
    /// Skip `Description for <key>` placeholders.
    pub no_placeholders: bool,
}

/// Infer a JSON Schema (or type outline) from `sample`, pretty-printed.
pub fn infer_file(sample: &Path, options: &InferOptions<'_>) -> CliResult<String> {
    let value = read_json(sample)?;

    let result = if options.outline {
        type_outline(&value)
    } else {
        let mut inferrer = SchemaInferrer::new().with_placeholders(!options.no_placeholders);
        if let Some(path) = options.descriptions {
            inferrer = inferrer.with_descriptions(read_json(path)?);
        }
        inferrer.infer_document(&value)
    };

    let mut text = serde_json::to_string_pretty(&result).map_err(std::io::Error::from)?;
    text.push('\n');
    Ok(text)
}
