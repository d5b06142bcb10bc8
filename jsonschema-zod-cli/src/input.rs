//! Reading input documents and deriving output paths.

use std::path::{Path, PathBuf};

use jsonschema_zod::SchemaNode;
use serde_json::Value;

use crate::error::{CliResult, InputError};

/// Read and parse a JSON document.
///
/// The whole file is read and parsed before anything else happens, so a
/// failure here never leaves partial output behind.
pub fn read_json(path: &Path) -> CliResult<Value> {
    if !path.is_file() {
        return Err(InputError::not_found(path.to_path_buf()).into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value = serde_json::from_str(&content)
        .map_err(|e| InputError::parse(path.to_path_buf(), &e))?;
    Ok(value)
}

/// Read a JSON Schema file.
pub fn load_schema(path: &Path) -> CliResult<SchemaNode> {
    let value = read_json(path)?;
    Ok(SchemaNode::from_value(&value))
}

/// Path of the generated file for `input`: same directory, same stem,
/// `suffix` in place of the extension.
pub fn output_path_for(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schema".to_string());
    input.with_file_name(format!("{stem}{suffix}"))
}
