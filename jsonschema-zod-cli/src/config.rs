//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `jsonschema-zod.toml`
//! files and merging with command-line arguments.

use std::path::{Path, PathBuf};

use jsonschema_zod::{CollisionPolicy, GeneratorConfig, IndentStyle, SignatureMode};
use serde::Deserialize;

use crate::error::{CliResult, ConfigError};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "jsonschema-zod.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Naming conventions.
    pub naming: NamingConfig,

    /// Sub-schema deduplication.
    pub dedup: DedupConfig,

    /// Safety limits.
    pub limits: LimitsConfig,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Suffix replacing the input's extension, e.g. `layout.json` → `layout.zod.ts`.
    pub suffix: String,

    /// Whether to generate type inference exports.
    pub generate_types: bool,

    /// Whether to generate `.describe()` from schema descriptions.
    pub generate_docs: bool,

    /// Whether to emit the auto-generated header.
    pub header: bool,

    /// Indentation inside object literals.
    pub indent: IndentStyle,
}

/// Naming convention configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Suffix for schema names.
    pub schema_suffix: String,

    /// Base name of the root declaration.
    pub root_name: String,
}

/// Deduplication configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DedupConfig {
    /// `exact` or `canonical`.
    pub signature: SignatureMode,

    /// `inline` or `disambiguate`.
    pub collisions: CollisionPolicy,
}

/// Limits configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum schema nesting depth.
    pub max_depth: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: ".zod.ts".to_string(),
            generate_types: true,
            generate_docs: true,
            header: true,
            indent: IndentStyle::default(),
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        Self {
            schema_suffix: generator.schema_suffix,
            root_name: generator.root_name,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_depth: jsonschema_zod::config::DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Build the generator configuration from these settings.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig::new()
            .with_indent(self.output.indent)
            .with_generate_types(self.output.generate_types)
            .with_generate_docs(self.output.generate_docs)
            .with_header(self.output.header)
            .with_schema_suffix(self.naming.schema_suffix.clone())
            .with_root_name(self.naming.root_name.clone())
            .with_signature(self.dedup.signature)
            .with_collisions(self.dedup.collisions)
            .with_max_depth(self.limits.max_depth)
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// An explicitly given path must exist. Without one, the default file
    /// in the working directory is used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::not_found(path.to_path_buf()).into());
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(CONFIG_FILENAME),
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        Self::parse(&content, config_path)
    }

    /// Parse configuration text read from `path`.
    pub fn parse(content: &str, path: PathBuf) -> CliResult<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::invalid_toml(path, e.to_string()))?;
        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref suffix) = args.suffix {
            config.output.suffix = suffix.clone();
        }

        if let Some(generate_types) = args.generate_types {
            config.output.generate_types = generate_types;
        }

        if let Some(generate_docs) = args.generate_docs {
            config.output.generate_docs = generate_docs;
        }

        if let Some(ref root_name) = args.root_name {
            config.naming.root_name = root_name.clone();
        }

        if let Some(signature) = args.signature {
            config.dedup.signature = signature;
        }

        if let Some(collisions) = args.collisions {
            config.dedup.collisions = collisions;
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# jsonschema-zod configuration file

[output]
# Suffix of the generated file, written beside the input schema
suffix = ".zod.ts"

# Whether to generate type inference exports (export type X = z.infer<typeof XSchema>)
generate_types = true

# Whether to generate .describe() calls from schema descriptions
generate_docs = true

# Whether to write the "Auto-generated" header comment
header = true

# Indentation inside objects (spaces2, spaces4, tabs)
indent = "spaces2"

[naming]
# Schema name suffix (e.g., ZonesSchema)
schema_suffix = "Schema"

# Name of the root declaration (RootSchema / Root)
root_name = "Root"

[dedup]
# How identical sub-schemas are detected:
#   exact     - same JSON text, key order matters
#   canonical - same JSON after sorting keys
signature = "exact"

# When two different shapes want the same name:
#   inline       - keep the first, expand the second inline
#   disambiguate - number the second (Item2Schema)
collisions = "inline"

[limits]
# Maximum nesting depth of the input schema
max_depth = 128
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output suffix override.
    pub suffix: Option<String>,

    /// Generate types override.
    pub generate_types: Option<bool>,

    /// Generate docs override.
    pub generate_docs: Option<bool>,

    /// Root name override.
    pub root_name: Option<String>,

    /// Signature mode override.
    pub signature: Option<SignatureMode>,

    /// Collision policy override.
    pub collisions: Option<CollisionPolicy>,
}
