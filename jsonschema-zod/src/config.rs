//! Generator configuration.
//!
//! [`GeneratorConfig`] carries every knob that affects the emitted text.
//! Builder methods follow the `with_*` convention.

use serde::{Deserialize, Serialize};

/// Default suffix appended to generated schema names.
pub const DEFAULT_SCHEMA_SUFFIX: &str = "Schema";

/// Default base name of the root declaration.
pub const DEFAULT_ROOT_NAME: &str = "Root";

/// Default maximum nesting depth accepted by the walker and translator.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for Zod code generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Indentation used inside object literals.
    pub indent: IndentStyle,

    /// Suffix appended to every schema constant (`ZonesSchema`).
    pub schema_suffix: String,

    /// Base name of the root declaration (`RootSchema` / `Root`).
    pub root_name: String,

    /// Whether to emit `z.infer` type aliases.
    pub generate_types: bool,

    /// Whether to emit `.describe(...)` from schema descriptions.
    pub generate_docs: bool,

    /// Whether to emit the "auto-generated" header comment.
    pub header: bool,

    /// How node signatures are computed for deduplication.
    pub signature: SignatureMode,

    /// What happens when two distinct shapes want the same name.
    pub collisions: CollisionPolicy,

    /// Maximum nesting depth before generation fails.
    pub max_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: IndentStyle::default(),
            schema_suffix: DEFAULT_SCHEMA_SUFFIX.to_string(),
            root_name: DEFAULT_ROOT_NAME.to_string(),
            generate_types: true,
            generate_docs: true,
            header: true,
            signature: SignatureMode::default(),
            collisions: CollisionPolicy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation style.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Set the schema name suffix.
    pub fn with_schema_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.schema_suffix = suffix.into();
        self
    }

    /// Set the root declaration name.
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }

    /// Set whether to generate type inference.
    pub fn with_generate_types(mut self, generate: bool) -> Self {
        self.generate_types = generate;
        self
    }

    /// Set whether to generate `.describe()` calls.
    pub fn with_generate_docs(mut self, generate: bool) -> Self {
        self.generate_docs = generate;
        self
    }

    /// Set whether to emit the header comment.
    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Set the signature mode.
    pub fn with_signature(mut self, mode: SignatureMode) -> Self {
        self.signature = mode;
        self
    }

    /// Set the name collision policy.
    pub fn with_collisions(mut self, policy: CollisionPolicy) -> Self {
        self.collisions = policy;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Full name of the root schema constant.
    pub fn root_schema_name(&self) -> String {
        format!("{}{}", self.root_name, self.schema_suffix)
    }
}

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Use spaces for indentation (default: 2 spaces)
    #[default]
    Spaces2,

    /// Use 4 spaces for indentation
    Spaces4,

    /// Use tabs for indentation
    Tabs,
}

impl IndentStyle {
    /// Get the indentation string.
    pub fn as_str(&self) -> &str {
        match self {
            IndentStyle::Spaces2 => "  ",
            IndentStyle::Spaces4 => "    ",
            IndentStyle::Tabs => "\t",
        }
    }

    /// Create an indentation string for the given depth.
    pub fn indent(&self, depth: usize) -> String {
        self.as_str().repeat(depth)
    }
}

/// How a node's deduplication signature is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureMode {
    /// Compact JSON text in source key order. Nodes that declare the same
    /// keys in a different order are distinct.
    #[default]
    Exact,

    /// Compact JSON text with object keys sorted recursively.
    Canonical,
}

/// Behavior when a distinct shape generates a name that is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Leave the later shape un-extracted; it is expanded inline.
    #[default]
    Inline,

    /// Append a counter before the suffix (`Item2Schema`).
    Disambiguate,
}
