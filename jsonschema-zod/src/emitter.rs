//! Zod module emission.
//!
//! [`ZodEmitter`] runs the whole pipeline for one document:
//!
//! 1. discover reusable sub-schemas ([`crate::walker`])
//! 2. order them deepest first ([`order_by_depth`])
//! 3. translate each one, registering it as soon as it is emitted
//! 4. translate the root against the completed registry
//! 5. assemble declarations followed by `z.infer` type aliases

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::GenerateResult;
use crate::naming::{type_name, SchemaPath};
use crate::registry::{order_by_depth, ProcessedRegistry};
use crate::schema::SchemaNode;
use crate::translator::Translator;
use crate::walker::discover;

/// Header emitted at the top of every generated module.
pub const HEADER: &str = "// Auto-generated by jsonschema-zod\n// Do not edit manually\n\n";

/// Import line for the zod runtime.
pub const IMPORT: &str = "import { z } from 'zod';\n\n";

/// One `export const` declaration and its type alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Schema constant name, e.g. `ZonesSchema`.
    pub schema_name: String,
    /// Type alias name, e.g. `Zones`.
    pub type_name: String,
    /// Where the shape was first observed; the root path for the root.
    pub path: SchemaPath,
    /// The Zod expression bound to the constant.
    pub expression: String,
}

/// Result of emitting one schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// Full TypeScript source text.
    pub content: String,
    /// Declarations in emission order; the root is last.
    pub declarations: Vec<Declaration>,
}

impl GeneratedModule {
    /// The root declaration.
    pub fn root(&self) -> Option<&Declaration> {
        self.declarations.last()
    }

    /// Extracted sub-schema declarations, without the root.
    pub fn sub_schemas(&self) -> &[Declaration] {
        let len = self.declarations.len().saturating_sub(1);
        &self.declarations[..len]
    }
}

/// Emits a complete Zod module for a JSON Schema document.
#[derive(Debug, Clone, Default)]
pub struct ZodEmitter {
    config: GeneratorConfig,
}

impl ZodEmitter {
    /// Create a new emitter with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Get the emitter configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the module for `root`.
    pub fn emit(&self, root: &SchemaNode) -> GenerateResult<GeneratedModule> {
        let config = &self.config;
        let entries = order_by_depth(discover(root, config)?);

        let mut registry = ProcessedRegistry::new();
        let mut declarations = Vec::with_capacity(entries.len() + 1);

        for entry in entries {
            let expression = Translator::new(&registry, config).translate(entry.node, 0, None)?;
            registry.register(entry.signature, entry.name.clone());
            debug!(name = %entry.name, path = %entry.path, "emitted sub-schema");

            declarations.push(Declaration {
                type_name: type_name(&entry.name, &config.schema_suffix),
                schema_name: entry.name,
                path: entry.path,
                expression,
            });
        }

        let expression = Translator::new(&registry, config).translate(root, 0, None)?;
        let schema_name = config.root_schema_name();
        declarations.push(Declaration {
            type_name: type_name(&schema_name, &config.schema_suffix),
            schema_name,
            path: SchemaPath::root(),
            expression,
        });

        Ok(GeneratedModule {
            content: self.render(&declarations),
            declarations,
        })
    }

    fn render(&self, declarations: &[Declaration]) -> String {
        let mut output = String::new();

        if self.config.header {
            output.push_str(HEADER);
        }
        output.push_str(IMPORT);

        let consts: Vec<String> = declarations
            .iter()
            .map(|d| format!("export const {} = {};\n", d.schema_name, d.expression))
            .collect();
        output.push_str(&consts.join("\n"));

        if self.config.generate_types {
            output.push('\n');
            for d in declarations {
                output.push_str(&format!(
                    "export type {} = z.infer<typeof {}>;\n",
                    d.type_name, d.schema_name
                ));
            }
        }

        output
    }
}
