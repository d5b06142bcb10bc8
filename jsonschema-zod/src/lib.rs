//! # jsonschema-zod
//!
//! Translate JSON Schema documents into TypeScript [Zod](https://zod.dev/)
//! validators plus `z.infer` type aliases.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonschema_zod::{generate_from_str, GeneratorConfig};
//!
//! let schema = r#"{
//!     "type": "object",
//!     "properties": { "uuid": { "type": "string" } },
//!     "required": ["uuid"]
//! }"#;
//!
//! let module = generate_from_str(schema, &GeneratorConfig::default()).unwrap();
//! assert!(module.content.contains("uuid: z.string().uuid()"));
//! assert!(module.content.contains("export type Root = z.infer<typeof RootSchema>;"));
//! ```
//!
//! ## Pipeline
//!
//! - [`walker`] finds non-root object shapes worth extracting, deduplicated
//!   by [`Signature`]
//! - [`registry`] orders them deepest first and records emitted names
//! - [`translator`] maps each node to a Zod expression, substituting names
//!   of already emitted shapes
//! - [`emitter`] assembles the module text
//!
//! [`inference`] produces a JSON Schema from a sample document for inputs
//! that have no schema yet.

pub mod config;
pub mod emitter;
pub mod error;
pub mod inference;
pub mod naming;
pub mod registry;
pub mod schema;
pub mod translator;
pub mod walker;

pub use config::{CollisionPolicy, GeneratorConfig, IndentStyle, SignatureMode};
pub use emitter::{Declaration, GeneratedModule, ZodEmitter};
pub use error::{GenerateError, GenerateResult};
pub use inference::{type_outline, SchemaInferrer};
pub use schema::{SchemaNode, Signature, TypeSpec, TypeTag};

/// Generate a Zod module for a parsed schema.
pub fn generate(root: &SchemaNode, config: &GeneratorConfig) -> GenerateResult<GeneratedModule> {
    ZodEmitter::new(config.clone()).emit(root)
}

/// Parse `input` as JSON and generate a Zod module for it.
pub fn generate_from_str(input: &str, config: &GeneratorConfig) -> GenerateResult<GeneratedModule> {
    let root: SchemaNode = input.parse()?;
    generate(&root, config)
}
