//! # jsonschema-zod-cli
//!
//! CLI library for generating TypeScript Zod schemas from JSON Schema files.
//!
//! This crate provides the core functionality for the `jsonschema-zod` CLI
//! tool, including input loading, generation, sample inference, and file
//! output.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`input`] - Reading JSON documents and deriving output paths
//! - [`generator`] - Module generation using the `jsonschema-zod` library
//! - [`infer`] - JSON Schema inference from sample documents
//! - [`writer`] - File output and dry-run support
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod infer;
pub mod input;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::{CheckOutcome, SchemaGenerator};
pub use infer::{infer_file, InferOptions};
pub use writer::FileWriter;
