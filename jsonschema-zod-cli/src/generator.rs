//! Schema file generation.
//!
//! Ties input loading, the [`jsonschema_zod`] emitter, and output path
//! resolution together for the `generate` and `check` commands.

use std::path::{Path, PathBuf};

use jsonschema_zod::{GeneratedModule, ZodEmitter};
use tracing::info;

use crate::config::Config;
use crate::error::CliResult;
use crate::input::{load_schema, output_path_for};

/// Generated module together with its destination.
#[derive(Debug)]
pub struct GeneratedOutput {
    /// Where the module belongs.
    pub path: PathBuf,
    /// The generated module.
    pub module: GeneratedModule,
}

/// Outcome of comparing a generated module with the file on disk.
#[derive(Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The file matches freshly generated output.
    UpToDate,
    /// The file differs from freshly generated output.
    Stale,
    /// The file does not exist.
    Missing,
}

/// Generates Zod modules for schema files.
#[derive(Debug)]
pub struct SchemaGenerator {
    config: Config,
}

impl SchemaGenerator {
    /// Create a new generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Generate the module for `input`.
    ///
    /// The destination is `output` when given, otherwise beside the input.
    pub fn generate(&self, input: &Path, output: Option<&Path>) -> CliResult<GeneratedOutput> {
        let schema = load_schema(input)?;
        let emitter = ZodEmitter::new(self.config.generator_config());
        let module = emitter.emit(&schema)?;

        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| output_path_for(input, &self.config.output.suffix));

        info!(
            input = %input.display(),
            declarations = module.declarations.len(),
            "generated module"
        );

        Ok(GeneratedOutput { path, module })
    }

    /// Regenerate `input` in memory and compare with the existing output.
    pub fn check(&self, input: &Path, output: Option<&Path>) -> CliResult<(PathBuf, CheckOutcome)> {
        let generated = self.generate(input, output)?;

        if !generated.path.exists() {
            return Ok((generated.path, CheckOutcome::Missing));
        }

        let existing = std::fs::read_to_string(&generated.path)?;
        let outcome = if existing.trim_end() == generated.module.content.trim_end() {
            CheckOutcome::UpToDate
        } else {
            CheckOutcome::Stale
        };
        Ok((generated.path, outcome))
    }
}
