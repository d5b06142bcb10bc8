//! # jsonschema-zod
//!
//! CLI tool for generating TypeScript Zod schemas from JSON Schema files.
//!
//! ## Usage
//!
//! ```bash
//! # Generate oven_layout.zod.ts beside the schema
//! jsonschema-zod schemas/oven_layout.json
//!
//! # Write somewhere else
//! jsonschema-zod generate schemas/oven_layout.json --output src/zod/oven.ts
//!
//! # Dry run to preview the module
//! jsonschema-zod schemas/oven_layout.json --dry-run
//!
//! # Fail (exit 2) when the generated file is out of date
//! jsonschema-zod check schemas/oven_layout.json
//!
//! # Infer a JSON Schema from a sample document
//! jsonschema-zod infer sample.json -o schemas/oven_layout.json
//!
//! # Initialize configuration
//! jsonschema-zod init
//! ```

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use jsonschema_zod::{CollisionPolicy, SignatureMode};
use jsonschema_zod_cli::{
    config::{CliArgs, ConfigManager, CONFIG_FILENAME},
    error::{CliError, InputError},
    generator::{CheckOutcome, SchemaGenerator},
    infer::{infer_file, InferOptions},
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "jsonschema-zod")]
#[command(author, version, about = "Generate TypeScript Zod schemas from JSON Schema", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Zod module from a JSON Schema file
    Generate(GenerateArgs),

    /// Check that a generated module is up-to-date
    Check {
        /// JSON Schema file
        schema: PathBuf,

        /// Generated module to compare against
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Infer a JSON Schema from a sample JSON document
    Infer {
        /// Sample JSON document
        sample: PathBuf,

        /// Write the schema here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the type outline instead of a schema
        #[arg(long)]
        outline: bool,

        /// JSON file with per-key descriptions
        #[arg(long)]
        descriptions: Option<PathBuf>,

        /// Leave properties without a description undocumented
        #[arg(long)]
        no_placeholders: bool,
    },

    /// Initialize a new jsonschema-zod configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = CONFIG_FILENAME)]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct GenerateArgs {
    /// JSON Schema file
    schema: Option<PathBuf>,

    /// Output file (defaults to <stem><suffix> beside the schema)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Preview the module without writing it
    #[arg(long)]
    dry_run: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output suffix replacing the schema's extension
    #[arg(long)]
    suffix: Option<String>,

    /// Base name of the root declaration
    #[arg(long)]
    root_name: Option<String>,

    /// Omit the `export type` lines
    #[arg(long)]
    no_types: bool,

    /// Omit `.describe()` calls
    #[arg(long)]
    no_docs: bool,

    /// How identical sub-schemas are detected (exact, canonical)
    #[arg(long, value_parser = parse_signature)]
    signature: Option<SignatureMode>,

    /// What to do when two shapes want the same name (inline, disambiguate)
    #[arg(long, value_parser = parse_collisions)]
    collisions: Option<CollisionPolicy>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e {
                CliError::Validation(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        None => cmd_generate(cli.generate),
        Some(Commands::Generate(args)) => cmd_generate(args),

        Some(Commands::Check {
            schema,
            output,
            config,
        }) => cmd_check(schema, output, config),

        Some(Commands::Infer {
            sample,
            output,
            outline,
            descriptions,
            no_placeholders,
        }) => cmd_infer(sample, output, outline, descriptions, no_placeholders),

        Some(Commands::Init { output, force }) => cmd_init(output, force),
    }
}

/// Generate command implementation.
fn cmd_generate(args: GenerateArgs) -> Result<(), CliError> {
    let schema = args.schema.ok_or(InputError::Missing)?;

    let config = ConfigManager::load(args.config.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            generate_types: args.no_types.then_some(false),
            generate_docs: args.no_docs.then_some(false),
            suffix: args.suffix,
            root_name: args.root_name,
            signature: args.signature,
            collisions: args.collisions,
        },
    );

    let generator = SchemaGenerator::new(config);
    let output = generator.generate(&schema, args.output.as_deref())?;

    println!(
        "{} {} declaration(s) from {}",
        "Generated".cyan(),
        output.module.declarations.len().to_string().green(),
        schema.display()
    );

    let writer = FileWriter::new(args.dry_run);

    match writer.write(&output.path, &output.module.content)? {
        WriteResult::Written { path, bytes } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteResult::Unchanged { path } => {
            println!("{} {} is up-to-date", "✓".green(), path.display());
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            println!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Check command implementation.
fn cmd_check(
    schema: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let generator = SchemaGenerator::new(config);

    let (path, outcome) = generator.check(&schema, output.as_deref())?;

    match outcome {
        CheckOutcome::UpToDate => {
            println!("{} {} is up-to-date", "✓".green(), path.display());
            Ok(())
        }
        CheckOutcome::Stale => {
            println!("{} {} is out of date", "✗".red(), path.display());
            println!("  Run 'jsonschema-zod {}' to update", schema.display());
            Err(CliError::Validation(format!(
                "{} is out of date",
                path.display()
            )))
        }
        CheckOutcome::Missing => Err(CliError::Validation(format!(
            "Generated file not found: {}",
            path.display()
        ))),
    }
}

/// Infer command implementation.
fn cmd_infer(
    sample: PathBuf,
    output: Option<PathBuf>,
    outline: bool,
    descriptions: Option<PathBuf>,
    no_placeholders: bool,
) -> Result<(), CliError> {
    let options = InferOptions {
        descriptions: descriptions.as_deref(),
        outline,
        no_placeholders,
    };
    let text = infer_file(&sample, &options)?;

    match output {
        None => print!("{}", text),
        Some(path) => {
            let result = FileWriter::new(false).write(&path, &text)?;
            println!("{} Schema written to {}", "✓".green(), result.path().display());
        }
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(format!(
            "Configuration file already exists: {}",
            output.display()
        )));
    }

    let content = ConfigManager::default_config_content();
    std::fs::write(&output, content)?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

fn parse_signature(value: &str) -> Result<SignatureMode, String> {
    match value {
        "exact" => Ok(SignatureMode::Exact),
        "canonical" => Ok(SignatureMode::Canonical),
        other => Err(format!("unknown signature mode '{other}'")),
    }
}

fn parse_collisions(value: &str) -> Result<CollisionPolicy, String> {
    match value {
        "inline" => Ok(CollisionPolicy::Inline),
        "disambiguate" => Ok(CollisionPolicy::Disambiguate),
        other => Err(format!("unknown collision policy '{other}'")),
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
