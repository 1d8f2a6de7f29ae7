// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command-line surface of the `quiver` binary.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use quiver_keys::{field_key, Arguments};
use quiver_schema::{KeyRules, Schema, TypeRegistry};
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::refs::collect_references;

/// Top-level arguments.
#[derive(Parser, Debug)]
#[command(name = "quiver", author, version, about = "Quiver cache key and reference tool")]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the canonical storage key of a field
    FieldKey {
        /// Field name
        name: String,
        /// Arguments as a JSON object, e.g. '{"first": 10}'
        #[arg(long)]
        args: Option<String>,
    },
    /// Print `<json-pointer>\t<reference>` for every identifiable object in a response
    Refs {
        /// Schema IR (JSON) listing object types and their interfaces
        #[arg(long)]
        schema: PathBuf,
        /// Identity rules (JSON)
        #[arg(long)]
        rules: PathBuf,
        /// Response document; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

/// Parse a JSON object into an argument map.
pub fn parse_arguments(json: &str) -> Result<Arguments> {
    let value: Value = serde_json::from_str(json).context("arguments are not valid JSON")?;
    if !value.is_object() {
        bail!("arguments must be a JSON object");
    }
    Ok(serde_json::from_value(value)?)
}

/// Canonical key for `name` with optional JSON-encoded arguments.
pub fn field_key_command(name: &str, args: Option<&str>) -> Result<String> {
    let arguments = match args {
        Some(json) => parse_arguments(json)?,
        None => Arguments::new(),
    };
    Ok(field_key(name, &arguments))
}

/// Load a schema from IR and rules files.
pub fn load_schema(schema: &Path, rules: &Path) -> Result<Schema<KeyRules>> {
    let ir = fs::read_to_string(schema)
        .with_context(|| format!("failed to read schema {}", schema.display()))?;
    let registry = TypeRegistry::from_ir_json(&ir)
        .with_context(|| format!("invalid schema {}", schema.display()))?;
    let rules_json = fs::read_to_string(rules)
        .with_context(|| format!("failed to read rules {}", rules.display()))?;
    let rules = KeyRules::from_json(&rules_json)
        .with_context(|| format!("invalid rules {}", rules.display()))?;
    debug!(types = registry.len(), "schema loaded");
    Ok(Schema::new(registry, rules))
}

/// Write one line per resolved object in `response`; returns the line count.
pub fn write_references(
    schema: &Schema<KeyRules>,
    response: &Value,
    out: &mut impl Write,
) -> Result<usize> {
    let hits = collect_references(schema, response);
    for hit in &hits {
        writeln!(out, "{}\t{}", hit.pointer, hit.reference)?;
    }
    Ok(hits.len())
}

/// Execute one parsed command, writing results to `out`.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::FieldKey { name, args } => {
            let key = field_key_command(&name, args.as_deref())?;
            writeln!(out, "{key}")?;
        }
        Commands::Refs {
            schema,
            rules,
            input,
        } => {
            let schema = load_schema(&schema, &rules)?;
            let text = match input {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("failed to read input {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("failed to read stdin")?;
                    buf
                }
            };
            let response: Value =
                serde_json::from_str(&text).context("input is not valid JSON")?;
            let count = write_references(&schema, &response, out)?;
            info!(count, "references written");
        }
    }
    Ok(())
}

/// Parse the process arguments, install logging, and run.
pub fn entrypoint() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)?;
    out.flush()?;
    Ok(())
}
