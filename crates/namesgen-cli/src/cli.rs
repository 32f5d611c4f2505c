//! CLI argument definitions for the constant generator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use namesgen_cli::pipeline::{DEFAULT_INPUT, DEFAULT_OUTPUT, PipelineConfig};
use namesgen_ingest::{ColumnSelector, MapOptions};
use namesgen_output::{DEFAULT_GENERATOR, DEFAULT_PACKAGE, RenderOptions, WriteMode, gofmt};

#[derive(Parser)]
#[command(
    name = "namesgen",
    version,
    about = "Generate Go service name constants from names_data.csv",
    long_about = "Generate Go service name constants from names_data.csv.\n\n\
                  Reads the names CSV, keeps rows with a package identifier and no\n\
                  exclude flag, and writes a gofmt-formatted const block."
)]
pub struct Cli {
    /// Names CSV to read.
    #[arg(long, value_name = "PATH", env = "NAMESGEN_INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Go file to write.
    #[arg(long, value_name = "PATH", env = "NAMESGEN_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Package clause of the generated file.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PACKAGE, value_parser = parse_package)]
    pub package: String,

    /// Generator path named in the "Code generated" header.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_GENERATOR)]
    pub generator: String,

    /// Replace the output file instead of appending to it.
    #[arg(long)]
    pub truncate: bool,

    /// Locate columns by fixed position (6, 7, 13) instead of header name.
    #[arg(long)]
    pub positional: bool,

    /// Do not fail when two rows produce the same constant name.
    #[arg(long = "allow-duplicates")]
    pub allow_duplicates: bool,

    /// Do not escape values; invalid values then fail formatting.
    #[arg(long = "no-escape")]
    pub no_escape: bool,

    /// Print the generated source to stdout instead of writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Pipeline settings selected by the flags.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            columns: if self.positional {
                ColumnSelector::positional()
            } else {
                ColumnSelector::by_name()
            },
            map: MapOptions {
                allow_duplicates: self.allow_duplicates,
            },
            render: RenderOptions {
                package: self.package.clone(),
                generator: self.generator.clone(),
                escape_values: !self.no_escape,
            },
            write_mode: if self.truncate {
                WriteMode::Truncate
            } else {
                WriteMode::Append
            },
            dry_run: self.dry_run,
        }
    }
}

fn parse_package(value: &str) -> Result<String, String> {
    if gofmt::is_identifier(value) && value != "_" {
        Ok(value.to_string())
    } else {
        Err(format!("'{value}' is not a valid Go package name"))
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
