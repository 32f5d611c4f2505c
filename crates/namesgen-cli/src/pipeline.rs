//! Generation pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Read**: load every row of the names CSV
//! 2. **Filter**: resolve columns, keep generated rows, check names
//! 3. **Render**: fill the constants template
//! 4. **Format**: validate and lay out the Go source
//! 5. **Write**: append to (or replace) the output file
//!
//! Each stage fully consumes its input before the next begins. Any failure
//! aborts the run; nothing is written unless every earlier stage succeeded.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, info_span};

use namesgen_ingest::{ColumnSelector, CsvRows, IngestError, MapOptions, map_rows, read_rows};
use namesgen_model::ServiceSet;
use namesgen_output::{
    OutputError, RenderOptions, Renderer, WriteMode, format_source, write_output,
};

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "names_data.csv";

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "consts_gen.go";

/// Settings for one generator run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub columns: ColumnSelector,
    pub map: MapOptions,
    pub render: RenderOptions,
    pub write_mode: WriteMode,
    /// Run every stage except the write.
    pub dry_run: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            columns: ColumnSelector::default(),
            map: MapOptions::default(),
            render: RenderOptions::default(),
            write_mode: WriteMode::default(),
            dry_run: false,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Number of constants generated.
    pub constants: usize,
    /// Formatted Go source.
    pub source: String,
    /// Path written, `None` for a dry run.
    pub written: Option<PathBuf>,
}

/// Runs all stages for `config`.
pub fn run(config: &PipelineConfig) -> Result<GenerateResult> {
    let span = info_span!("generate", input = %config.input.display());
    let _guard = span.enter();

    let rows = info_span!("read").in_scope(|| read(&config.input))?;
    let services =
        info_span!("filter").in_scope(|| filter(&rows, &config.columns, &config.map))?;
    let rendered = info_span!("render").in_scope(|| render(&services, &config.render))?;
    let source = info_span!("format").in_scope(|| format(&rendered))?;

    let written = if config.dry_run {
        info!("dry run, output not written");
        None
    } else {
        info_span!("write", output = %config.output.display())
            .in_scope(|| write(&config.output, &source, config.write_mode))?;
        Some(config.output.clone())
    };

    info!(constants = services.len(), "generated service name constants");
    Ok(GenerateResult {
        constants: services.len(),
        source,
        written,
    })
}

/// Stage 1: read the CSV rows.
pub fn read(input: &Path) -> Result<CsvRows> {
    read_rows(input).map_err(ingest_failure)
}

/// Stage 2: resolve columns and filter rows into service records.
pub fn filter(
    rows: &CsvRows,
    columns: &ColumnSelector,
    options: &MapOptions,
) -> Result<ServiceSet> {
    let resolved = columns.resolve(rows).map_err(ingest_failure)?;
    map_rows(rows, &resolved, options).map_err(ingest_failure)
}

/// Stage 3: render the template.
pub fn render(services: &ServiceSet, options: &RenderOptions) -> Result<String> {
    Renderer::new(options.clone())
        .and_then(|renderer| renderer.render(services))
        .map_err(output_failure)
}

/// Stage 4: validate and format the rendered source.
pub fn format(rendered: &str) -> Result<String> {
    format_source(rendered).map_err(|err| output_failure(err.into()))
}

/// Stage 5: write the formatted source.
pub fn write(output: &Path, source: &str, mode: WriteMode) -> Result<()> {
    write_output(output, source.as_bytes(), mode).map_err(output_failure)
}

/// Single-line diagnostic for a failed run: `error: <stage>: <cause>`.
pub fn diagnostic(error: &anyhow::Error) -> String {
    format!("error: {error:#}")
}

fn ingest_failure(err: IngestError) -> anyhow::Error {
    let stage = err.stage();
    anyhow::Error::new(err).context(stage)
}

fn output_failure(err: OutputError) -> anyhow::Error {
    let stage = err.stage();
    anyhow::Error::new(err).context(stage)
}
