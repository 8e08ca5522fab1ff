//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Loads one log, or merges several rotated fragments
//! 2. Builds the summary
//! 3. Writes the summary JSON
//! 4. Optionally prints the console report

use crate::aggregator::GcModel;
use crate::output::{render_text, write_summary, Summary};
use crate::reader::{load_in_background, GcResource, JsonLinesLoader};
use crate::series::{merge_series, CancelFlag};
use crate::utils::config::DEFAULT_SUMMARY_PATH;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Log files or URLs; more than one means a rotated series
    pub files: Vec<String>,

    /// Output path for the JSON summary
    pub output_json: PathBuf,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            output_json: PathBuf::from(DEFAULT_SUMMARY_PATH),
            print_summary: false,
        }
    }
}

/// Execute the analyze command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Read failures of a single log
/// * Series errors (nothing readable, mixed timestamp kinds)
/// * File write errors
pub fn execute_analyze(args: AnalyzeArgs) -> Result<()> {
    let start_time = Instant::now();

    // Step 1: Load
    info!("Step 1/3: Loading {} resource(s)...", args.files.len());
    let model = load(&args.files)?;

    debug!(
        "Model holds {} events ({} full collections)",
        model.size(),
        model.full_gc_events().len()
    );

    // Step 2: Summarize
    info!("Step 2/3: Building summary...");
    let summary = Summary::from_model(&model);

    // Step 3: Write
    info!("Step 3/3: Writing summary...");
    write_summary(&summary, &args.output_json).context("Failed to write summary JSON")?;
    info!("✓ Summary written to: {}", args.output_json.display());

    if args.print_summary {
        println!("\n{}", render_text(&summary));
    }

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Load one resource, or merge several
///
/// **Private** - internal helper for execute_analyze
fn load(files: &[String]) -> Result<GcModel> {
    if let [file] = files {
        let pending = load_in_background(JsonLinesLoader, GcResource::new(file.as_str()));
        let loaded = pending
            .wait()
            .with_context(|| format!("Failed to read GC log {}", file))?;
        return Ok(loaded.model);
    }

    let resources = files.iter().map(|f| GcResource::new(f.as_str())).collect();
    let model = merge_series(resources, &JsonLinesLoader, &CancelFlag::new())
        .context("Failed to merge log series")?;
    Ok(model)
}

/// Validate analyze arguments
///
/// **Public** - can be called before execute_analyze for early validation
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.files.is_empty() {
        anyhow::bail!("At least one GC log must be given");
    }

    if args.files.iter().any(|f| f.trim().is_empty()) {
        anyhow::bail!("GC log paths cannot be empty");
    }

    let is_json = args
        .output_json
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if !is_json {
        anyhow::bail!(
            "Output path must end in .json: {}",
            args.output_json.display()
        );
    }

    Ok(())
}
