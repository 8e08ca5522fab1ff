use crate::model::{EventType, Generation};
use crate::output::read_summary;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a summary JSON file
pub fn validate_summary_file(file_path: PathBuf) -> Result<()> {
    println!("Validating summary: {}", file_path.display());

    let summary = read_summary(&file_path)?;

    println!("✓ Valid summary JSON");
    println!("  Version: {}", summary.version);
    println!("  Resource: {}", summary.url.as_deref().unwrap_or("-"));
    println!("  Events: {}", summary.events.total);
    println!("  Full GCs: {}", summary.events.full_gc);
    println!("  Total Pause: {:.4}s", summary.pauses.all.sum);

    if summary.version != SCHEMA_VERSION {
        println!(
            "  ⚠ Written by schema v{}, current is v{}",
            summary.version, SCHEMA_VERSION
        );
    }

    Ok(())
}

/// Print the event type catalog, optionally for one generation
pub fn display_types(generation: Option<Generation>) {
    let types: Vec<&EventType> = EventType::all()
        .iter()
        .filter(|t| generation.map_or(true, |g| t.generation() == g))
        .collect();

    println!(
        "  {:<52} {:<8} {:<10} {:<18}",
        "NAME", "GEN", "MODE", "KIND"
    );
    for event_type in &types {
        println!(
            "  {:<52} {:<8} {:<10} {:<18}",
            event_type.name(),
            event_type.generation().as_str(),
            format!("{:?}", event_type.concurrency()).to_lowercase(),
            format!("{:?}", event_type.collection_kind()).to_lowercase(),
        );
    }
    println!();
    println!("{} event types", types.len());
}

/// Display version information
pub fn display_version() {
    println!("GC Log Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!("Summary Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Statistics and rotated-log merging for JVM garbage-collection logs.");
}
