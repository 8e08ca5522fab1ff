//! Output of analysis results.
//!
//! This module handles:
//! - Flattening a `GcModel` into a serializable `Summary`
//! - Writing and reading the summary as JSON
//! - Rendering a console report

pub mod json;
pub mod summary;

// Re-export main functions
pub use json::{read_summary, summary_to_string, write_summary};
pub use summary::{
    render_text, Distribution, EventCounts, MemorySummary, PauseSummary, RegionSizes, Summary,
    TrendSummary,
};
