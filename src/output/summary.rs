//! Flattened, serializable analysis report of one `GcModel`.

use crate::aggregator::{GcModel, SizeData};
use crate::stats::{DoubleData, IntData};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Top-level summary structure
///
/// **Public** - this is what gets serialized to the summary JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Summary format version
    pub version: String,

    /// Backing resource of the model
    pub url: Option<String>,

    /// ISO 8601 creation time of the summary
    pub generated_at: String,

    pub events: EventCounts,

    pub pauses: PauseSummary,

    pub memory: MemorySummary,

    pub trends: TrendSummary,

    /// Seconds between the first and last event
    pub running_time: f64,

    /// Fraction of running time the application was not stopped
    pub throughput: Option<f64>,
}

/// Number of events per cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCounts {
    pub total: usize,
    pub stop_the_world: usize,
    pub concurrent: usize,
    pub full_gc: usize,
}

/// count / sum / mean / stddev / min / max of one accumulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    pub count: u64,
    pub sum: f64,
    pub mean: Option<f64>,
    pub stddev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl From<&DoubleData> for Distribution {
    fn from(data: &DoubleData) -> Self {
        Self {
            count: data.n(),
            sum: data.sum(),
            mean: data.average(),
            stddev: data.standard_deviation(),
            min: data.min(),
            max: data.max(),
        }
    }
}

impl From<&IntData> for Distribution {
    fn from(data: &IntData) -> Self {
        Self {
            count: data.n(),
            sum: data.sum() as f64,
            mean: data.average(),
            stddev: data.standard_deviation(),
            min: data.min().map(|v| v as f64),
            max: data.max().map(|v| v as f64),
        }
    }
}

/// Pause distributions, all in seconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauseSummary {
    pub all: Distribution,
    pub minor: Distribution,
    pub full: Distribution,
    pub vm_operation: Distribution,
    pub interval: Distribution,
    /// Minor collection pauses per composite type name
    pub by_type: BTreeMap<String, Distribution>,
    /// Full collection pauses per composite type name
    pub full_by_type: BTreeMap<String, Distribution>,
    /// Concurrent phase pauses per type name
    pub concurrent: BTreeMap<String, Distribution>,
    /// Concurrent phase wall-clock durations per type name
    pub concurrent_duration: BTreeMap<String, Distribution>,
}

/// Memory figures, in the units the log reports (usually KB)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySummary {
    pub footprint: Option<i64>,
    pub freed: i64,
    pub freed_by_minor: Distribution,
    pub freed_by_full: Distribution,
    pub post_gc_used: Distribution,
    pub post_full_gc_used: Distribution,
    pub promotion: Distribution,
    pub initiating_occupancy_fraction: Distribution,
    pub heap: RegionSizes,
    pub young: RegionSizes,
    pub tenured: RegionSizes,
    pub perm: RegionSizes,
}

/// Committed and pre-collection occupancy of one heap region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSizes {
    pub allocated: Distribution,
    pub used: Distribution,
}

impl From<&SizeData> for RegionSizes {
    fn from(data: &SizeData) -> Self {
        Self {
            allocated: (&data.allocated).into(),
            used: (&data.used).into(),
        }
    }
}

/// Post-GC memory trends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    /// Average slope between full collections (units/second)
    pub post_gc_slope: Option<f64>,
    /// Average relative increase between full collections (units/collection)
    pub relative_post_gc_increase: Option<f64>,
    /// Slope of the live segment since the last full collection
    pub current_post_gc_slope: Option<f64>,
    pub full_gc_slope: Option<f64>,
    pub relative_post_full_gc_increase: Option<f64>,
}

impl Summary {
    /// Build a summary from a finished model
    ///
    /// **Public** - main entry point for report generation
    pub fn from_model(model: &GcModel) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            url: model.url().map(str::to_string),
            generated_at: Utc::now().to_rfc3339(),
            events: EventCounts {
                total: model.size(),
                stop_the_world: model.stop_the_world_events().len(),
                concurrent: model.concurrent_events().len(),
                full_gc: model.full_gc_events().len(),
            },
            pauses: PauseSummary {
                all: model.pause().into(),
                minor: model.gc_pause().into(),
                full: model.full_gc_pause().into(),
                vm_operation: model.vm_operation_pause().into(),
                interval: model.pause_interval().into(),
                by_type: to_sorted(model.gc_event_pauses()),
                full_by_type: to_sorted(model.full_gc_event_pauses()),
                concurrent: to_sorted(model.concurrent_event_pauses()),
                concurrent_duration: to_sorted(model.concurrent_event_durations()),
            },
            memory: MemorySummary {
                footprint: model.footprint(),
                freed: model.freed_memory(),
                freed_by_minor: model.freed_memory_by_gc().into(),
                freed_by_full: model.freed_memory_by_full_gc().into(),
                post_gc_used: model.post_gc_used_memory().into(),
                post_full_gc_used: model.post_full_gc_used_memory().into(),
                promotion: model.promotion().into(),
                initiating_occupancy_fraction: model.initiating_occupancy_fraction().into(),
                heap: model.heap_sizes().into(),
                young: model.young_sizes().into(),
                tenured: model.tenured_sizes().into(),
                perm: model.perm_sizes().into(),
            },
            trends: TrendSummary {
                post_gc_slope: model.post_gc_slope().average(),
                relative_post_gc_increase: model.relative_post_gc_increase().average(),
                current_post_gc_slope: model.current_post_gc_slope(),
                full_gc_slope: model.full_gc_slope(),
                relative_post_full_gc_increase: model.relative_post_full_gc_increase(),
            },
            running_time: model.running_time(),
            throughput: model.throughput(),
        }
    }
}

/// **Private** - stable key order for output
fn to_sorted(map: &HashMap<String, DoubleData>) -> BTreeMap<String, Distribution> {
    map.iter()
        .map(|(name, data)| (name.clone(), data.into()))
        .collect()
}

/// Render a summary as a fixed-width console report
///
/// **Public** - used by `analyze --summary`
pub fn render_text(summary: &Summary) -> String {
    let mut lines = Vec::new();
    let rule = "=".repeat(72);

    lines.push(rule.clone());
    lines.push("GC LOG SUMMARY".to_string());
    lines.push(rule.clone());
    lines.push(format!(
        "Resource:      {}",
        summary.url.as_deref().unwrap_or("-")
    ));
    lines.push(format!(
        "Events:        {} ({} stop-the-world, {} concurrent, {} full)",
        summary.events.total,
        summary.events.stop_the_world,
        summary.events.concurrent,
        summary.events.full_gc
    ));
    lines.push(format!("Running time:  {:.3}s", summary.running_time));
    lines.push(format!(
        "Throughput:    {}",
        summary
            .throughput
            .map(|t| format!("{:.2}%", t * 100.0))
            .unwrap_or_else(|| "n/a".to_string())
    ));
    lines.push(format!(
        "Footprint:     {}",
        summary
            .memory
            .footprint
            .map(|f| f.to_string())
            .unwrap_or_else(|| "n/a".to_string())
    ));
    lines.push(format!("Freed memory:  {}", summary.memory.freed));

    lines.push(String::new());
    lines.push(format!(
        "  {:<32} {:>8} {:>10} {:>10} {:>10}",
        "Pauses (s)", "count", "sum", "mean", "max"
    ));
    lines.push(format!("  {}", "-".repeat(74)));

    let mut rows: Vec<(&str, &Distribution)> = vec![
        ("all", &summary.pauses.all),
        ("minor", &summary.pauses.minor),
        ("full", &summary.pauses.full),
        ("vm operations", &summary.pauses.vm_operation),
        ("interval", &summary.pauses.interval),
    ];
    rows.extend(
        summary
            .pauses
            .by_type
            .iter()
            .chain(summary.pauses.full_by_type.iter())
            .chain(summary.pauses.concurrent.iter())
            .map(|(name, dist)| (name.as_str(), dist)),
    );

    for (label, dist) in rows {
        lines.push(format!(
            "  {:<32} {:>8} {:>10.4} {:>10} {:>10}",
            truncate(label, 32),
            dist.count,
            dist.sum,
            format_optional(dist.mean),
            format_optional(dist.max)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "  {:<32} {:>12} {:>12}",
        "Region sizes (max)", "allocated", "used"
    ));
    lines.push(format!("  {}", "-".repeat(58)));
    for (label, sizes) in [
        ("heap", &summary.memory.heap),
        ("young", &summary.memory.young),
        ("tenured", &summary.memory.tenured),
        ("perm", &summary.memory.perm),
    ] {
        lines.push(format!(
            "  {:<32} {:>12} {:>12}",
            label,
            format_size(sizes.allocated.max),
            format_size(sizes.used.max)
        ));
    }

    lines.push(rule);
    lines.join("\n")
}

/// **Private** - internal helper for render_text
fn format_optional(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.4}", v))
        .unwrap_or_else(|| "-".to_string())
}

fn format_size(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.0}", v))
        .unwrap_or_else(|| "-".to_string())
}

/// **Private** - keep the tail of long composite names
fn truncate(label: &str, width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= width {
        return label.to_string();
    }
    let tail: String = chars[chars.len() - (width - 3)..].iter().collect();
    format!("...{}", tail)
}
