//! Incremental statistics over a chronological stream of GC events.
//!
//! `GcModel` owns the event sequence and one accumulator per metric. Every
//! metric is updated as events arrive through `add`; queries afterwards are
//! plain field reads.
//!
//! Pause events split three ways:
//! - not full (young / minor collections, initial mark, remark)
//! - full (derived generation spans more than one region)
//! - plus shared updates for both (footprint, freed memory, heap sizes,
//!   pause interval)
//!
//! Post-GC memory trends are tracked per full-GC interval: the live segment
//! collects `(timestamp, post_used)` after every minor collection and is
//! folded into the running averages when the next full collection resets
//! the baseline.

use super::cursor::EventView;
use crate::model::{
    ConcurrentPhaseEvent, GcEvent, Generation, PauseEvent, VmOperationEvent,
};
use crate::stats::{DoubleData, IntData, RegressionLine};
use std::collections::HashMap;

/// Allocated (committed) and used size distributions of one heap region
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizeData {
    /// Committed size (`total`) per collection
    pub allocated: IntData,
    /// Occupancy before collection (`pre_used`) per collection
    pub used: IntData,
}

impl SizeData {
    fn add(&mut self, event: &PauseEvent) {
        // Events without memory information report total == 0
        if event.total > 0 {
            self.allocated.add(event.total as i64);
            self.used.add(event.pre_used as i64);
        }
    }
}

/// Aggregated statistics of one GC log
///
/// **Public** - the main product of reading a log
///
/// Single writer: the producer calls `add` for every event in log order,
/// then hands the finished model to readers. Nothing here locks.
#[derive(Debug, Clone, Default)]
pub struct GcModel {
    url: Option<String>,

    events: Vec<GcEvent>,
    stop_the_world_indices: Vec<usize>,
    concurrent_indices: Vec<usize>,
    full_gc_indices: Vec<usize>,

    first_timestamp: Option<f64>,
    last_timestamp: Option<f64>,

    // Pauses
    total_pause: DoubleData,
    gc_pause: DoubleData,
    full_gc_pause: DoubleData,
    vm_operation_pause: DoubleData,
    pause_interval: DoubleData,
    last_pause_timestamp: Option<f64>,
    previous_pause: Option<f64>,
    gc_event_pauses: HashMap<String, DoubleData>,
    full_gc_event_pauses: HashMap<String, DoubleData>,
    concurrent_pauses: HashMap<String, DoubleData>,
    concurrent_durations: HashMap<String, DoubleData>,

    // Memory
    footprint: IntData,
    freed_memory: i64,
    freed_memory_by_gc: IntData,
    freed_memory_by_full_gc: IntData,
    post_gc_used_memory: IntData,
    post_full_gc_used_memory: IntData,
    promotion: IntData,
    initiating_occupancy_fraction: DoubleData,
    heap_sizes: SizeData,
    young_sizes: SizeData,
    tenured_sizes: SizeData,
    perm_sizes: SizeData,

    // Trends
    current_post_gc_slope: RegressionLine,
    current_relative_post_gc_increase: RegressionLine,
    post_gc_slope: DoubleData,
    relative_post_gc_increase: DoubleData,
    full_gc_slope: RegressionLine,
    relative_post_full_gc_increase: RegressionLine,
}

impl GcModel {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Backing resource of this model (file path or URL)
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// Add one event and update every derived metric
    ///
    /// **Public** - the only way to mutate a model
    ///
    /// Events are expected in log order. Clock regressions are tolerated:
    /// they never produce negative pause intervals, but are not reordered.
    pub fn add(&mut self, event: impl Into<GcEvent>) {
        let event = event.into();
        let timestamp = event.timestamp();

        if self.first_timestamp.is_none() {
            self.first_timestamp = Some(timestamp);
        }
        self.last_timestamp = Some(timestamp);

        let previous_pause = self.previous_pause.take();
        match &event {
            GcEvent::Pause(pause) => {
                self.add_pause_event(pause);
                self.previous_pause = Some(pause.pause);
            }
            GcEvent::Concurrent(phase) => self.add_concurrent_event(phase),
            GcEvent::VmOperation(operation) => {
                self.add_vm_operation_event(operation, previous_pause)
            }
        }

        let index = self.events.len();
        if event.is_stop_the_world() {
            self.stop_the_world_indices.push(index);
        } else {
            self.concurrent_indices.push(index);
        }
        if event.is_full() {
            self.full_gc_indices.push(index);
        }
        self.events.push(event);
    }

    fn add_concurrent_event(&mut self, event: &ConcurrentPhaseEvent) {
        let name = event.type_name().as_str();
        self.concurrent_pauses
            .entry(name.to_string())
            .or_default()
            .add(event.pause);
        self.concurrent_durations
            .entry(name.to_string())
            .or_default()
            .add(event.duration);
    }

    fn add_vm_operation_event(&mut self, event: &VmOperationEvent, previous_pause: Option<f64>) {
        // Stopped time printed right after a collection already contains it
        let pause = (event.pause - previous_pause.unwrap_or(0.0)).max(0.0);
        self.vm_operation_pause.add(pause);
    }

    fn add_pause_event(&mut self, event: &PauseEvent) {
        self.total_pause.add(event.pause);

        if event.is_full() {
            self.add_full_collection(event);
        } else {
            self.add_minor_collection(event);
        }

        if event.total > 0 {
            self.footprint.add(event.total as i64);
        }
        self.freed_memory += event.freed();
        self.add_heap_sizes(event);
        self.add_pause_interval(event);
    }

    fn add_minor_collection(&mut self, event: &PauseEvent) {
        self.gc_pause.add(event.pause);
        self.gc_event_pauses
            .entry(event.display_type())
            .or_default()
            .add(event.pause);

        self.post_gc_used_memory.add(event.post_used as i64);
        self.freed_memory_by_gc.add(event.freed());

        let post_used = event.post_used as f64;
        self.current_post_gc_slope
            .add_point(event.timestamp, post_used);
        let ordinal = self.current_relative_post_gc_increase.point_count() as f64;
        self.current_relative_post_gc_increase
            .add_point(ordinal, post_used);

        if event.is_initial_mark() {
            let initial_mark = initial_mark_part(event);
            if initial_mark.total > 0 {
                self.initiating_occupancy_fraction
                    .add(initial_mark.pre_used as f64 / initial_mark.total as f64);
            }
        }

        if event.generation() == Generation::Young {
            if let Some(young) = event.young() {
                let promoted = young.freed() - event.freed();
                self.promotion.add(promoted);
            }
        }
    }

    fn add_full_collection(&mut self, event: &PauseEvent) {
        self.full_gc_pause.add(event.pause);
        self.full_gc_event_pauses
            .entry(event.display_type())
            .or_default()
            .add(event.pause);

        self.post_full_gc_used_memory.add(event.post_used as i64);
        self.freed_memory_by_full_gc.add(event.freed());

        let post_used = event.post_used as f64;
        self.full_gc_slope.add_point(event.timestamp, post_used);
        let ordinal = self.relative_post_full_gc_increase.point_count() as f64;
        self.relative_post_full_gc_increase
            .add_point(ordinal, post_used);

        // A full collection resets the post-GC baseline: fold the finished
        // segment into the averages and start a new one
        let points = self.current_post_gc_slope.point_count();
        if points >= 2 {
            if let Some(slope) = self.current_post_gc_slope.slope() {
                self.post_gc_slope.add_weighted(slope, points);
            }
            if let Some(increase) = self.current_relative_post_gc_increase.slope() {
                self.relative_post_gc_increase.add_weighted(increase, points);
            }
            self.current_post_gc_slope.reset();
            self.current_relative_post_gc_increase.reset();
        }
    }

    fn add_heap_sizes(&mut self, event: &PauseEvent) {
        self.heap_sizes.add(event);

        for detail in event.details() {
            let sizes = match detail.generation() {
                Generation::Young => &mut self.young_sizes,
                Generation::Tenured => &mut self.tenured_sizes,
                Generation::Perm => &mut self.perm_sizes,
                Generation::All => &mut self.heap_sizes,
            };
            sizes.add(detail);
        }
    }

    fn add_pause_interval(&mut self, event: &PauseEvent) {
        let Some(last) = self.last_pause_timestamp else {
            self.last_pause_timestamp = Some(event.timestamp);
            return;
        };

        if event.is_concurrency_helper() {
            return;
        }

        let interval = event.timestamp - last;
        if interval >= 0.0 {
            self.pause_interval.add(interval);
            self.last_pause_timestamp = Some(event.timestamp);
        }
    }

    // ------------------------------------------------------------------
    // Event cursors
    // ------------------------------------------------------------------

    /// Number of events added
    pub fn size(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// All events in insertion order
    pub fn events(&self) -> EventView<'_> {
        EventView::all(&self.events)
    }

    /// Pause and VM-operation events that stopped the application
    pub fn stop_the_world_events(&self) -> EventView<'_> {
        EventView::filtered(&self.events, &self.stop_the_world_indices)
    }

    /// Events that ran alongside the application
    pub fn concurrent_events(&self) -> EventView<'_> {
        EventView::filtered(&self.events, &self.concurrent_indices)
    }

    /// Full collections only
    pub fn full_gc_events(&self) -> EventView<'_> {
        EventView::filtered(&self.events, &self.full_gc_indices)
    }

    // ------------------------------------------------------------------
    // Pause queries
    // ------------------------------------------------------------------

    /// All collection pauses (minor and full)
    pub fn pause(&self) -> &DoubleData {
        &self.total_pause
    }

    /// Pauses of collections that were not full
    pub fn gc_pause(&self) -> &DoubleData {
        &self.gc_pause
    }

    pub fn full_gc_pause(&self) -> &DoubleData {
        &self.full_gc_pause
    }

    /// Safepoint time outside of collections
    pub fn vm_operation_pause(&self) -> &DoubleData {
        &self.vm_operation_pause
    }

    /// Time between the starts of consecutive collection pauses
    pub fn pause_interval(&self) -> &DoubleData {
        &self.pause_interval
    }

    /// Non-full pauses keyed by composite type (e.g. `GC; ParNew`)
    pub fn gc_event_pauses(&self) -> &HashMap<String, DoubleData> {
        &self.gc_event_pauses
    }

    /// Full-collection pauses keyed by composite type
    pub fn full_gc_event_pauses(&self) -> &HashMap<String, DoubleData> {
        &self.full_gc_event_pauses
    }

    /// Concurrent-phase pauses keyed by type name
    pub fn concurrent_event_pauses(&self) -> &HashMap<String, DoubleData> {
        &self.concurrent_pauses
    }

    /// Concurrent-phase wall-clock durations keyed by type name
    pub fn concurrent_event_durations(&self) -> &HashMap<String, DoubleData> {
        &self.concurrent_durations
    }

    // ------------------------------------------------------------------
    // Memory queries
    // ------------------------------------------------------------------

    /// Largest committed heap seen, `None` before the first pause event
    pub fn footprint(&self) -> Option<i64> {
        self.footprint.max()
    }

    /// Committed heap distribution over all pause events
    pub fn footprint_data(&self) -> &IntData {
        &self.footprint
    }

    /// Memory released by all collections
    pub fn freed_memory(&self) -> i64 {
        self.freed_memory
    }

    pub fn freed_memory_by_gc(&self) -> &IntData {
        &self.freed_memory_by_gc
    }

    pub fn freed_memory_by_full_gc(&self) -> &IntData {
        &self.freed_memory_by_full_gc
    }

    pub fn post_gc_used_memory(&self) -> &IntData {
        &self.post_gc_used_memory
    }

    pub fn post_full_gc_used_memory(&self) -> &IntData {
        &self.post_full_gc_used_memory
    }

    /// Memory moved from young to tenured per young collection
    pub fn promotion(&self) -> &IntData {
        &self.promotion
    }

    /// Tenured occupancy ratio at each initial mark
    pub fn initiating_occupancy_fraction(&self) -> &DoubleData {
        &self.initiating_occupancy_fraction
    }

    /// Whole-heap allocated/used sizes
    pub fn heap_sizes(&self) -> &SizeData {
        &self.heap_sizes
    }

    pub fn young_sizes(&self) -> &SizeData {
        &self.young_sizes
    }

    pub fn tenured_sizes(&self) -> &SizeData {
        &self.tenured_sizes
    }

    pub fn perm_sizes(&self) -> &SizeData {
        &self.perm_sizes
    }

    // ------------------------------------------------------------------
    // Trend queries
    // ------------------------------------------------------------------

    /// Average post-GC memory slope (units per second) over finished
    /// full-GC intervals, weighted by segment size
    pub fn post_gc_slope(&self) -> &DoubleData {
        &self.post_gc_slope
    }

    /// Average post-GC memory increase per collection over finished
    /// full-GC intervals
    pub fn relative_post_gc_increase(&self) -> &DoubleData {
        &self.relative_post_gc_increase
    }

    /// Slope of the segment since the last full collection
    pub fn current_post_gc_slope(&self) -> Option<f64> {
        self.current_post_gc_slope.slope()
    }

    /// Points collected in the segment since the last full collection
    pub fn current_post_gc_points(&self) -> u64 {
        self.current_post_gc_slope.point_count()
    }

    /// Post-full-GC memory slope (units per second)
    pub fn full_gc_slope(&self) -> Option<f64> {
        self.full_gc_slope.slope()
    }

    /// Post-full-GC memory increase per full collection
    pub fn relative_post_full_gc_increase(&self) -> Option<f64> {
        self.relative_post_full_gc_increase.slope()
    }

    // ------------------------------------------------------------------
    // Time queries
    // ------------------------------------------------------------------

    pub fn first_timestamp(&self) -> Option<f64> {
        self.first_timestamp
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    /// Seconds between the first and the last event
    pub fn running_time(&self) -> f64 {
        match (self.first_timestamp, self.last_timestamp) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Fraction of running time the application was not stopped
    ///
    /// **Public** - `None` while running time is not positive
    pub fn throughput(&self) -> Option<f64> {
        let running_time = self.running_time();
        if running_time <= 0.0 {
            return None;
        }
        let stopped = self.total_pause.sum() + self.vm_operation_pause.sum();
        Some(1.0 - stopped / running_time)
    }
}

/// The part of an initial-mark event that carries the occupancy figures
fn initial_mark_part(event: &PauseEvent) -> &PauseEvent {
    if event.event_type().is_initial_mark() {
        return event;
    }
    event
        .details()
        .iter()
        .find(|detail| detail.event_type().is_initial_mark())
        .unwrap_or(event)
}
