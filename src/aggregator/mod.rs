//! Aggregation of GC events into collector statistics.
//!
//! This module turns a stream of events into:
//! - Pause distributions (all, minor, full, per type)
//! - Heap footprint, freed memory and promotion
//! - Post-GC memory trends per full-GC interval
//! - Filtered, indexed views over the event sequence

pub mod cursor;
pub mod gc_model;

// Re-export main types
pub use cursor::{EventIter, EventView};
pub use gc_model::{GcModel, SizeData};
