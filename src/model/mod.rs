//! GC event taxonomy and composite event model.
//!
//! This module handles:
//! - The closed catalog of event types and their metadata
//! - Classification predicates (initial mark, remark, concurrent cycle)
//! - Pause, concurrent-phase and VM-operation events with nested details

pub mod event;
pub mod event_type;

// Re-export main types
pub use event::{
    derive_generation, ConcurrentPhaseEvent, Datestamp, GcEvent, PauseEvent, VmOperationEvent,
};
pub use event_type::{
    CollectionKind, Concurrency, EventType, Generation, LogPattern, TypeName,
};
