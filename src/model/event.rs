//! Event model: pauses, concurrent phases and VM operations.
//!
//! Every event can own detail events of its own family. A young collection
//! logged by ParNew with a promotion failure, for example, is one `GC`
//! pause with a `ParNew` and a `CMS` detail. Aggregate properties such as
//! the generation are always recomputed from the current details; there is
//! no cached state that could go stale after `add_detail`.

use super::event_type::{Concurrency, EventType, Generation, TypeName};
use crate::utils::config::TYPE_NAME_SEPARATOR;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Absolute wall-clock stamp of an event, when the log carries one
pub type Datestamp = DateTime<FixedOffset>;

/// Derive the generation of an event from its own type and its details
///
/// **Public** - shared by all event families
///
/// # Algorithm
/// Without details the own type decides. With details: more than one
/// distinct generation, or any `All`, yields `All`; exactly one yields that
/// generation.
pub fn derive_generation<I>(own: EventType, details: I) -> Generation
where
    I: IntoIterator<Item = Generation>,
{
    let mut seen: Vec<Generation> = Vec::with_capacity(4);
    let mut has_details = false;

    for generation in details {
        has_details = true;
        if !seen.contains(&generation) {
            seen.push(generation);
        }
    }

    if !has_details {
        return own.generation();
    }

    match seen.as_slice() {
        [] => Generation::Young,
        [single] => *single,
        _ => Generation::All,
    }
}

// Accessors, detail handling and derived predicates shared by the three
// event families. Each family stores `type_name: TypeName` and
// `details: Vec<Self>`. Types outside the catalog take the family's
// concurrency.
macro_rules! composite_event {
    ($event:ident, $family_concurrency:expr) => {
        impl $event {
            /// Type as written in the log
            pub fn type_name(&self) -> &TypeName {
                &self.type_name
            }

            /// Catalog entry of the event's own type
            pub fn event_type(&self) -> EventType {
                self.type_name.event_type()
            }

            pub fn details(&self) -> &[$event] {
                &self.details
            }

            pub fn has_details(&self) -> bool {
                !self.details.is_empty()
            }

            /// Append a detail event
            pub fn add_detail(&mut self, detail: $event) {
                self.details.push(detail);
            }

            /// Builder form of `add_detail`
            pub fn with_detail(mut self, detail: $event) -> Self {
                self.add_detail(detail);
                self
            }

            pub fn with_datestamp(mut self, datestamp: Datestamp) -> Self {
                self.datestamp = Some(datestamp);
                self
            }

            /// Own type name followed by every detail's type name
            ///
            /// e.g. `GC; ParNew; CMS`
            pub fn display_type(&self) -> String {
                let mut display = self.type_name.as_str().to_string();
                for detail in &self.details {
                    display.push_str(TYPE_NAME_SEPARATOR);
                    display.push_str(detail.type_name.as_str());
                }
                display
            }

            pub fn generation(&self) -> Generation {
                derive_generation(
                    self.event_type(),
                    self.details.iter().map(|detail| detail.generation()),
                )
            }

            /// Concurrency of the own type
            pub fn concurrency(&self) -> Concurrency {
                match self.event_type() {
                    EventType::Unknown => $family_concurrency,
                    known => known.concurrency(),
                }
            }

            /// Own type or any detail suspends application threads
            pub fn is_stop_the_world(&self) -> bool {
                self.concurrency() == Concurrency::Serial
                    || self
                        .details
                        .iter()
                        .any(|detail| detail.concurrency() == Concurrency::Serial)
            }

            pub fn is_concurrency_helper(&self) -> bool {
                self.event_type().is_concurrency_helper()
            }

            pub fn is_initial_mark(&self) -> bool {
                self.matches_own_or_detail(EventType::is_initial_mark)
            }

            pub fn is_remark(&self) -> bool {
                self.matches_own_or_detail(EventType::is_remark)
            }

            pub fn is_concurrent_collection_start(&self) -> bool {
                self.matches_own_or_detail(EventType::is_concurrent_collection_start)
            }

            pub fn is_concurrent_collection_end(&self) -> bool {
                self.matches_own_or_detail(EventType::is_concurrent_collection_end)
            }

            fn matches_own_or_detail(&self, predicate: fn(EventType) -> bool) -> bool {
                predicate(self.event_type())
                    || self
                        .details
                        .iter()
                        .any(|detail| predicate(detail.event_type()))
            }
        }
    };
}

/// A stop-the-world collection with heap figures
///
/// Memory values are in the log's unit (usually KB).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauseEvent {
    /// Seconds since JVM start
    pub timestamp: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datestamp: Option<Datestamp>,

    #[serde(rename = "type")]
    type_name: TypeName,

    /// Occupancy before the collection
    #[serde(default)]
    pub pre_used: u64,

    /// Occupancy after the collection
    #[serde(default)]
    pub post_used: u64,

    /// Committed size of the collected region(s)
    #[serde(default)]
    pub total: u64,

    /// Pause in seconds
    #[serde(default)]
    pub pause: f64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    details: Vec<PauseEvent>,
}

composite_event!(PauseEvent, Concurrency::Serial);

impl PauseEvent {
    /// Create a pause event without memory information
    pub fn new(event_type: impl Into<TypeName>, timestamp: f64, pause: f64) -> Self {
        Self {
            timestamp,
            datestamp: None,
            type_name: event_type.into(),
            pre_used: 0,
            post_used: 0,
            total: 0,
            pause,
            details: Vec::new(),
        }
    }

    pub fn with_memory(mut self, pre_used: u64, post_used: u64, total: u64) -> Self {
        self.pre_used = pre_used;
        self.post_used = post_used;
        self.total = total;
        self
    }

    /// Memory released by this collection; negative when occupancy grew
    pub fn freed(&self) -> i64 {
        self.pre_used as i64 - self.post_used as i64
    }

    /// Collection spans more than one generation
    pub fn is_full(&self) -> bool {
        self.event_type().generation() == Generation::All
            || self.generation() == Generation::All
    }

    /// Young generation part of this collection
    ///
    /// **Public** - used for promotion calculation
    ///
    /// Returns the young detail when present. When only a tenured detail
    /// exists, the young part is inferred as parent minus tenured detail.
    /// No inference happens if any other generation is present as well, or
    /// if the tenured part is split over several details.
    pub fn young(&self) -> Option<Cow<'_, PauseEvent>> {
        self.generation_part(Generation::Young, Generation::Tenured, EventType::Young)
    }

    /// Tenured generation part of this collection
    ///
    /// Counterpart of `young`, with the same inference rule.
    pub fn tenured(&self) -> Option<Cow<'_, PauseEvent>> {
        self.generation_part(Generation::Tenured, Generation::Young, EventType::Tenured)
    }

    fn generation_part(
        &self,
        wanted: Generation,
        present: Generation,
        inferred_type: EventType,
    ) -> Option<Cow<'_, PauseEvent>> {
        if let Some(detail) = self
            .details
            .iter()
            .find(|detail| detail.generation() == wanted)
        {
            return Some(Cow::Borrowed(detail));
        }

        // Only a two-generation split with one counterpart can be inferred
        let [counterpart] = self.details.as_slice() else {
            return None;
        };
        if counterpart.generation() != present {
            return None;
        }

        Some(Cow::Owned(PauseEvent {
            timestamp: counterpart.timestamp,
            datestamp: counterpart.datestamp,
            type_name: inferred_type.into(),
            pre_used: self.pre_used.saturating_sub(counterpart.pre_used),
            post_used: self.post_used.saturating_sub(counterpart.post_used),
            total: self.total.saturating_sub(counterpart.total),
            pause: (self.pause - counterpart.pause).max(0.0),
            details: Vec::new(),
        }))
    }
}

/// A phase that runs alongside the application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawConcurrentPhase")]
pub struct ConcurrentPhaseEvent {
    pub timestamp: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datestamp: Option<Datestamp>,

    #[serde(rename = "type")]
    type_name: TypeName,

    /// CPU time spent exclusively in the phase, in seconds
    #[serde(default)]
    pub pause: f64,

    /// Wall-clock time of the phase, in seconds; never below `pause`
    #[serde(default)]
    pub duration: f64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    details: Vec<ConcurrentPhaseEvent>,
}

composite_event!(ConcurrentPhaseEvent, Concurrency::Concurrent);

/// Wire form of `ConcurrentPhaseEvent` before `duration` is clamped
#[derive(Deserialize)]
struct RawConcurrentPhase {
    timestamp: f64,
    #[serde(default)]
    datestamp: Option<Datestamp>,
    #[serde(rename = "type")]
    type_name: TypeName,
    #[serde(default)]
    pause: f64,
    #[serde(default)]
    duration: f64,
    #[serde(default)]
    details: Vec<ConcurrentPhaseEvent>,
}

impl From<RawConcurrentPhase> for ConcurrentPhaseEvent {
    fn from(raw: RawConcurrentPhase) -> Self {
        Self {
            timestamp: raw.timestamp,
            datestamp: raw.datestamp,
            type_name: raw.type_name,
            pause: raw.pause,
            duration: raw.duration.max(raw.pause),
            details: raw.details,
        }
    }
}

impl ConcurrentPhaseEvent {
    /// Create a concurrent phase; `duration` is raised to `pause` if smaller
    pub fn new(event_type: impl Into<TypeName>, timestamp: f64, pause: f64, duration: f64) -> Self {
        Self {
            timestamp,
            datestamp: None,
            type_name: event_type.into(),
            pause,
            duration: duration.max(pause),
            details: Vec::new(),
        }
    }
}

/// Safepoint time reported by the VM, covering GC and non-GC operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmOperationEvent {
    pub timestamp: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datestamp: Option<Datestamp>,

    #[serde(rename = "type")]
    type_name: TypeName,

    /// Time application threads were stopped, in seconds
    #[serde(default)]
    pub pause: f64,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    details: Vec<VmOperationEvent>,
}

composite_event!(VmOperationEvent, Concurrency::Serial);

impl VmOperationEvent {
    pub fn new(timestamp: f64, pause: f64) -> Self {
        Self {
            timestamp,
            datestamp: None,
            type_name: EventType::VmOperationStopped.into(),
            pause,
            details: Vec::new(),
        }
    }
}

/// Any event the aggregator accepts
///
/// Serialized internally tagged by `kind`, one event per JSON line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GcEvent {
    Pause(PauseEvent),
    Concurrent(ConcurrentPhaseEvent),
    VmOperation(VmOperationEvent),
}

macro_rules! dispatch {
    ($self:ident, $event:ident => $body:expr) => {
        match $self {
            GcEvent::Pause($event) => $body,
            GcEvent::Concurrent($event) => $body,
            GcEvent::VmOperation($event) => $body,
        }
    };
}

impl GcEvent {
    pub fn timestamp(&self) -> f64 {
        dispatch!(self, event => event.timestamp)
    }

    pub fn datestamp(&self) -> Option<&Datestamp> {
        dispatch!(self, event => event.datestamp.as_ref())
    }

    pub fn type_name(&self) -> &TypeName {
        dispatch!(self, event => event.type_name())
    }

    pub fn event_type(&self) -> EventType {
        dispatch!(self, event => event.event_type())
    }

    pub fn pause(&self) -> f64 {
        dispatch!(self, event => event.pause)
    }

    pub fn display_type(&self) -> String {
        dispatch!(self, event => event.display_type())
    }

    pub fn generation(&self) -> Generation {
        dispatch!(self, event => event.generation())
    }

    pub fn is_stop_the_world(&self) -> bool {
        dispatch!(self, event => event.is_stop_the_world())
    }

    /// Only pause events can be full collections
    pub fn is_full(&self) -> bool {
        match self {
            GcEvent::Pause(event) => event.is_full(),
            _ => false,
        }
    }

    pub fn is_concurrency_helper(&self) -> bool {
        dispatch!(self, event => event.is_concurrency_helper())
    }

    pub fn is_initial_mark(&self) -> bool {
        dispatch!(self, event => event.is_initial_mark())
    }

    pub fn is_remark(&self) -> bool {
        dispatch!(self, event => event.is_remark())
    }

    pub fn is_concurrent_collection_start(&self) -> bool {
        dispatch!(self, event => event.is_concurrent_collection_start())
    }

    pub fn is_concurrent_collection_end(&self) -> bool {
        dispatch!(self, event => event.is_concurrent_collection_end())
    }

    pub fn as_pause(&self) -> Option<&PauseEvent> {
        match self {
            GcEvent::Pause(event) => Some(event),
            _ => None,
        }
    }

    pub fn as_concurrent(&self) -> Option<&ConcurrentPhaseEvent> {
        match self {
            GcEvent::Concurrent(event) => Some(event),
            _ => None,
        }
    }
}

impl From<PauseEvent> for GcEvent {
    fn from(event: PauseEvent) -> Self {
        GcEvent::Pause(event)
    }
}

impl From<ConcurrentPhaseEvent> for GcEvent {
    fn from(event: ConcurrentPhaseEvent) -> Self {
        GcEvent::Concurrent(event)
    }
}

impl From<VmOperationEvent> for GcEvent {
    fn from(event: VmOperationEvent) -> Self {
        GcEvent::VmOperation(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn young_gc() -> PauseEvent {
        PauseEvent::new(EventType::Gc, 1.0, 0.05)
            .with_memory(900, 400, 2000)
            .with_detail(PauseEvent::new(EventType::ParNew, 1.0, 0.04).with_memory(600, 50, 700))
    }

    #[test]
    fn test_generation_without_details() {
        assert_eq!(
            PauseEvent::new(EventType::FullGc, 0.0, 1.0).generation(),
            Generation::All
        );
        assert_eq!(
            PauseEvent::new(EventType::DefNew, 0.0, 1.0).generation(),
            Generation::Young
        );
    }

    #[test]
    fn test_generation_union() {
        let mixed = PauseEvent::new(EventType::Gc, 0.0, 0.1)
            .with_detail(PauseEvent::new(EventType::DefNew, 0.0, 0.05))
            .with_detail(PauseEvent::new(EventType::Tenured, 0.0, 0.05));
        assert_eq!(mixed.generation(), Generation::All);
        assert!(mixed.is_full());

        let twice_young = PauseEvent::new(EventType::Gc, 0.0, 0.1)
            .with_detail(PauseEvent::new(EventType::DefNew, 0.0, 0.05))
            .with_detail(PauseEvent::new(EventType::ParNew, 0.0, 0.05));
        assert_eq!(twice_young.generation(), Generation::Young);
        assert!(!twice_young.is_full());
    }

    #[test]
    fn test_generation_follows_add_detail() {
        let mut event = PauseEvent::new(EventType::Gc, 0.0, 0.1);
        event.add_detail(PauseEvent::new(EventType::DefNew, 0.0, 0.05));
        assert_eq!(event.generation(), Generation::Young);

        event.add_detail(PauseEvent::new(EventType::Tenured, 0.0, 0.05));
        assert_eq!(event.generation(), Generation::All);
    }

    #[test]
    fn test_all_detail_makes_all() {
        let event = PauseEvent::new(EventType::Gc, 0.0, 0.1)
            .with_detail(PauseEvent::new(EventType::G1Heap, 0.0, 0.0));
        assert_eq!(event.generation(), Generation::All);
    }

    #[test]
    fn test_full_gc_type_is_full_even_with_single_detail() {
        let event = PauseEvent::new(EventType::FullGc, 0.0, 1.0)
            .with_detail(PauseEvent::new(EventType::PsYoungGen, 0.0, 0.0));
        assert!(event.is_full());
    }

    #[test]
    fn test_display_type() {
        let event = PauseEvent::new(EventType::Gc, 0.0, 0.1)
            .with_detail(PauseEvent::new(EventType::ParNew, 0.0, 0.05))
            .with_detail(PauseEvent::new(EventType::Cms, 0.0, 0.05));
        assert_eq!(event.display_type(), "GC; ParNew; CMS");
        assert_eq!(event.type_name().as_str(), "GC");
    }

    #[test]
    fn test_stop_the_world() {
        assert!(young_gc().is_stop_the_world());
        let concurrent = ConcurrentPhaseEvent::new(EventType::CmsConcurrentMark, 0.0, 0.1, 0.2);
        assert!(!concurrent.is_stop_the_world());
        assert!(VmOperationEvent::new(0.0, 0.01).is_stop_the_world());
    }

    #[test]
    fn test_concurrent_duration_never_below_pause() {
        let event = ConcurrentPhaseEvent::new(EventType::CmsConcurrentSweep, 0.0, 0.3, 0.1);
        assert_eq!(event.duration, 0.3);
    }

    #[test]
    fn test_young_detail_is_borrowed() {
        let event = young_gc();
        let young = event.young().unwrap();
        assert!(matches!(young, Cow::Borrowed(_)));
        assert_eq!(young.event_type(), EventType::ParNew);
        assert_eq!(young.pre_used, 600);
    }

    #[test]
    fn test_tenured_inferred_from_young_detail() {
        let event = young_gc();
        let tenured = event.tenured().unwrap();
        assert_eq!(tenured.event_type(), EventType::Tenured);
        assert_eq!(tenured.pre_used, 300);
        assert_eq!(tenured.post_used, 350);
        assert_eq!(tenured.total, 1300);
        assert!((tenured.pause - 0.01).abs() < 1e-9);
        assert_eq!(tenured.timestamp, 1.0);
    }

    #[test]
    fn test_young_inferred_from_tenured_detail() {
        let event = PauseEvent::new(EventType::FullGc, 5.0, 1.0)
            .with_memory(1000, 300, 3000)
            .with_detail(PauseEvent::new(EventType::Tenured, 5.0, 0.8).with_memory(700, 300, 2000));
        let young = event.young().unwrap();
        assert_eq!(young.event_type(), EventType::Young);
        assert_eq!(young.pre_used, 300);
        assert_eq!(young.post_used, 0);
        assert_eq!(young.total, 1000);
    }

    #[test]
    fn test_no_inference_with_three_generations() {
        let event = PauseEvent::new(EventType::FullGc, 5.0, 1.0)
            .with_memory(1000, 300, 3000)
            .with_detail(PauseEvent::new(EventType::Tenured, 5.0, 0.8).with_memory(700, 300, 2000))
            .with_detail(PauseEvent::new(EventType::Perm, 5.0, 0.1).with_memory(50, 50, 100));
        assert!(event.young().is_none());
        assert!(event.tenured().is_some());
    }

    #[test]
    fn test_no_inference_without_details() {
        let event = PauseEvent::new(EventType::Gc, 0.0, 0.1).with_memory(10, 5, 20);
        assert!(event.young().is_none());
        assert!(event.tenured().is_none());
    }

    #[test]
    fn test_initial_mark_via_detail() {
        let event = PauseEvent::new(EventType::Gc, 0.0, 0.01)
            .with_detail(PauseEvent::new(EventType::CmsInitialMark, 0.0, 0.01));
        assert!(event.is_initial_mark());
        assert!(!event.is_remark());
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(young_gc(), young_gc());
        let mut other = young_gc();
        other.pause = 0.06;
        assert_ne!(young_gc(), other);
    }

    #[test]
    fn test_json_round_trip_with_details() {
        let line = r#"{"kind":"pause","timestamp":1.5,"datestamp":"2024-03-01T10:00:00.123+01:00","type":"GC","pre_used":900,"post_used":400,"total":2000,"pause":0.05,"details":[{"timestamp":1.5,"type":"ParNew","pre_used":600,"post_used":50,"total":700,"pause":0.04}]}"#;
        let event: GcEvent = serde_json::from_str(line).unwrap();

        let pause = event.as_pause().unwrap();
        assert_eq!(pause.details().len(), 1);
        assert_eq!(event.display_type(), "GC; ParNew");
        assert!(event.datestamp().is_some());

        let encoded = serde_json::to_string(&event).unwrap();
        let decoded: GcEvent = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, event);
    }

    #[test]
    fn test_unknown_type_survives_json() {
        let line = r#"{"kind":"concurrent","timestamp":3.0,"type":"Concurrent Evacuation","pause":0.2,"duration":0.4}"#;
        let event: GcEvent = serde_json::from_str(line).unwrap();
        assert_eq!(event.event_type(), EventType::Unknown);
        assert_eq!(event.type_name().as_str(), "Concurrent Evacuation");
        assert!(!event.is_stop_the_world());
    }

    #[test]
    fn test_unknown_type_takes_family_concurrency() {
        let phase = ConcurrentPhaseEvent::new(TypeName::parse("ZGC-concurrent-mark"), 0.0, 0.1, 0.2);
        assert_eq!(phase.concurrency(), Concurrency::Concurrent);

        let pause = PauseEvent::new(TypeName::parse("Shenandoah Pause"), 0.0, 0.01);
        assert_eq!(pause.concurrency(), Concurrency::Serial);
        assert!(pause.is_stop_the_world());
    }

    #[test]
    fn test_json_duration_raised_to_pause() {
        let line = r#"{"kind":"concurrent","timestamp":2.0,"type":"CMS-concurrent-sweep","pause":0.5,"duration":0.1,"details":[{"timestamp":2.0,"type":"CMS-concurrent-sweep","pause":0.3}]}"#;
        let event: GcEvent = serde_json::from_str(line).unwrap();

        let phase = event.as_concurrent().unwrap();
        assert_eq!(phase.pause, 0.5);
        assert_eq!(phase.duration, 0.5);
        assert_eq!(phase.details()[0].duration, 0.3);
    }

    #[test]
    fn test_no_inference_with_split_counterpart() {
        let event = PauseEvent::new(EventType::Gc, 1.0, 0.1)
            .with_memory(1000, 600, 4000)
            .with_detail(PauseEvent::new(EventType::DefNew, 1.0, 0.02).with_memory(200, 20, 500))
            .with_detail(PauseEvent::new(EventType::ParNew, 1.0, 0.02).with_memory(100, 10, 500));
        assert!(event.young().is_some());
        assert!(event.tenured().is_none());
    }
}
