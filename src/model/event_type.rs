//! Catalog of garbage-collection event types.
//!
//! Every line a collector writes maps to one named type. The catalog is
//! closed and known at compile time: serial, parallel, CMS (including the
//! AdaptiveSizePolicy variant) and G1. Names that are not in the catalog
//! map to `EventType::Unknown`; the event keeps the raw name (see
//! `TypeName`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Heap region an event type collects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Generation {
    Young,
    Tenured,
    Perm,
    /// More than one region
    All,
}

impl Generation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Young => "young",
            Self::Tenured => "tenured",
            Self::Perm => "perm",
            Self::All => "all",
        }
    }
}

impl std::str::FromStr for Generation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "young" => Ok(Self::Young),
            "tenured" | "old" => Ok(Self::Tenured),
            "perm" | "metaspace" => Ok(Self::Perm),
            "all" => Ok(Self::All),
            other => Err(format!(
                "Invalid generation: {other}. Must be one of: young, tenured, perm, all"
            )),
        }
    }
}

/// Whether application threads keep running during the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concurrency {
    Serial,
    Concurrent,
}

/// Real collections versus marker lines that only frame a concurrent cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Collection,
    ConcurrencyHelper,
}

/// Shape of the log line a type is printed with. Only parsers care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogPattern {
    /// Name only
    Gc,
    /// Name and pause
    GcPause,
    /// Name and memory
    GcMemory,
    /// Name, memory and pause
    GcMemoryPause,
    /// Name, pause and wall-clock duration
    GcPauseDuration,
}

// Each row: Variant => "canonical name" [as "display name"], generation,
// concurrency, pattern, collection kind
macro_rules! event_types {
    (@display $name:literal) => { $name };
    (@display $name:literal, $display:literal) => { $display };
    ($(
        $variant:ident => $name:literal $(as $display:literal)?,
        $gen:ident, $conc:ident, $pattern:ident, $kind:ident;
    )*) => {
        /// A known garbage-collection event type
        ///
        /// **Public** - immutable flyweight; all metadata is static
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum EventType {
            $($variant,)*
            /// A name not present in the catalog
            Unknown,
        }

        impl EventType {
            const CATALOG: &'static [EventType] = &[$(EventType::$variant,)*];

            /// Canonical name, unique across the catalog
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                    Self::Unknown => "unknown",
                }
            }

            /// Name used in reports
            pub fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => event_types!(@display $name $(, $display)?),)*
                    Self::Unknown => "Unknown",
                }
            }

            pub fn generation(self) -> Generation {
                match self {
                    $(Self::$variant => Generation::$gen,)*
                    Self::Unknown => Generation::Young,
                }
            }

            pub fn concurrency(self) -> Concurrency {
                match self {
                    $(Self::$variant => Concurrency::$conc,)*
                    Self::Unknown => Concurrency::Serial,
                }
            }

            pub fn pattern(self) -> LogPattern {
                match self {
                    $(Self::$variant => LogPattern::$pattern,)*
                    Self::Unknown => LogPattern::GcMemoryPause,
                }
            }

            pub fn collection_kind(self) -> CollectionKind {
                match self {
                    $(Self::$variant => CollectionKind::$kind,)*
                    Self::Unknown => CollectionKind::Collection,
                }
            }
        }
    };
}

event_types! {
    // Generic collections (serial and parallel collectors, all JDKs)
    Gc => "GC", Young, Serial, GcMemoryPause, Collection;
    GcPromotionFailed => "GC--", Young, Serial, GcMemoryPause, Collection;
    GcAllocationFailure => "GC (Allocation Failure)", Young, Serial, GcMemoryPause, Collection;
    GcSystemGc => "GC (System.gc())", Young, Serial, GcMemoryPause, Collection;
    GcGcLocker => "GC (GCLocker Initiated GC)", Young, Serial, GcMemoryPause, Collection;
    GcMetadataThreshold => "GC (Metadata GC Threshold)", Young, Serial, GcMemoryPause, Collection;
    GcCmsInitialMark => "GC (CMS Initial Mark)", Young, Serial, GcMemoryPause, Collection;
    GcCmsFinalRemark => "GC (CMS Final Remark)", Young, Serial, GcMemoryPause, Collection;
    FullGc => "Full GC", All, Serial, GcMemoryPause, Collection;
    FullGcSystem => "Full GC (System)", All, Serial, GcMemoryPause, Collection;
    FullGcSystemGc => "Full GC (System.gc())", All, Serial, GcMemoryPause, Collection;
    FullGcAllocationFailure => "Full GC (Allocation Failure)", All, Serial, GcMemoryPause, Collection;
    FullGcErgonomics => "Full GC (Ergonomics)", All, Serial, GcMemoryPause, Collection;
    FullGcMetadataThreshold => "Full GC (Metadata GC Threshold)", All, Serial, GcMemoryPause, Collection;
    FullGcLastDitch => "Full GC (Last ditch collection)", All, Serial, GcMemoryPause, Collection;
    FullGcGcLocker => "Full GC (GCLocker Initiated GC)", All, Serial, GcMemoryPause, Collection;
    FullGcHeapInspection => "Full GC (Heap Inspection Initiated GC)", All, Serial, GcMemoryPause, Collection;
    FullGcHeapDump => "Full GC (Heap Dump Initiated GC)", All, Serial, GcMemoryPause, Collection;

    // Young generation details
    Young => "Young" as "Young Generation", Young, Serial, GcMemoryPause, Collection;
    DefNew => "DefNew", Young, Serial, GcMemoryPause, Collection;
    ParNew => "ParNew", Young, Serial, GcMemoryPause, Collection;
    ParNewPromotionFailed => "ParNew (promotion failed)", Young, Serial, GcMemoryPause, Collection;
    AsParNew => "ASParNew", Young, Serial, GcMemoryPause, Collection;
    PsYoungGen => "PSYoungGen", Young, Serial, GcMemoryPause, Collection;

    // Tenured generation details
    Tenured => "Tenured", Tenured, Serial, GcMemoryPause, Collection;
    PsOldGen => "PSOldGen", Tenured, Serial, GcMemoryPause, Collection;
    ParOldGen => "ParOldGen", Tenured, Serial, GcMemoryPause, Collection;
    Cms => "CMS", Tenured, Serial, GcMemoryPause, Collection;
    CmsConcurrentModeFailure => "CMS (concurrent mode failure)", Tenured, Serial, GcMemoryPause, Collection;
    CmsConcurrentModeInterrupted => "CMS (concurrent mode interrupted)", Tenured, Serial, GcMemoryPause, Collection;
    AsCms => "ASCMS", Tenured, Serial, GcMemoryPause, Collection;
    AsCmsConcurrentModeFailure => "ASCMS (concurrent mode failure)", Tenured, Serial, GcMemoryPause, Collection;

    // Permanent generation / metaspace details
    Perm => "Perm", Perm, Serial, GcMemoryPause, Collection;
    PsPermGen => "PSPermGen", Perm, Serial, GcMemoryPause, Collection;
    CmsPerm => "CMS Perm", Perm, Serial, GcMemoryPause, Collection;
    Metaspace => "Metaspace", Perm, Serial, GcMemoryPause, Collection;

    // CMS
    CmsInitialMark => "CMS-initial-mark", Tenured, Serial, GcMemoryPause, Collection;
    CmsRemark => "CMS-remark", Tenured, Serial, GcMemoryPause, Collection;
    CmsRescanParallel => "Rescan (parallel)", Tenured, Serial, GcPause, Collection;
    CmsRescanNonParallel => "Rescan (non-parallel)", Tenured, Serial, GcPause, Collection;
    CmsGreyObjectRescan => "grey object rescan", Tenured, Serial, GcPause, Collection;
    CmsRootRescan => "root rescan", Tenured, Serial, GcPause, Collection;
    CmsWeakRefsProcessing => "weak refs processing", Tenured, Serial, GcPause, Collection;
    CmsClassUnloading => "class unloading", Tenured, Serial, GcPause, Collection;
    CmsScrubSymbolTable => "scrub symbol table", Tenured, Serial, GcPause, Collection;
    CmsScrubStringTable => "scrub string table", Tenured, Serial, GcPause, Collection;
    CmsConcurrentMarkStart => "CMS-concurrent-mark-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    CmsConcurrentMark => "CMS-concurrent-mark", Tenured, Concurrent, GcPauseDuration, Collection;
    CmsConcurrentPrecleanStart => "CMS-concurrent-preclean-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    CmsConcurrentPreclean => "CMS-concurrent-preclean", Tenured, Concurrent, GcPauseDuration, Collection;
    CmsConcurrentAbortablePrecleanStart => "CMS-concurrent-abortable-preclean-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    CmsConcurrentAbortablePreclean => "CMS-concurrent-abortable-preclean", Tenured, Concurrent, GcPauseDuration, Collection;
    CmsAbortPrecleanDueToTime => "CMS: abort preclean due to time", Tenured, Concurrent, Gc, ConcurrencyHelper;
    CmsConcurrentSweepStart => "CMS-concurrent-sweep-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    CmsConcurrentSweep => "CMS-concurrent-sweep", Tenured, Concurrent, GcPauseDuration, Collection;
    CmsConcurrentResetStart => "CMS-concurrent-reset-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    CmsConcurrentReset => "CMS-concurrent-reset", Tenured, Concurrent, GcPauseDuration, Collection;

    // CMS with AdaptiveSizePolicy
    AsCmsInitialMark => "ASCMS-initial-mark", Tenured, Serial, GcMemoryPause, Collection;
    AsCmsRemark => "ASCMS-remark", Tenured, Serial, GcMemoryPause, Collection;
    AsCmsConcurrentMarkStart => "ASCMS-concurrent-mark-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    AsCmsConcurrentMark => "ASCMS-concurrent-mark", Tenured, Concurrent, GcPauseDuration, Collection;
    AsCmsConcurrentPrecleanStart => "ASCMS-concurrent-preclean-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    AsCmsConcurrentPreclean => "ASCMS-concurrent-preclean", Tenured, Concurrent, GcPauseDuration, Collection;
    AsCmsConcurrentSweepStart => "ASCMS-concurrent-sweep-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    AsCmsConcurrentSweep => "ASCMS-concurrent-sweep", Tenured, Concurrent, GcPauseDuration, Collection;
    AsCmsConcurrentResetStart => "ASCMS-concurrent-reset-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    AsCmsConcurrentReset => "ASCMS-concurrent-reset", Tenured, Concurrent, GcPauseDuration, Collection;

    // G1 pauses
    G1Young => "GC pause (young)", Young, Serial, GcMemoryPause, Collection;
    G1YoungToSpaceOverflow => "GC pause (young) (to-space overflow)", Young, Serial, GcMemoryPause, Collection;
    G1YoungToSpaceExhausted => "GC pause (young) (to-space exhausted)", Young, Serial, GcMemoryPause, Collection;
    G1YoungInitialMark => "GC pause (young) (initial-mark)", Young, Serial, GcMemoryPause, Collection;
    G1YoungInitialMarkToSpaceOverflow => "GC pause (young) (initial-mark) (to-space overflow)", Young, Serial, GcMemoryPause, Collection;
    G1Partial => "GC pause (partial)", All, Serial, GcMemoryPause, Collection;
    G1PartialInitialMark => "GC pause (partial) (initial-mark)", All, Serial, GcMemoryPause, Collection;
    G1Mixed => "GC pause (mixed)", All, Serial, GcMemoryPause, Collection;
    G1MixedInitialMark => "GC pause (mixed) (initial-mark)", All, Serial, GcMemoryPause, Collection;
    G1MixedToSpaceExhausted => "GC pause (mixed) (to-space exhausted)", All, Serial, GcMemoryPause, Collection;
    G1EvacuationYoung => "GC pause (G1 Evacuation Pause) (young)", Young, Serial, GcMemoryPause, Collection;
    G1EvacuationYoungInitialMark => "GC pause (G1 Evacuation Pause) (young) (initial-mark)", Young, Serial, GcMemoryPause, Collection;
    G1EvacuationMixed => "GC pause (G1 Evacuation Pause) (mixed)", All, Serial, GcMemoryPause, Collection;
    G1HumongousYoung => "GC pause (G1 Humongous Allocation) (young)", Young, Serial, GcMemoryPause, Collection;
    G1HumongousYoungInitialMark => "GC pause (G1 Humongous Allocation) (young) (initial-mark)", Young, Serial, GcMemoryPause, Collection;
    G1MetadataYoungInitialMark => "GC pause (Metadata GC Threshold) (young) (initial-mark)", Young, Serial, GcMemoryPause, Collection;
    G1GcLockerYoung => "GC pause (GCLocker Initiated GC) (young)", Young, Serial, GcMemoryPause, Collection;
    G1Remark => "GC remark", Tenured, Serial, GcPause, Collection;
    G1RefProc => "GC ref-proc", Tenured, Serial, GcPause, Collection;
    G1Cleanup => "GC cleanup", Tenured, Serial, GcMemoryPause, Collection;

    // G1 heap region details
    G1Eden => "Eden", Young, Serial, GcMemory, Collection;
    G1Survivors => "Survivors", Young, Serial, GcMemory, Collection;
    G1Heap => "Heap", All, Serial, GcMemory, Collection;

    // G1 concurrent cycle
    G1ConcurrentRootRegionScanStart => "GC concurrent-root-region-scan-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    G1ConcurrentRootRegionScanEnd => "GC concurrent-root-region-scan-end", Tenured, Concurrent, GcPause, Collection;
    G1ConcurrentMarkStart => "GC concurrent-mark-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    G1ConcurrentMarkEnd => "GC concurrent-mark-end", Tenured, Concurrent, GcPause, Collection;
    G1ConcurrentMarkAbort => "GC concurrent-mark-abort", Tenured, Concurrent, Gc, ConcurrencyHelper;
    G1ConcurrentMarkResetForOverflow => "GC concurrent-mark-reset-for-overflow", Tenured, Concurrent, Gc, ConcurrencyHelper;
    G1ConcurrentCleanupStart => "GC concurrent-cleanup-start", Tenured, Concurrent, Gc, ConcurrencyHelper;
    G1ConcurrentCleanupEnd => "GC concurrent-cleanup-end", Tenured, Concurrent, GcPause, Collection;
    G1ConcurrentStringDeduplication => "GC concurrent-string-deduplication", All, Concurrent, GcMemoryPause, Collection;

    // Safepoint bookkeeping
    VmOperationStopped => "Total time for which application threads were stopped" as "Application stopped", All, Serial, GcPause, Collection;
    ApplicationTime => "Application time", All, Concurrent, GcPause, ConcurrencyHelper;
}

/// Name -> type index, built once from the catalog
fn name_index() -> &'static HashMap<&'static str, EventType> {
    static INDEX: OnceLock<HashMap<&'static str, EventType>> = OnceLock::new();
    INDEX.get_or_init(|| {
        EventType::CATALOG
            .iter()
            .map(|event_type| (event_type.name(), *event_type))
            .collect()
    })
}

impl EventType {
    /// Look up a type by its canonical name
    ///
    /// **Public** - exact match only; decorated display strings do not resolve
    pub fn lookup(name: &str) -> Option<Self> {
        name_index().get(name).copied()
    }

    /// Every known type in declaration order (excludes `Unknown`)
    pub fn all() -> &'static [EventType] {
        Self::CATALOG
    }

    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }

    pub fn is_concurrency_helper(self) -> bool {
        self.collection_kind() == CollectionKind::ConcurrencyHelper
    }

    /// Start of a concurrent cycle's initial-mark pause (CMS, ASCMS, G1)
    pub fn is_initial_mark(self) -> bool {
        matches!(
            self,
            Self::CmsInitialMark
                | Self::AsCmsInitialMark
                | Self::GcCmsInitialMark
                | Self::G1YoungInitialMark
                | Self::G1YoungInitialMarkToSpaceOverflow
                | Self::G1PartialInitialMark
                | Self::G1MixedInitialMark
                | Self::G1EvacuationYoungInitialMark
                | Self::G1HumongousYoungInitialMark
                | Self::G1MetadataYoungInitialMark
        )
    }

    /// Final marking pause of a concurrent cycle (CMS, ASCMS, G1)
    pub fn is_remark(self) -> bool {
        matches!(
            self,
            Self::CmsRemark | Self::AsCmsRemark | Self::GcCmsFinalRemark | Self::G1Remark
        )
    }

    /// First concurrent phase of a cycle
    pub fn is_concurrent_collection_start(self) -> bool {
        matches!(
            self,
            Self::CmsConcurrentMarkStart
                | Self::AsCmsConcurrentMarkStart
                | Self::G1ConcurrentMarkStart
        )
    }

    /// Last concurrent phase of a cycle
    pub fn is_concurrent_collection_end(self) -> bool {
        matches!(
            self,
            Self::CmsConcurrentReset | Self::AsCmsConcurrentReset | Self::G1ConcurrentCleanupEnd
        )
    }
}

impl std::str::FromStr for EventType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::lookup(s.trim()).unwrap_or(Self::Unknown))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The type of one event as written in the log
///
/// Keeps the raw name when it did not resolve to a catalog entry, so
/// reports can still show what the collector printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    event_type: EventType,
    raw: Option<Box<str>>,
}

impl TypeName {
    /// Resolve a name against the catalog
    pub fn parse(name: &str) -> Self {
        match EventType::lookup(name.trim()) {
            Some(event_type) => Self::from(event_type),
            None => Self {
                event_type: EventType::Unknown,
                raw: Some(name.trim().into()),
            },
        }
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    /// Canonical name, or the raw name for unknown types
    pub fn as_str(&self) -> &str {
        self.raw.as_deref().unwrap_or(self.event_type.name())
    }
}

impl From<EventType> for TypeName {
    fn from(event_type: EventType) -> Self {
        Self {
            event_type,
            raw: None,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TypeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TypeName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::parse(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for event_type in EventType::all() {
            assert!(
                seen.insert(event_type.name()),
                "duplicate name {}",
                event_type.name()
            );
        }
        assert_eq!(seen.len(), EventType::all().len());
    }

    #[test]
    fn test_catalog_size() {
        assert!(EventType::all().len() >= 100);
        assert!(!EventType::all().contains(&EventType::Unknown));
    }

    #[test]
    fn test_lookup_every_entry() {
        for event_type in EventType::all() {
            assert_eq!(EventType::lookup(event_type.name()), Some(*event_type));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(EventType::lookup("ParNew"), Some(EventType::ParNew));
        assert_eq!(EventType::lookup("parnew"), None);
        assert_eq!(EventType::lookup("GC; ParNew"), None);
    }

    #[test]
    fn test_from_str_falls_back_to_unknown() {
        assert_eq!("DefNew".parse::<EventType>().unwrap(), EventType::DefNew);
        assert_eq!(
            "Shenandoah Pause".parse::<EventType>().unwrap(),
            EventType::Unknown
        );
    }

    #[test]
    fn test_metadata() {
        assert_eq!(EventType::FullGc.generation(), Generation::All);
        assert_eq!(EventType::ParNew.generation(), Generation::Young);
        assert_eq!(EventType::CmsPerm.generation(), Generation::Perm);
        assert_eq!(
            EventType::CmsConcurrentMark.concurrency(),
            Concurrency::Concurrent
        );
        assert_eq!(
            EventType::CmsConcurrentMark.pattern(),
            LogPattern::GcPauseDuration
        );
        assert!(EventType::CmsConcurrentSweepStart.is_concurrency_helper());
        assert!(!EventType::CmsConcurrentSweep.is_concurrency_helper());
    }

    #[test]
    fn test_display_name_defaults_to_name() {
        assert_eq!(EventType::DefNew.display_name(), "DefNew");
        assert_eq!(
            EventType::VmOperationStopped.display_name(),
            "Application stopped"
        );
    }

    #[test]
    fn test_classification() {
        assert!(EventType::CmsInitialMark.is_initial_mark());
        assert!(EventType::G1YoungInitialMark.is_initial_mark());
        assert!(!EventType::G1Young.is_initial_mark());

        assert!(EventType::CmsRemark.is_remark());
        assert!(EventType::G1Remark.is_remark());
        assert!(!EventType::CmsInitialMark.is_remark());

        assert!(EventType::CmsConcurrentMarkStart.is_concurrent_collection_start());
        assert!(EventType::AsCmsConcurrentMarkStart.is_concurrent_collection_start());
        assert!(EventType::G1ConcurrentMarkStart.is_concurrent_collection_start());
        assert!(!EventType::CmsConcurrentMark.is_concurrent_collection_start());

        assert!(EventType::CmsConcurrentReset.is_concurrent_collection_end());
        assert!(EventType::G1ConcurrentCleanupEnd.is_concurrent_collection_end());
        assert!(!EventType::CmsConcurrentResetStart.is_concurrent_collection_end());
    }

    #[test]
    fn test_type_name_keeps_unknown_raw_name() {
        let known = TypeName::parse("ParNew");
        assert_eq!(known.event_type(), EventType::ParNew);
        assert_eq!(known.as_str(), "ParNew");

        let unknown = TypeName::parse("ZGC Pause Mark Start");
        assert_eq!(unknown.event_type(), EventType::Unknown);
        assert_eq!(unknown.as_str(), "ZGC Pause Mark Start");
    }

    #[test]
    fn test_type_name_serde() {
        let name: TypeName = serde_json::from_str("\"CMS-remark\"").unwrap();
        assert_eq!(name.event_type(), EventType::CmsRemark);
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"CMS-remark\"");
    }

    #[test]
    fn test_generation_from_str() {
        assert_eq!("old".parse::<Generation>(), Ok(Generation::Tenured));
        assert!("eden".parse::<Generation>().is_err());
    }
}
