//! Start markers used to order the resources of a series.

use crate::model::Datestamp;
use crate::reader::LoadedModel;
use std::cmp::Ordering;
use std::fmt;

/// Where a resource begins on the timeline
///
/// The two kinds are not comparable with each other: `partial_cmp` returns
/// `None` across kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StartMarker {
    /// Absolute wall-clock date
    Date(Datestamp),
    /// Seconds since JVM start
    Elapsed(f64),
}

impl StartMarker {
    pub fn is_date(&self) -> bool {
        matches!(self, StartMarker::Date(_))
    }
}

impl PartialOrd for StartMarker {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (StartMarker::Date(a), StartMarker::Date(b)) => Some(a.cmp(b)),
            (StartMarker::Elapsed(a), StartMarker::Elapsed(b)) => Some(a.total_cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for StartMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartMarker::Date(date) => write!(f, "{}", date.to_rfc3339()),
            StartMarker::Elapsed(seconds) => write!(f, "{:.3}s", seconds),
        }
    }
}

/// Compute the start marker of a loaded resource
///
/// **Public** - fallback chain:
/// 1. first datestamp carried by any event
/// 2. timestamp of the first event
/// 3. creation time of the resource, as a date
///
/// # Returns
/// `None` when the model has no events and the resource no creation time
pub fn start_marker(loaded: &LoadedModel) -> Option<StartMarker> {
    let events = loaded.model.events();

    if let Some(date) = events.iter().find_map(|event| event.datestamp()) {
        return Some(StartMarker::Date(*date));
    }

    if let Some(first) = events.first() {
        return Some(StartMarker::Elapsed(first.timestamp()));
    }

    loaded
        .resource
        .created()
        .map(|created| StartMarker::Date(Datestamp::from(created)))
}
