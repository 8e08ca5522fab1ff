//! Chronological merge of rotated log fragments.
//!
//! The merger:
//! 1. Loads every resource (failures are logged and dropped)
//! 2. Computes a start marker per surviving model
//! 3. Refuses to order dated and elapsed markers against each other
//! 4. Sorts by start marker
//! 5. Replays every event into one fresh model

use super::marker::{start_marker, StartMarker};
use super::CancelFlag;
use crate::aggregator::GcModel;
use crate::reader::{GcResource, LoadedModel, ModelLoader};
use crate::utils::error::SeriesError;
use log::{debug, info, warn};
use std::cmp::Ordering;

/// Load and merge a series of resources into one model
///
/// **Public** - main entry point for series loading
///
/// # Arguments
/// * `resources` - Resources in any order
/// * `loader` - Producer used for every resource
/// * `cancel` - Checked before each resource is loaded
///
/// # Errors
/// * `SeriesError::EmptySeries` - `resources` is empty
/// * `SeriesError::Cancelled` - `cancel` was raised between two resources
/// * `SeriesError::NoModelsLoaded` - every resource failed to load
/// * errors of `merge_models`
pub fn merge_series<L>(
    resources: Vec<GcResource>,
    loader: &L,
    cancel: &CancelFlag,
) -> Result<GcModel, SeriesError>
where
    L: ModelLoader + ?Sized,
{
    if resources.is_empty() {
        return Err(SeriesError::EmptySeries);
    }

    let requested = resources.len();
    info!("Loading series of {} resources", requested);

    let mut loaded = Vec::with_capacity(requested);
    for mut resource in resources {
        if cancel.is_cancelled() {
            info!("Series load cancelled before {}", resource.url());
            return Err(SeriesError::Cancelled);
        }

        match loader.load(&mut resource) {
            Ok(model) => loaded.push(LoadedModel { resource, model }),
            Err(e) => {
                warn!("Dropping {} from series: {}", resource.url(), e);
            }
        }
    }

    if loaded.is_empty() {
        return Err(SeriesError::NoModelsLoaded(requested));
    }

    merge_models(loaded)
}

/// Order already-loaded models and replay them into one
///
/// **Public** - usable when models were produced elsewhere
///
/// # Errors
/// * `SeriesError::NoModelsLoaded` - `loaded` is empty
/// * `SeriesError::NoStartMarker` - a model has no events and no creation time
/// * `SeriesError::MixedTimestampKinds` - dated and elapsed markers are mixed
pub fn merge_models(loaded: Vec<LoadedModel>) -> Result<GcModel, SeriesError> {
    if loaded.is_empty() {
        return Err(SeriesError::NoModelsLoaded(0));
    }

    // Step 1: Compute start markers
    let mut keyed = Vec::with_capacity(loaded.len());
    for entry in loaded {
        let marker = start_marker(&entry)
            .ok_or_else(|| SeriesError::NoStartMarker(entry.resource.url().to_string()))?;
        debug!("Start marker of {}: {}", entry.resource.url(), marker);
        keyed.push((marker, entry));
    }

    // Step 2: Reject mixed kinds
    ensure_single_kind(&keyed)?;

    // Step 3: Sort (stable, so equal markers keep input order)
    keyed.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    // Step 4: Replay
    let mut merged = GcModel::new();
    for (_, entry) in &keyed {
        debug!(
            "Replaying {} events from {}",
            entry.model.size(),
            entry.resource.url()
        );
        for event in entry.model.events() {
            merged.add(event.clone());
        }
    }

    // Only the newest fragment can still be appended to
    if let Some((_, last)) = keyed.last() {
        merged.set_url(last.resource.url());
    }

    info!(
        "Merged {} resources into {} events",
        keyed.len(),
        merged.size()
    );

    Ok(merged)
}

/// Fail when dated and elapsed markers occur together
///
/// **Private** - internal helper for merge_models
fn ensure_single_kind(keyed: &[(StartMarker, LoadedModel)]) -> Result<(), SeriesError> {
    let (dated, elapsed): (Vec<_>, Vec<_>) = keyed.iter().partition(|(marker, _)| marker.is_date());

    if dated.is_empty() || elapsed.is_empty() {
        return Ok(());
    }

    let urls = |entries: Vec<&(StartMarker, LoadedModel)>| {
        entries
            .into_iter()
            .map(|(_, entry)| entry.resource.url().to_string())
            .collect::<Vec<_>>()
    };

    Err(SeriesError::MixedTimestampKinds {
        dated: urls(dated),
        elapsed: urls(elapsed),
    })
}
