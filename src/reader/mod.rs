//! Producing `GcModel`s from log resources.
//!
//! This module handles:
//! - Fetching log content from files and HTTP URLs
//! - Decoding the normalized JSON-lines event stream
//! - Running a read on a worker thread with single-shot completion

pub mod jsonl;
pub mod resource;

pub use jsonl::{feed_events, parse_line, StreamStats};
pub use resource::{fetch_content, GcResource};

use crate::aggregator::GcModel;
use crate::utils::error::ReadError;
use log::info;
use std::thread::{self, JoinHandle};

/// A finished model together with the resource it was read from
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub resource: GcResource,
    pub model: GcModel,
}

/// Anything that can turn a resource into a finished model
///
/// **Public** - lets the series merger run on any event producer
pub trait ModelLoader {
    /// Read `resource` completely; metadata on `resource` is refreshed
    fn load(&self, resource: &mut GcResource) -> Result<GcModel, ReadError>;
}

/// Loader for the JSON-lines event stream
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLinesLoader;

impl ModelLoader for JsonLinesLoader {
    fn load(&self, resource: &mut GcResource) -> Result<GcModel, ReadError> {
        read_model(resource)
    }
}

/// Read one resource into a new model
///
/// **Public** - main entry point for reading a single log
///
/// # Errors
/// * `ReadError` - content could not be fetched; malformed lines do not fail
pub fn read_model(resource: &mut GcResource) -> Result<GcModel, ReadError> {
    info!("Reading GC log: {}", resource.url());

    let content = fetch_content(resource)?;

    let mut model = GcModel::new();
    model.set_url(resource.url());
    let stats = feed_events(&content, resource.url(), &mut model);

    info!(
        "Read {} events from {} ({} lines skipped)",
        stats.events,
        resource.url(),
        stats.skipped
    );

    Ok(model)
}

/// A read running on a worker thread
///
/// **Public** - completes exactly once; `wait` hands over the finished model
#[derive(Debug)]
pub struct PendingModel {
    url: String,
    handle: JoinHandle<Result<LoadedModel, ReadError>>,
}

impl PendingModel {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The worker has finished, `wait` will not block
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the read completes
    ///
    /// # Errors
    /// * `ReadError::Abandoned` - the worker died before finishing
    /// * any error of the read itself
    pub fn wait(self) -> Result<LoadedModel, ReadError> {
        match self.handle.join() {
            Ok(result) => result,
            Err(_) => Err(ReadError::Abandoned(self.url)),
        }
    }
}

/// Start reading `resource` on a worker thread
///
/// The model is built entirely on the worker and only handed over once
/// complete, so no reader ever sees a partial model.
pub fn load_in_background<L>(loader: L, mut resource: GcResource) -> PendingModel
where
    L: ModelLoader + Send + 'static,
{
    let url = resource.url().to_string();
    let handle = thread::spawn(move || {
        let model = loader.load(&mut resource)?;
        Ok(LoadedModel { resource, model })
    });

    PendingModel { url, handle }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_log(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_read_model_sets_url() {
        let file = write_log(&[r#"{"kind":"pause","timestamp":1.0,"type":"GC","pause":0.02}"#]);
        let mut resource = GcResource::new(file.path().to_string_lossy());

        let model = read_model(&mut resource).unwrap();
        assert_eq!(model.size(), 1);
        assert_eq!(model.url(), Some(resource.url()));
        assert!(resource.content_length().is_some());
    }

    #[test]
    fn test_empty_resource_is_empty_model() {
        let file = write_log(&[]);
        let mut resource = GcResource::new(file.path().to_string_lossy());
        let model = read_model(&mut resource).unwrap();
        assert!(model.is_empty());
    }

    #[test]
    fn test_load_in_background() {
        let file = write_log(&[
            r#"{"kind":"pause","timestamp":1.0,"type":"GC","pause":0.02}"#,
            r#"{"kind":"pause","timestamp":2.0,"type":"Full GC","pause":0.5}"#,
        ]);
        let resource = GcResource::new(file.path().to_string_lossy());

        let pending = load_in_background(JsonLinesLoader, resource);
        let loaded = pending.wait().unwrap();

        assert_eq!(loaded.model.size(), 2);
        assert_eq!(loaded.model.full_gc_events().len(), 1);
        assert!(loaded.resource.last_modified().is_some());
    }

    #[test]
    fn test_load_in_background_reports_errors() {
        let resource = GcResource::new("/no/such/dir/gc.jsonl");
        let pending = load_in_background(JsonLinesLoader, resource);
        assert!(matches!(pending.wait(), Err(ReadError::Io { .. })));
    }
}
