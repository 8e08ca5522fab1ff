//! Resource handles and content fetching for GC logs.
//!
//! A resource is either a local file path or an `http(s)://` URL. Fetching
//! fills in the metadata that watchers use to detect changes.

use crate::utils::config::{DEFAULT_HTTP_TIMEOUT, REMOTE_SCHEMES};
use crate::utils::error::ReadError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::header::LAST_MODIFIED;
use std::path::Path;

/// Handle to one GC log
///
/// **Public** - identity plus change-detection metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GcResource {
    url: String,
    last_modified: Option<DateTime<Utc>>,
    content_length: Option<u64>,
    created: Option<DateTime<Utc>>,
}

impl GcResource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last_modified: None,
            content_length: None,
            created: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Served over HTTP rather than read from the filesystem
    pub fn is_remote(&self) -> bool {
        REMOTE_SCHEMES
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }

    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        self.last_modified
    }

    pub fn set_last_modified(&mut self, last_modified: Option<DateTime<Utc>>) {
        self.last_modified = last_modified;
    }

    pub fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    pub fn set_content_length(&mut self, content_length: Option<u64>) {
        self.content_length = content_length;
    }

    /// Filesystem creation time, when the platform reports one
    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn set_created(&mut self, created: Option<DateTime<Utc>>) {
        self.created = created;
    }

    /// Metadata differs from an earlier snapshot of the same resource
    pub fn differs_from(&self, earlier: &GcResource) -> bool {
        self.last_modified != earlier.last_modified
            || self.content_length != earlier.content_length
    }
}

/// Fetch the full content of a resource and refresh its metadata
///
/// **Public** - used by the event reader
///
/// # Errors
/// * `ReadError::Io` - local file missing or unreadable
/// * `ReadError::RequestFailed` - HTTP transport failure
/// * `ReadError::BadStatus` - HTTP response other than 2xx
pub fn fetch_content(resource: &mut GcResource) -> Result<String, ReadError> {
    if resource.is_remote() {
        fetch_remote(resource)
    } else {
        fetch_local(resource)
    }
}

/// Read a local file
///
/// **Private** - internal helper for fetch_content
fn fetch_local(resource: &mut GcResource) -> Result<String, ReadError> {
    let path = Path::new(&resource.url);
    let io_error = |source| ReadError::Io {
        url: resource.url.clone(),
        source,
    };

    let metadata = std::fs::metadata(path).map_err(io_error)?;
    let content = std::fs::read_to_string(path).map_err(io_error)?;

    resource.content_length = Some(metadata.len());
    resource.last_modified = metadata.modified().ok().map(DateTime::<Utc>::from);
    resource.created = metadata.created().ok().map(DateTime::<Utc>::from);

    debug!(
        "Read {} bytes from {} (modified {:?})",
        metadata.len(),
        resource.url,
        resource.last_modified
    );

    Ok(content)
}

/// Download a remote log
///
/// **Private** - internal helper for fetch_content
fn fetch_remote(resource: &mut GcResource) -> Result<String, ReadError> {
    info!("Downloading GC log: {}", resource.url);

    let client = Client::builder().timeout(DEFAULT_HTTP_TIMEOUT).build()?;
    let response = client.get(&resource.url).send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(ReadError::BadStatus {
            url: resource.url.clone(),
            status: status.as_u16(),
        });
    }

    resource.content_length = response.content_length();
    resource.last_modified = response
        .headers()
        .get(LAST_MODIFIED)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| DateTime::parse_from_rfc2822(value).ok())
        .map(|date| date.with_timezone(&Utc));
    // HTTP has no notion of creation time
    resource.created = None;

    let content = response.text()?;
    debug!("Downloaded {} bytes from {}", content.len(), resource.url);

    Ok(content)
}
