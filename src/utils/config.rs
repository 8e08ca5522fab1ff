//! Configuration and constants for the analyzer.

use std::time::Duration;

/// Default timeout for fetching remote logs
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current summary schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default output path for the JSON summary
pub const DEFAULT_SUMMARY_PATH: &str = "gc-summary.json";

// Event stream input: one JSON object per line, '#' starts a comment line
pub const COMMENT_PREFIX: &str = "#";

// Separator between the parent and detail type names of a composite event
pub const TYPE_NAME_SEPARATOR: &str = "; ";

/// URL schemes served by the HTTP client instead of the filesystem
pub const REMOTE_SCHEMES: &[&str] = &["http://", "https://"];
