//! JSON summary writer and reader.

use super::summary::Summary;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Write a summary to a pretty-printed JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `summary` - Summary to write
/// * `output_path` - Path to output JSON file; missing parent directories are created
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
pub fn write_summary(summary: &Summary, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing summary to: {}", output_path.display());

    validate_output_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), summary)?;

    debug!(
        "Summary written ({} bytes)",
        std::fs::metadata(output_path).map(|m| m.len()).unwrap_or(0)
    );

    Ok(())
}

/// Serialize a summary to a JSON string
pub fn summary_to_string(summary: &Summary) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Read a summary back from a JSON file
///
/// **Public** - used by the `validate` command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<Summary, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path)?;
    let summary: Summary = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Summary loaded: version {}, {} events",
        summary.version, summary.events.total
    );

    Ok(summary)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::GcModel;
    use crate::model::{EventType, PauseEvent};
    use tempfile::NamedTempFile;

    fn create_test_summary() -> Summary {
        let mut model = GcModel::new();
        model.set_url("gc-0.jsonl");
        model.add(PauseEvent::new(EventType::ParNew, 1.0, 0.02).with_memory(600, 100, 1024));
        model.add(PauseEvent::new(EventType::ParNew, 3.0, 0.03).with_memory(700, 150, 1024));
        Summary::from_model(&model)
    }

    #[test]
    fn test_write_and_read_summary() {
        let summary = create_test_summary();
        let temp_file = NamedTempFile::new().unwrap();

        write_summary(&summary, temp_file.path()).unwrap();
        let loaded = read_summary(temp_file.path()).unwrap();

        assert_eq!(loaded.version, summary.version);
        assert_eq!(loaded.url, summary.url);
        assert_eq!(loaded.events, summary.events);
        assert_eq!(loaded.pauses.all.count, 2);
        assert_eq!(loaded.memory.footprint, Some(1024));
    }

    #[test]
    fn test_summary_to_string() {
        let text = summary_to_string(&create_test_summary()).unwrap();
        assert!(text.contains("\"version\""));
        assert!(text.contains("gc-0.jsonl"));
    }

    #[test]
    fn test_validate_output_path_empty() {
        assert!(validate_output_path(Path::new("")).is_err());
    }

    #[test]
    fn test_validate_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(validate_output_path(temp_dir.path()).is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/summary.json");

        write_summary(&create_test_summary(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_read_invalid_json() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{ not json").unwrap();

        let result = read_summary(temp_file.path());
        assert!(matches!(result, Err(OutputError::SerializationFailed(_))));
    }
}
