//! JSON-lines event stream decoder.
//!
//! Format-specific parsers emit one serialized `GcEvent` per line. Blank
//! lines and lines starting with `#` are ignored. A malformed line is logged
//! and skipped; it never fails the whole resource.

use crate::aggregator::GcModel;
use crate::model::GcEvent;
use crate::utils::config::COMMENT_PREFIX;
use log::{debug, warn};

/// Outcome of decoding one event stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    /// Events fed to the model
    pub events: usize,
    /// Lines that could not be decoded
    pub skipped: usize,
}

/// Decode a single line
///
/// **Public** - `Ok(None)` for blank and comment lines
pub fn parse_line(line: &str) -> Result<Option<GcEvent>, serde_json::Error> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }
    serde_json::from_str(line).map(Some)
}

/// Decode every line of `content` and add the events to `model` in order
///
/// **Public** - main entry point for decoding
///
/// # Arguments
/// * `content` - Full text of the event stream
/// * `source` - Name used in log messages
/// * `model` - Model receiving the events
pub fn feed_events(content: &str, source: &str, model: &mut GcModel) -> StreamStats {
    let mut stats = StreamStats::default();

    for (index, line) in content.lines().enumerate() {
        match parse_line(line) {
            Ok(Some(event)) => {
                model.add(event);
                stats.events += 1;
            }
            Ok(None) => {}
            Err(e) => {
                // Log but don't fail - one bad line should not lose the log
                warn!("{}:{}: skipping malformed event: {}", source, index + 1, e);
                stats.skipped += 1;
            }
        }
    }

    debug!(
        "Decoded {} events from {} ({} skipped)",
        stats.events, source, stats.skipped
    );

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventType;

    #[test]
    fn test_parse_line_skips_comments_and_blanks() {
        assert!(parse_line("").unwrap().is_none());
        assert!(parse_line("   ").unwrap().is_none());
        assert!(parse_line("# rotated at 12:00").unwrap().is_none());
    }

    #[test]
    fn test_parse_line_event() {
        let event = parse_line(r#"{"kind":"pause","timestamp":0.5,"type":"DefNew","pause":0.01}"#)
            .unwrap()
            .unwrap();
        assert_eq!(event.event_type(), EventType::DefNew);
        assert_eq!(event.timestamp(), 0.5);
    }

    #[test]
    fn test_feed_events_skips_malformed_lines() {
        let content = r#"
# header
{"kind":"pause","timestamp":0.5,"type":"DefNew","pause":0.01}
{"kind":"pause","timestamp":
{"kind":"concurrent","timestamp":1.0,"type":"CMS-concurrent-mark","pause":0.1,"duration":0.2}
"#;
        let mut model = GcModel::new();
        let stats = feed_events(content, "test", &mut model);

        assert_eq!(stats.events, 2);
        assert_eq!(stats.skipped, 1);
        assert_eq!(model.size(), 2);
    }

    #[test]
    fn test_unknown_kind_is_skipped() {
        let mut model = GcModel::new();
        let stats = feed_events(
            r#"{"kind":"allocation_stall","timestamp":1.0}"#,
            "test",
            &mut model,
        );
        assert_eq!(stats.skipped, 1);
        assert!(model.is_empty());
    }

    #[test]
    fn test_concurrent_duration_raised_to_pause() {
        let mut model = GcModel::new();
        feed_events(
            r#"{"kind":"concurrent","timestamp":1.0,"type":"CMS-concurrent-preclean","pause":0.5,"duration":0.1}"#,
            "test",
            &mut model,
        );

        let durations = &model.concurrent_event_durations()["CMS-concurrent-preclean"];
        assert_eq!(durations.max(), Some(0.5));
        assert_eq!(model.concurrent_event_pauses()["CMS-concurrent-preclean"].max(), Some(0.5));
    }
}
