//! GC Log Analyzer
//!
//! Event taxonomy, incremental statistics and rotated-log merging for JVM
//! garbage-collection logs.
//!
//! This crate provides the core implementation for the `gclog` CLI tool.
//!
//! ## Getting Started
//!
//! Format-specific parsers emit events as JSON lines; the analyzer
//! aggregates them:
//!
//! ```bash
//! gclog analyze gc.jsonl --summary
//! gclog analyze gc.0.jsonl gc.1.jsonl gc.2.jsonl -o merged.json
//! ```
//!
//! From code, feed events to a `GcModel` in log order:
//!
//! ```ignore
//! let mut model = GcModel::new();
//! model.add(PauseEvent::new(EventType::ParNew, 1.25, 0.012).with_memory(8192, 1024, 16384));
//! println!("{:?}", model.throughput());
//! ```

pub mod aggregator;
pub mod commands;
pub mod model;
pub mod output;
pub mod reader;
pub mod series;
pub mod stats;
pub mod utils;
