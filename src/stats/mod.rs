//! Numeric accumulators with no GC knowledge.
//!
//! - `DoubleData` / `IntData`: online count, sum, mean, deviation, min, max
//! - `RegressionLine`: online least-squares slope

pub mod accumulator;
pub mod regression;

pub use accumulator::{DoubleData, IntData};
pub use regression::RegressionLine;
