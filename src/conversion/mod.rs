//! Conversion orchestration
//!
//! The engine walks the parsed quiz document in input order, collects
//! one INSERT fragment per accepted question, and reports progress and
//! counters along the way.

pub mod config;
pub mod engine;
pub mod progress;
pub mod report;

pub use config::{ConvertConfig, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE};
pub use engine::{ConversionEngine, SqlOutput};
pub use progress::ProgressLog;
pub use report::ConversionReport;

pub use crate::error::ConvertResult;
