//! Outcome reporting for conversion runs

use serde::{Deserialize, Serialize};

/// Counters collected over one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Number of INSERT fragments generated
    pub statement_count: usize,
    /// Number of questions rejected and logged
    pub skipped_questions: usize,
    /// Number of main categories visited
    pub category_count: usize,
    /// Number of topics visited
    pub topic_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when the report was collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionReport {
    fn default() -> Self {
        Self {
            statement_count: 0,
            skipped_questions: 0,
            category_count: 0,
            topic_count: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ConversionReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the closing summary line for the run
    pub fn summary(&self) -> String {
        format!("Generated {} SQL statements", self.statement_count)
    }
}
