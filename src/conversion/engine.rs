//! Core conversion engine for quiz JSON to SQL transformation

use crate::conversion::config::ConvertConfig;
use crate::conversion::progress::ProgressLog;
use crate::conversion::report::ConversionReport;
use crate::error::{ConvertError, ConvertResult, SkipReason};
use crate::formatter::statement::format_question;
use crate::mapping::{category_placeholder, Difficulty};
use crate::parser::document::MainCategory;
use crate::parser::QuizSource;
use serde_json::Value;
use std::path::Path;
use std::time::Instant;

/// Core conversion result
#[derive(Debug, Clone)]
pub struct SqlOutput {
    pub content: String,
    pub report: ConversionReport,
}

impl SqlOutput {
    /// Create a new SQL batch result
    pub fn new(content: String, report: ConversionReport) -> Self {
        Self { content, report }
    }

    /// Get the generated SQL text
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the output is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConvertConfig,
    progress: ProgressLog,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConvertConfig) -> Self {
        let progress = ProgressLog::new(config.quiet);
        Self { config, progress }
    }

    /// Get the engine configuration
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Convert a quiz JSON file into a SQL batch
    pub fn convert_file(&self, input: &Path, output: Option<&Path>) -> ConvertResult<SqlOutput> {
        let source = QuizSource::File(input.to_path_buf());
        self.convert_source(&source, output)
    }

    /// Convert quiz JSON from a source into a SQL batch
    ///
    /// Load and structure failures come back as `Err`; per-question
    /// problems are logged, counted in the report, and skipped. When an
    /// output path is given the batch is also written there, but a write
    /// failure never discards the in-memory result.
    pub fn convert_source(
        &self,
        source: &QuizSource,
        output: Option<&Path>,
    ) -> ConvertResult<SqlOutput> {
        let start_time = Instant::now();

        let document = match source.parse() {
            Ok(document) => document,
            Err(err) => {
                let err = ConvertError::Load(err);
                self.progress.failure(&err.to_string());
                return Err(err);
            }
        };
        self.progress.success("File loaded successfully");

        let categories = match document.main_categories {
            Some(categories) => categories,
            None => {
                let err = ConvertError::MissingCategories;
                self.progress.failure(&err.to_string());
                return Err(err);
            }
        };

        let mut report = ConversionReport::new();
        let statements = self.collect_statements(&categories, &mut report);
        let content = statements.join("\n");

        if let Some(path) = output {
            self.write_output(path, &content);
        }

        report.processing_time_ms = start_time.elapsed().as_millis() as u64;
        self.progress.success(&report.summary());

        Ok(SqlOutput::new(content, report))
    }

    /// Walk the category tree and collect one fragment per accepted question
    fn collect_statements(
        &self,
        categories: &[MainCategory],
        report: &mut ConversionReport,
    ) -> Vec<String> {
        let mut statements = Vec::new();

        for category in categories {
            let placeholder =
                category_placeholder(&category.arabic_name, category.english_name.as_deref());
            self.progress.step(
                0,
                &format!(
                    "Processing category: {} -> {}",
                    category.arabic_name, placeholder
                ),
            );
            report.category_count += 1;

            for topic in &category.topics {
                self.progress
                    .step(1, &format!("Processing topic: {}", topic.name));
                report.topic_count += 1;

                for (level, questions) in &topic.levels_data {
                    // Level values that are not arrays carry no questions
                    let entries = match questions.as_array() {
                        Some(entries) => entries,
                        None => continue,
                    };

                    let difficulty = Difficulty::from_level_key(level);
                    self.progress.step(
                        2,
                        &format!(
                            "Processing {} ({}): {} questions",
                            level,
                            difficulty.as_str(),
                            entries.len()
                        ),
                    );

                    for entry in entries {
                        match self.transform_entry(entry, &placeholder, difficulty) {
                            Ok(statement) => {
                                statements.push(statement);
                                report.statement_count += 1;
                            }
                            Err(reason) => {
                                self.log_skip(&reason);
                                report.skipped_questions += 1;
                            }
                        }
                    }
                }
            }
        }

        statements
    }

    /// Deserialize one level entry and format it as an INSERT fragment
    fn transform_entry(
        &self,
        entry: &Value,
        category_id: &str,
        difficulty: Difficulty,
    ) -> Result<String, SkipReason> {
        let question = serde_json::from_value(entry.clone())?;
        format_question(&question, category_id, difficulty)
    }

    fn log_skip(&self, reason: &SkipReason) {
        match reason {
            SkipReason::Malformed(_) => {
                self.progress
                    .step(2, &format!("Error processing question: {}", reason));
            }
            SkipReason::EmptyText | SkipReason::TooFewAnswers { .. } => {
                self.progress.step(2, &format!("Warning: {}", reason));
            }
        }
    }

    fn write_output(&self, path: &Path, content: &str) {
        match std::fs::write(path, content) {
            Ok(()) => {
                self.progress
                    .success(&format!("Results saved to: {}", path.display()));
            }
            Err(err) => {
                self.progress
                    .failure(&format!("Error saving file: {}", err));
            }
        }
    }
}
