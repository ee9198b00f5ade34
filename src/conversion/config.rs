//! Conversion configuration

/// Input file read when none is given on the command line
pub const DEFAULT_INPUT_FILE: &str = "IslamicDB.json";

/// Output file written when none is given on the command line
pub const DEFAULT_OUTPUT_FILE: &str = "islamic_quiz_output.sql";

/// Configuration for a conversion run
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Suppress progress output, keeping only failure diagnostics
    pub quiet: bool,
}

impl ConvertConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set quiet mode
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}
