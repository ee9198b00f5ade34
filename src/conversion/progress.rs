//! Progress and diagnostic output for conversion runs
//!
//! All messages go to standard output. Failures are always printed;
//! progress lines respect quiet mode.

/// Writer for the conversion diagnostic stream
#[derive(Debug, Clone, Default)]
pub struct ProgressLog {
    quiet: bool,
}

impl ProgressLog {
    /// Create a log honoring the given quiet setting
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print a success line with a checkmark
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("✓ {}", message);
        }
    }

    /// Print a failure line with a cross, regardless of quiet mode
    pub fn failure(&self, message: &str) {
        println!("✗ {}", message);
    }

    /// Print an indented progress line, two spaces per depth level
    pub fn step(&self, depth: usize, message: &str) {
        if !self.quiet {
            println!("{}{}", indent(depth), message);
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}
