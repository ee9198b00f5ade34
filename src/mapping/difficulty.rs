//! Level-key to difficulty-label mapping

/// Difficulty label stored in the generated rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Map a level key ("level1".."level3") to its difficulty
    ///
    /// Unrecognized keys fall back to `Medium`. That is a lenient default
    /// for malformed or future level identifiers, not an error.
    pub fn from_level_key(level: &str) -> Self {
        match level {
            "level1" => Difficulty::Easy,
            "level2" => Difficulty::Medium,
            "level3" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
