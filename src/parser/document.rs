//! Typed model of the quiz document tree
//!
//! The model is deliberately lenient: unknown fields are ignored and
//! missing fields take empty defaults, so partially filled records still
//! convert. Only the top-level `mainCategories` collection is checked for
//! presence, by modelling it as an `Option`.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level parsed quiz document
#[derive(Debug, Clone, Deserialize)]
pub struct QuizDocument {
    /// `None` when the input carries no recognizable categories collection
    #[serde(rename = "mainCategories")]
    pub main_categories: Option<Vec<MainCategory>>,
}

/// One main category with its display names and topics
#[derive(Debug, Clone, Deserialize)]
pub struct MainCategory {
    /// Source-language display label, key into the placeholder table
    #[serde(rename = "arabicName", default)]
    pub arabic_name: String,

    /// Alternate label used to synthesize placeholders for unknown categories
    #[serde(rename = "englishName", default)]
    pub english_name: Option<String>,

    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// A topic groups question sequences by level key
///
/// The level map preserves input order, so levels are visited exactly as
/// the document lists them.
#[derive(Debug, Clone, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "levelsData", default)]
    pub levels_data: Map<String, Value>,
}

/// One question record as it appears inside a level sequence
///
/// `q` stays an untyped value because the source data carries anything from
/// strings to bare numbers there; the sanitizer stringifies it later.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub q: Value,

    #[serde(default)]
    pub answers: Vec<AnswerOption>,
}

/// One answer option with its optional correctness flag
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerOption {
    #[serde(default)]
    pub answer: Value,

    #[serde(default)]
    pub t: Option<Value>,
}

impl AnswerOption {
    /// True when the flag compares equal to 1
    ///
    /// The flag is boolean-like: the number 1 (integer or 1.0) and boolean
    /// `true` both mark the option correct; every other value, including
    /// the string "1", does not.
    pub fn is_correct(&self) -> bool {
        match &self.t {
            Some(Value::Number(flag)) => flag.as_f64() == Some(1.0),
            Some(Value::Bool(flag)) => *flag,
            _ => false,
        }
    }
}
