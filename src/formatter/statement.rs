//! Transformation of one question record into one INSERT fragment

use crate::error::SkipReason;
use crate::formatter::escape::sanitize;
use crate::mapping::Difficulty;
use crate::parser::document::Question;

/// Options per generated row; extra answers beyond this are dropped
pub const MAX_OPTIONS: usize = 4;

/// Minimum answers a question must carry to be convertible
pub const MIN_ANSWERS: usize = 3;

/// Characters of question text quoted in skip diagnostics
const PREVIEW_CHARS: usize = 50;

/// Column list of the target questions table
pub const QUESTION_COLUMNS: &str = "category_id, question_text, question_text_ar, \
option_a, option_a_ar, option_b, option_b_ar, option_c, option_c_ar, \
option_d, option_d_ar, correct_answer, difficulty";

/// Convert one question into an INSERT fragment
///
/// The fragment is two physical lines: the column header ending in VALUES,
/// then the comma-terminated value tuple. Only the `_ar` text columns are
/// populated; the plain text columns are left as empty literals for a later
/// translation pass. Rejections come back as a `SkipReason` so the caller
/// can log and move on.
pub fn format_question(
    question: &Question,
    category_id: &str,
    difficulty: Difficulty,
) -> Result<String, SkipReason> {
    let question_text = sanitize(&question.q);
    if question_text.is_empty() {
        return Err(SkipReason::EmptyText);
    }

    if question.answers.len() < MIN_ANSWERS {
        return Err(SkipReason::TooFewAnswers {
            preview: preview(&question_text),
        });
    }

    let mut options = Vec::with_capacity(MAX_OPTIONS);
    let mut correct_letter = 'a';
    for (index, option) in question.answers.iter().take(MAX_OPTIONS).enumerate() {
        options.push(sanitize(&option.answer));
        // Last flagged option wins; earlier matches are overwritten
        if option.is_correct() {
            correct_letter = (b'a' + index as u8) as char;
        }
    }
    while options.len() < MAX_OPTIONS {
        options.push(String::new());
    }

    Ok(format!(
        "INSERT INTO questions ({}) VALUES\n({}, '', '{}', '', '{}', '', '{}', '', '{}', '', '{}', '{}', '{}'),",
        QUESTION_COLUMNS,
        category_id,
        question_text,
        options[0],
        options[1],
        options[2],
        options[3],
        correct_letter,
        difficulty.as_str(),
    ))
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
