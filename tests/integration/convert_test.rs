//! Integration tests for the quiz JSON to SQL conversion workflow

#[cfg(test)]
mod quiz_conversion_tests {
    use pretty_assertions::assert_eq;
    use quizsql::{convert_quiz_json, convert_quiz_to_sql, ConversionEngine, ConvertConfig, QuizSource};
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    fn quiz_fixture() -> serde_json::Value {
        json!({
            "mainCategories": [
                {
                    "arabicName": "الفقه",
                    "englishName": "fiqh",
                    "topics": [
                        {
                            "name": "الطهارة",
                            "levelsData": {
                                "level1": [
                                    {"q": "سؤال ١", "answers": [
                                        {"answer": "أ", "t": 1},
                                        {"answer": "ب"},
                                        {"answer": "ج"}
                                    ]},
                                    {"q": "سؤال ٢", "answers": [
                                        {"answer": "أ"},
                                        {"answer": "ب", "t": 1},
                                        {"answer": "ج"},
                                        {"answer": "د"}
                                    ]}
                                ],
                                "level3": [
                                    {"q": "سؤال ٣", "answers": [
                                        {"answer": "أ"},
                                        {"answer": "ب"},
                                        {"answer": "ج", "t": 1}
                                    ]}
                                ]
                            }
                        }
                    ]
                },
                {
                    "arabicName": "السيرة",
                    "topics": [
                        {
                            "name": "الهجرة",
                            "levelsData": {
                                "level2": [
                                    {"q": "سؤال ٤", "answers": [
                                        {"answer": "أ"},
                                        {"answer": "ب"},
                                        {"answer": "ج"}
                                    ]}
                                ]
                            }
                        }
                    ]
                }
            ]
        })
    }

    #[test]
    fn test_single_question_produces_exact_fragment() {
        let document = json!({
            "mainCategories": [{
                "arabicName": "الفقه",
                "topics": [{
                    "name": "t1",
                    "levelsData": {
                        "level2": [{
                            "q": "Q1",
                            "answers": [
                                {"answer": "A", "t": 1},
                                {"answer": "B"},
                                {"answer": "C"}
                            ]
                        }]
                    }
                }]
            }]
        });

        let sql = convert_quiz_json(&document.to_string());
        assert_eq!(
            sql,
            "INSERT INTO questions (category_id, question_text, question_text_ar, \
             option_a, option_a_ar, option_b, option_b_ar, option_c, option_c_ar, \
             option_d, option_d_ar, correct_answer, difficulty) VALUES\n\
             (@fiqh_category_id, '', 'Q1', '', 'A', '', 'B', '', 'C', '', '', 'a', 'medium'),"
        );
    }

    #[test]
    fn test_file_conversion_writes_the_returned_text() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("quiz.json");
        let output = dir.path().join("quiz.sql");
        fs::write(&input, quiz_fixture().to_string()).unwrap();

        let sql = convert_quiz_to_sql(&input, Some(&output));
        let written = fs::read_to_string(&output).unwrap();

        assert_eq!(written, sql);
        assert_eq!(sql.matches("INSERT INTO questions").count(), 4);
    }

    #[test]
    fn test_statements_follow_document_order() {
        let sql = convert_quiz_json(&quiz_fixture().to_string());

        let first = sql.find("سؤال ١").unwrap();
        let second = sql.find("سؤال ٢").unwrap();
        let third = sql.find("سؤال ٣").unwrap();
        let fourth = sql.find("سؤال ٤").unwrap();
        assert!(first < second && second < third && third < fourth);

        // Levels keep insertion order, so easy rows precede the hard one
        let easy = sql.find("'easy'").unwrap();
        let hard = sql.find("'hard'").unwrap();
        assert!(easy < hard);
    }

    #[test]
    fn test_category_placeholders_in_output() {
        let sql = convert_quiz_json(&quiz_fixture().to_string());
        assert!(sql.contains("(@fiqh_category_id,"));
        assert!(sql.contains("(@seerah_category_id,"));
    }

    #[test]
    fn test_nonexistent_input_yields_empty_string() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(convert_quiz_to_sql(&missing, None), "");
    }

    #[test]
    fn test_invalid_json_yields_empty_string() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.json");
        fs::write(&input, "{\"mainCategories\": [").unwrap();
        assert_eq!(convert_quiz_to_sql(&input, None), "");
    }

    #[test]
    fn test_missing_categories_yields_empty_string() {
        let document = json!({"categories": []});
        assert_eq!(convert_quiz_json(&document.to_string()), "");
    }

    #[test]
    fn test_write_failure_keeps_the_in_memory_text() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("quiz.json");
        fs::write(&input, quiz_fixture().to_string()).unwrap();

        // The output path is an existing directory, so the write fails
        let sql = convert_quiz_to_sql(&input, Some(dir.path()));
        assert_eq!(sql.matches("INSERT INTO questions").count(), 4);
    }

    #[test]
    fn test_rejected_questions_are_not_in_the_output() {
        let document = json!({
            "mainCategories": [{
                "arabicName": "الحديث",
                "topics": [{
                    "name": "t1",
                    "levelsData": {
                        "level1": [
                            {"q": "", "answers": [
                                {"answer": "أ"}, {"answer": "ب"}, {"answer": "ج"}
                            ]},
                            {"q": "ناقص", "answers": [{"answer": "أ"}, {"answer": "ب"}]},
                            {"q": "صالح", "answers": [
                                {"answer": "أ"}, {"answer": "ب"}, {"answer": "ج"}
                            ]}
                        ]
                    }
                }]
            }]
        });

        let engine = ConversionEngine::new(ConvertConfig::new().with_quiet(true));
        let source = QuizSource::String(document.to_string());
        let output = engine.convert_source(&source, None).unwrap();

        assert_eq!(output.report.statement_count, 1);
        assert_eq!(output.report.skipped_questions, 2);
        assert!(output.content.contains("'صالح'"));
        assert!(!output.content.contains("ناقص"));
    }

    #[test]
    fn test_unknown_category_without_english_name() {
        let document = json!({
            "mainCategories": [{
                "arabicName": "فئة جديدة",
                "topics": [{
                    "name": "t1",
                    "levelsData": {
                        "level1": [{
                            "q": "Q1",
                            "answers": [{"answer": "A"}, {"answer": "B"}, {"answer": "C"}]
                        }]
                    }
                }]
            }]
        });

        let sql = convert_quiz_json(&document.to_string());
        assert!(sql.contains("(@unknown_category_id,"));
    }

    #[test]
    fn test_unrecognized_level_defaults_to_medium() {
        let document = json!({
            "mainCategories": [{
                "arabicName": "التاريخ",
                "topics": [{
                    "name": "t1",
                    "levelsData": {
                        "bonus": [{
                            "q": "Q1",
                            "answers": [{"answer": "A"}, {"answer": "B"}, {"answer": "C"}]
                        }]
                    }
                }]
            }]
        });

        let sql = convert_quiz_json(&document.to_string());
        assert!(sql.contains("'medium'"));
    }

    #[test]
    fn test_quiet_mode_produces_identical_text() {
        let source = QuizSource::String(quiz_fixture().to_string());

        let loud = ConversionEngine::new(ConvertConfig::new())
            .convert_source(&source, None)
            .unwrap();
        let quiet = ConversionEngine::new(ConvertConfig::new().with_quiet(true))
            .convert_source(&source, None)
            .unwrap();

        assert_eq!(loud.content, quiet.content);
        assert_eq!(loud.report.statement_count, quiet.report.statement_count);
    }
}
