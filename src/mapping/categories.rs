//! Category label to placeholder-token mapping
//!
//! The generated SQL references categories through symbolic `@name` tokens
//! rather than numeric IDs; the tokens are substituted for real IDs before
//! the SQL is executed.

/// Known category labels and their placeholder tokens
pub const CATEGORY_PLACEHOLDERS: [(&str, &str); 8] = [
    ("التفسير", "@tafseer_category_id"),
    ("العقيدة", "@akida_category_id"),
    ("الحديث", "@hadith_category_id"),
    ("الفقه", "@fiqh_category_id"),
    ("السيرة", "@seerah_category_id"),
    ("التاريخ", "@history_category_id"),
    ("الأخلاق", "@akhlaq_category_id"),
    ("القرآن", "@quran_category_id"),
];

/// Resolve the placeholder token for a category label
///
/// Unknown labels synthesize `@<english_name>_category_id`, falling back to
/// the literal word "unknown" when no English name is available.
pub fn category_placeholder(arabic_name: &str, english_name: Option<&str>) -> String {
    for (label, token) in CATEGORY_PLACEHOLDERS {
        if label == arabic_name {
            return token.to_string();
        }
    }
    format!("@{}_category_id", english_name.unwrap_or("unknown"))
}
