//! Hebrew text normalization for search.

/// Strip vowel points and cantillation marks. Letters, spaces, and
/// Hebrew punctuation (maqaf, paseq, sof pasuq) pass through.
pub fn strip_marks(text: &str) -> String {
    text.chars().filter(|c| !is_hebrew_mark(*c)).collect()
}

/// Combining marks of the Hebrew block: cantillation accents
/// (U+0591–U+05AF) and vowel points, excluding the punctuation code
/// points interleaved with them.
fn is_hebrew_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0591}'..='\u{05BD}'
            | '\u{05BF}'
            | '\u{05C1}'..='\u{05C2}'
            | '\u{05C4}'..='\u{05C5}'
            | '\u{05C7}'
    )
}
