//! Free-text scripture reference parsing.
//!
//! Turns input like "בראשית א:א" or "יוחנן ד:א-ג" into a structured
//! location. Book detection is longest-prefix-first over the catalog;
//! once a book name matches, the rest of the input must fit the
//! chapter/verse pattern or the whole parse fails, with no fallback to
//! a shorter book candidate.

use crate::canon::{self, BibleBook};
use crate::gematria;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

/// A parsed reference, discriminated by how much of the location the
/// input supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Reference {
    Book {
        book: &'static BibleBook,
    },
    Chapter {
        book: &'static BibleBook,
        chapter: i64,
    },
    Verses {
        book: &'static BibleBook,
        chapter: i64,
        verse_start: i64,
        verse_end: Option<i64>,
    },
}

/// Flat projection of a [`Reference`]: chapter defaults to 1 for a
/// book-only match, verse_start defaults to 1 when no verse was given.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedLocation {
    pub book: &'static BibleBook,
    pub chapter: i64,
    pub verse_start: i64,
    pub verse_end: Option<i64>,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Reject chapter numbers above the matched book's chapter count.
    /// Off by default: the shipped behavior lets out-of-range chapters
    /// through, where they simply find no verses.
    pub enforce_chapter_bounds: bool,
}

impl Reference {
    pub fn book(&self) -> &'static BibleBook {
        match self {
            Reference::Book { book }
            | Reference::Chapter { book, .. }
            | Reference::Verses { book, .. } => book,
        }
    }

    pub fn location(&self) -> ParsedLocation {
        match *self {
            Reference::Book { book } => ParsedLocation {
                book,
                chapter: 1,
                verse_start: 1,
                verse_end: None,
            },
            Reference::Chapter { book, chapter } => ParsedLocation {
                book,
                chapter,
                verse_start: 1,
                verse_end: None,
            },
            Reference::Verses {
                book,
                chapter,
                verse_start,
                verse_end,
            } => ParsedLocation {
                book,
                chapter,
                verse_start,
                verse_end,
            },
        }
    }
}

/// Remainder pattern after the book name: a chapter token, optionally
/// (space or colon) a verse token, optionally (space or hyphen) a
/// range-end token. Tokens are Hebrew letters, quote/abbreviation
/// marks, or digits.
static REMAINDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r#"^([א-ת0-9'"׳״]+)"#,
        r#"(?:[\s:]([א-ת0-9'"׳״]+)"#,
        r#"(?:[\s-]([א-ת0-9'"׳״]+))?)?$"#,
    ))
    .expect("remainder pattern is valid")
});

/// Parse free text into a reference, or `None` when no book name
/// prefixes the input or the remainder does not fit the pattern.
pub fn parse(text: &str) -> Option<Reference> {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Option<Reference> {
    let input = text.trim();
    if input.is_empty() {
        return None;
    }

    let book = canon::sorted_by_length()
        .iter()
        .copied()
        .find(|b| input.starts_with(b.id.as_str()))?;

    let remainder = input[book.id.len()..].trim();
    if remainder.is_empty() {
        return Some(Reference::Book { book });
    }

    // First matching book wins outright; a remainder that does not fit
    // the pattern fails the parse instead of retrying a shorter name.
    let caps = REMAINDER.captures(remainder)?;

    let chapter = gematria::from_numeral(&caps[1]);
    if chapter <= 0 {
        return None;
    }
    if options.enforce_chapter_bounds && chapter > book.chapters {
        debug!("Chapter {} out of range for {}", chapter, book.id);
        return None;
    }

    let verse_start = match caps.get(2) {
        Some(token) => {
            let verse = gematria::from_numeral(token.as_str());
            if verse <= 0 {
                return None;
            }
            Some(verse)
        }
        None => None,
    };

    let verse_end = match caps.get(3) {
        Some(token) => {
            let end = gematria::from_numeral(token.as_str());
            match verse_start {
                Some(start) if end >= start => Some(end),
                _ => return None,
            }
        }
        None => None,
    };

    match verse_start {
        None => Some(Reference::Chapter { book, chapter }),
        Some(verse_start) => Some(Reference::Verses {
            book,
            chapter,
            verse_start,
            verse_end,
        }),
    }
}

/// The flat-location form of [`parse`].
pub fn parse_location(text: &str) -> Option<ParsedLocation> {
    parse(text).map(|reference| reference.location())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_book_chapter_verse() {
        let location = parse_location("בראשית א:א").expect("should parse");
        assert_eq!(location.book.id, "בראשית");
        assert_eq!(location.chapter, 1);
        assert_eq!(location.verse_start, 1);
        assert_eq!(location.verse_end, None);
    }

    #[test]
    fn test_parse_space_separator() {
        let location = parse_location("בראשית א א").expect("should parse");
        assert_eq!(location.chapter, 1);
        assert_eq!(location.verse_start, 1);
    }

    #[test]
    fn test_parse_verse_range() {
        let location = parse_location("יונה א:א-ג").expect("should parse");
        assert_eq!(location.book.id, "יונה");
        assert_eq!(location.chapter, 1);
        assert_eq!(location.verse_start, 1);
        assert_eq!(location.verse_end, Some(3));
    }

    #[test]
    fn test_parse_book_only() {
        let reference = parse("בראשית").expect("should parse");
        assert!(matches!(reference, Reference::Book { .. }));

        let location = reference.location();
        assert_eq!(location.chapter, 1);
        assert_eq!(location.verse_start, 1);
    }

    #[test]
    fn test_parse_chapter_only_defaults_verse() {
        let location = parse_location("תהילים קי\u{05F4}ט").expect("should parse");
        assert_eq!(location.book.id, "תהילים");
        assert_eq!(location.chapter, 119);
        assert_eq!(location.verse_start, 1);
        assert_eq!(location.verse_end, None);
    }

    #[test]
    fn test_parse_rejects_empty_and_unknown() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   "), None);
        assert_eq!(parse("זזזז"), None);
    }

    #[test]
    fn test_longest_name_wins() {
        // "יוחנן א ג" must match the book "יוחנן א" (chapter ג), not
        // the book "יוחנן" (chapter א verse ג).
        let reference = parse("יוחנן א ג").expect("should parse");
        assert_eq!(reference.book().id, "יוחנן א");
        assert!(matches!(reference, Reference::Chapter { chapter: 3, .. }));

        // An exact match on the longer name is a book-only reference.
        let reference = parse("יוחנן ג").expect("should parse");
        assert_eq!(reference.book().id, "יוחנן ג");
        assert!(matches!(reference, Reference::Book { .. }));
    }

    #[test]
    fn test_no_fallback_after_longest_match() {
        // The longest prefix "יוחנן ג" consumes the book tokens and
        // leaves ":טז", which does not fit the pattern. The shorter
        // candidate "יוחנן" is never retried.
        assert_eq!(parse("יוחנן ג:טז"), None);
    }

    #[test]
    fn test_rejects_zero_chapter_and_inverted_range() {
        assert_eq!(parse("בראשית ''"), None);
        assert_eq!(parse("בראשית ב:ה-ג"), None);
    }

    #[test]
    fn test_numeric_passthrough_tokens() {
        let location = parse_location("בראשית 1:2").expect("should parse");
        assert_eq!(location.chapter, 1);
        assert_eq!(location.verse_start, 2);
    }

    #[test]
    fn test_chapter_bounds_option() {
        let options = ParseOptions {
            enforce_chapter_bounds: true,
        };

        // ס is 60; בראשית has 50 chapters.
        assert_eq!(parse_with("בראשית ס", &options), None);

        let lenient = parse("בראשית ס").expect("should parse without bounds");
        assert!(matches!(lenient, Reference::Chapter { chapter: 60, .. }));
    }
}
