use mikra::canon;
use mikra::reference::{self, Reference};

#[test]
fn test_find_book_by_id() {
    let shemot = canon::find_book("שמות").expect("שמות should be in the catalog");
    assert_eq!(shemot.chapters, 40);

    assert!(canon::find_book("לא קיים").is_none());
}

#[test]
fn test_parse_full_reference() {
    let location = reference::parse_location("בראשית א:א").expect("Failed to parse reference");

    assert_eq!(location.book.id, "בראשית");
    assert_eq!(location.chapter, 1);
    assert_eq!(location.verse_start, 1);
    assert_eq!(location.verse_end, None);
}

#[test]
fn test_parse_chapter_reference_with_gershayim() {
    let location =
        reference::parse_location("תהילים קי\u{05F4}ט").expect("Failed to parse reference");

    assert_eq!(location.book.id, "תהילים");
    assert_eq!(location.chapter, 119);
    assert_eq!(location.verse_start, 1);
    assert_eq!(location.verse_end, None);
}

#[test]
fn test_parse_rejects_unmatchable_input() {
    assert!(reference::parse_location("").is_none());
    assert!(reference::parse_location("זזזז").is_none());
}

#[test]
fn test_longest_book_name_wins() {
    // Both "יוחנן" and "יוחנן א" are in the catalog; the longer name
    // must be matched first.
    let reference = reference::parse("יוחנן א ב").expect("Failed to parse reference");
    assert_eq!(reference.book().id, "יוחנן א");
    assert!(matches!(reference, Reference::Chapter { chapter: 2, .. }));
}

#[test]
fn test_no_retry_with_shorter_book_name() {
    // "יוחנן ג" wins the prefix match, the leftover ":טז" fits no
    // pattern, and the parse fails without falling back to "יוחנן".
    assert!(reference::parse("יוחנן ג:טז").is_none());
}

#[test]
fn test_parse_range_reference() {
    let location = reference::parse_location("יונה א:א-ג").expect("Failed to parse reference");

    assert_eq!(location.book.id, "יונה");
    assert_eq!(location.chapter, 1);
    assert_eq!(location.verse_start, 1);
    assert_eq!(location.verse_end, Some(3));
}
