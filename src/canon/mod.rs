//! The fixed book catalog: canonical Hebrew book names with chapter
//! counts, grouped into ordered categories. Read-only for the lifetime
//! of the process.

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BibleBook {
    /// Canonical Hebrew name; also the key verses are stored under.
    pub id: String,
    pub label: String,
    pub chapters: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BibleCategory {
    pub id: String,
    pub label: String,
    pub books: Vec<BibleBook>,
}

fn book(id: &str, chapters: i64) -> BibleBook {
    BibleBook {
        id: id.to_string(),
        label: id.to_string(),
        chapters,
    }
}

fn category(id: &str, label: &str, books: Vec<BibleBook>) -> BibleCategory {
    BibleCategory {
        id: id.to_string(),
        label: label.to_string(),
        books,
    }
}

static CATEGORIES: Lazy<Vec<BibleCategory>> = Lazy::new(|| {
    vec![
        category(
            "torah",
            "תורה",
            vec![
                book("בראשית", 50),
                book("שמות", 40),
                book("ויקרא", 27),
                book("במדבר", 36),
                book("דברים", 34),
            ],
        ),
        category(
            "neviim",
            "נביאים",
            vec![
                book("יהושע", 24),
                book("שופטים", 21),
                book("שמואל א", 31),
                book("שמואל ב", 24),
                book("מלכים א", 22),
                book("מלכים ב", 25),
                book("ישעיהו", 66),
                book("ירמיהו", 52),
                book("יחזקאל", 48),
                book("הושע", 14),
                book("יואל", 4),
                book("עמוס", 9),
                book("עובדיה", 1),
                book("יונה", 4),
                book("מיכה", 7),
                book("נחום", 3),
                book("חבקוק", 3),
                book("צפניה", 3),
                book("חגי", 2),
                book("זכריה", 14),
                book("מלאכי", 3),
            ],
        ),
        category(
            "ketuvim",
            "כתובים",
            vec![
                book("תהילים", 150),
                book("משלי", 31),
                book("איוב", 42),
                book("שיר השירים", 8),
                book("רות", 4),
                book("איכה", 5),
                book("קהלת", 12),
                book("אסתר", 10),
                book("דניאל", 12),
                book("עזרא", 10),
                book("נחמיה", 13),
                book("דברי הימים א", 29),
                book("דברי הימים ב", 36),
            ],
        ),
        category(
            "brit-hadasha",
            "הברית החדשה",
            vec![
                book("מתי", 28),
                book("מרקוס", 16),
                book("לוקס", 24),
                book("יוחנן", 21),
                book("מעשי השליחים", 28),
                book("רומים", 16),
                book("קורינתים א", 16),
                book("קורינתים ב", 13),
                book("גלטים", 6),
                book("אפסים", 6),
                book("פיליפים", 4),
                book("קולוסים", 4),
                book("תסלוניקים א", 5),
                book("תסלוניקים ב", 3),
                book("טימותיוס א", 6),
                book("טימותיוס ב", 4),
                book("טיטוס", 3),
                book("פילימון", 1),
                book("עברים", 13),
                book("יעקב", 5),
                book("פטרוס א", 5),
                book("פטרוס ב", 3),
                book("יוחנן א", 5),
                book("יוחנן ב", 1),
                book("יוחנן ג", 1),
                book("יהודה", 1),
                book("התגלות", 22),
            ],
        ),
    ]
});

/// All book names ordered by descending length (in characters), so a
/// longer name is always tried before a shorter name that prefixes it
/// (e.g. "יוחנן א" before "יוחנן"). Canon order breaks ties.
static BY_LENGTH: Lazy<Vec<&'static BibleBook>> = Lazy::new(|| {
    let mut books: Vec<&'static BibleBook> = CATEGORIES
        .iter()
        .flat_map(|category| category.books.iter())
        .collect();
    books.sort_by(|a, b| b.id.chars().count().cmp(&a.id.chars().count()));
    books
});

/// The ordered category list.
pub fn categories() -> &'static [BibleCategory] {
    CATEGORIES.as_slice()
}

/// Exact-id lookup across all categories.
pub fn find_book(id: &str) -> Option<&'static BibleBook> {
    CATEGORIES
        .iter()
        .flat_map(|category| category.books.iter())
        .find(|b| b.id == id)
}

/// Book names sorted by descending length, for longest-prefix matching.
pub fn sorted_by_length() -> &'static [&'static BibleBook] {
    BY_LENGTH.as_slice()
}

/// The category a book belongs to.
pub fn category_of(book_id: &str) -> Option<&'static BibleCategory> {
    CATEGORIES
        .iter()
        .find(|category| category.books.iter().any(|b| b.id == book_id))
}

/// Total number of books across all categories.
pub fn book_count() -> usize {
    CATEGORIES.iter().map(|category| category.books.len()).sum()
}
