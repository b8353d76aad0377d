//! Unified search: navigation hits from reference parsing merged with
//! full-text hits from the verse index.

use crate::canon::BibleBook;
use crate::config::SearchConfig;
use crate::db::{self, models::Verse, DbPool};
use crate::gematria;
use crate::lookup;
use crate::reference::{self, ParsedLocation, Reference};
use crate::search::index::TextIndex;
use crate::search::normalize;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Id carried by navigation results that do not address a concrete
/// corpus row. Real verse ids are positive, so the two never collide.
pub const NAV_SENTINEL_ID: i64 = -1;

/// Detail markers for navigational results.
pub const OPEN_BOOK_DETAIL: &str = "פתיחת ספר";
pub const OPEN_CHAPTER_DETAIL: &str = "פתיחת פרק";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Book,
    Verse,
}

/// What a result points at, discriminated by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    Book {
        book: String,
    },
    Chapter {
        book: String,
        chapter: i64,
    },
    Verses {
        book: String,
        chapter: i64,
        verse_start: i64,
        verse_end: Option<i64>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub kind: ResultKind,
    pub id: i64,
    pub label: String,
    pub detail: String,
    pub target: Target,
}

/// The engine owns no shared mutable state; every call to
/// [`SearchEngine::search`] builds its own result list, so overlapping
/// calls are independent. The store handle and index are injected by
/// the host, which owns their lifecycle.
pub struct SearchEngine {
    pool: DbPool,
    index: Arc<dyn TextIndex>,
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(pool: DbPool, index: Arc<dyn TextIndex>, config: SearchConfig) -> Self {
        SearchEngine {
            pool,
            index,
            config,
        }
    }

    /// Run one query: navigation results first, then deduplicated text
    /// results in index order. Never errors; a failing pass is logged
    /// and contributes no results, and queries shorter than the
    /// configured minimum yield an empty list without touching the
    /// index.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let clean = normalize::strip_marks(query);
        let clean = clean.trim();

        if clean.chars().count() < self.config.min_query_len {
            return Vec::new();
        }

        debug!("Searching for '{}'", clean);

        let mut results = self.navigation_pass(clean).await;

        // Real verse ids already shown by the navigation pass; the text
        // pass must not repeat them.
        let seen: HashSet<i64> = results
            .iter()
            .map(|result| result.id)
            .filter(|id| *id > 0)
            .collect();

        for result in self.text_pass(clean).await {
            if seen.contains(&result.id) {
                continue;
            }
            results.push(result);
        }

        results
    }

    async fn navigation_pass(&self, clean: &str) -> Vec<SearchResult> {
        let Some(parsed) = reference::parse(clean) else {
            return Vec::new();
        };

        match parsed {
            Reference::Book { book } => vec![SearchResult {
                kind: ResultKind::Verse,
                id: NAV_SENTINEL_ID,
                label: book.label.clone(),
                detail: OPEN_BOOK_DETAIL.to_string(),
                target: Target::Book {
                    book: book.id.clone(),
                },
            }],
            Reference::Chapter { book, chapter } => vec![SearchResult {
                kind: ResultKind::Verse,
                id: NAV_SENTINEL_ID,
                label: format!("{} {}", book.label, gematria::to_numeral(chapter)),
                detail: OPEN_CHAPTER_DETAIL.to_string(),
                target: Target::Chapter {
                    book: book.id.clone(),
                    chapter,
                },
            }],
            Reference::Verses {
                book,
                chapter,
                verse_start,
                verse_end,
            } => {
                // Only the lead verse decides whether the reference
                // resolves; ranges display its text.
                let lead = ParsedLocation {
                    book,
                    chapter,
                    verse_start,
                    verse_end: None,
                };
                match lookup::lookup(&self.pool, &lead).await {
                    Ok(verses) => match verses.into_iter().next() {
                        Some(verse) => vec![SearchResult {
                            kind: ResultKind::Verse,
                            id: verse.id,
                            label: range_label(book, chapter, verse_start, verse_end),
                            detail: verse.text,
                            target: Target::Verses {
                                book: book.id.clone(),
                                chapter,
                                verse_start,
                                verse_end,
                            },
                        }],
                        None => Vec::new(),
                    },
                    Err(e) => {
                        warn!("Navigation verse lookup failed: {}", e);
                        Vec::new()
                    }
                }
            }
        }
    }

    async fn text_pass(&self, clean: &str) -> Vec<SearchResult> {
        if !self.index.ready() {
            debug!("Text index not ready, skipping text pass");
            return Vec::new();
        }

        let ids = match self.index.search_ids(clean, self.config.max_results) {
            Ok(ids) => ids,
            Err(e) => {
                warn!("Text index query failed: {}", e);
                return Vec::new();
            }
        };

        let mut results = Vec::with_capacity(ids.len());
        for id in ids {
            match db::verses::get_verse_by_id(&self.pool, id).await {
                Ok(Some(verse)) => results.push(verse_result(&verse)),
                Ok(None) => debug!("Indexed verse {} missing from store", id),
                Err(e) => warn!("Verse fetch failed for id {}: {}", id, e),
            }
        }

        results
    }
}

fn range_label(book: &BibleBook, chapter: i64, verse_start: i64, verse_end: Option<i64>) -> String {
    let mut label = format!(
        "{} {}:{}",
        book.label,
        gematria::to_numeral(chapter),
        gematria::to_numeral(verse_start)
    );
    if let Some(end) = verse_end {
        label.push('-');
        label.push_str(&gematria::to_numeral(end));
    }
    label
}

fn verse_result(verse: &Verse) -> SearchResult {
    SearchResult {
        kind: ResultKind::Verse,
        id: verse.id,
        label: format!(
            "{} {}:{}",
            verse.book,
            gematria::to_numeral(verse.chapter),
            gematria::to_numeral(verse.verse)
        ),
        detail: verse.text.clone(),
        target: Target::Verses {
            book: verse.book.clone(),
            chapter: verse.chapter,
            verse_start: verse.verse,
            verse_end: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon;

    #[test]
    fn test_range_label() {
        let book = canon::find_book("יונה").unwrap();
        assert_eq!(range_label(book, 1, 1, None), "יונה א:א");
        assert_eq!(range_label(book, 1, 1, Some(3)), "יונה א:א-ג");
        assert_eq!(range_label(book, 3, 16, Some(18)), "יונה ג:טז-יח");
    }

    #[test]
    fn test_verse_result_shape() {
        let verse = Verse {
            id: 7,
            book: "תהילים".to_string(),
            chapter: 119,
            verse: 105,
            text: "נר לרגלי דברך".to_string(),
            normalized_text: "נר לרגלי דברך".to_string(),
        };

        let result = verse_result(&verse);
        assert_eq!(result.kind, ResultKind::Verse);
        assert_eq!(result.id, 7);
        assert_eq!(result.label, "תהילים קיט:קה");
        assert_eq!(result.detail, "נר לרגלי דברך");
    }
}
