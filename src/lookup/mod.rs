//! Resolving a parsed location to verse text.

use crate::db::{self, models::Verse, DbPool};
use crate::error::Result;
use crate::reference::ParsedLocation;

/// Fetch the verses a location addresses: a single verse, or an
/// inclusive range in ascending verse order. Missing data yields an
/// empty list, not an error.
pub async fn lookup(pool: &DbPool, location: &ParsedLocation) -> Result<Vec<Verse>> {
    match location.verse_end {
        Some(end) => {
            db::verses::get_verse_range(
                pool,
                &location.book.id,
                location.chapter,
                location.verse_start,
                end,
            )
            .await
        }
        None => {
            let verse = db::verses::get_verse(
                pool,
                &location.book.id,
                location.chapter,
                location.verse_start,
            )
            .await?;
            Ok(verse.into_iter().collect())
        }
    }
}

/// Single display string for a verse run: ascending order, one space
/// between verses.
pub fn join_text(verses: &[Verse]) -> String {
    verses
        .iter()
        .map(|verse| verse.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
