use crate::db::{models::*, DbPool};
use crate::error::Result;
use crate::search::normalize;

/// Insert a verse during corpus provisioning. The normalized text is
/// derived here so the stored form always matches what the index and
/// the query path produce.
pub async fn insert_verse(pool: &DbPool, new_verse: &NewVerse) -> Result<Verse> {
    let normalized = normalize::strip_marks(&new_verse.text);

    let verse = sqlx::query_as::<_, Verse>(
        r#"
        INSERT INTO verses (book, chapter, verse, text, normalized_text)
        VALUES (?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&new_verse.book)
    .bind(new_verse.chapter)
    .bind(new_verse.verse)
    .bind(&new_verse.text)
    .bind(&normalized)
    .fetch_one(pool)
    .await?;

    Ok(verse)
}

/// Get a single verse by location. Missing data is `None`, not an error.
pub async fn get_verse(
    pool: &DbPool,
    book: &str,
    chapter: i64,
    verse: i64,
) -> Result<Option<Verse>> {
    let verse = sqlx::query_as::<_, Verse>(
        "SELECT * FROM verses WHERE book = ? AND chapter = ? AND verse = ?",
    )
    .bind(book)
    .bind(chapter)
    .bind(verse)
    .fetch_optional(pool)
    .await?;

    Ok(verse)
}

/// Get a verse by its corpus-wide id
pub async fn get_verse_by_id(pool: &DbPool, id: i64) -> Result<Option<Verse>> {
    let verse = sqlx::query_as::<_, Verse>("SELECT * FROM verses WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(verse)
}

/// Inclusive verse range within one chapter, ascending by verse number
pub async fn get_verse_range(
    pool: &DbPool,
    book: &str,
    chapter: i64,
    start: i64,
    end: i64,
) -> Result<Vec<Verse>> {
    let verses = sqlx::query_as::<_, Verse>(
        r#"
        SELECT * FROM verses
        WHERE book = ? AND chapter = ? AND verse BETWEEN ? AND ?
        ORDER BY verse ASC
        "#,
    )
    .bind(book)
    .bind(chapter)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(verses)
}

/// Highest chapter number present for a book, `None` for an unknown book
pub async fn max_chapter(pool: &DbPool, book: &str) -> Result<Option<i64>> {
    let max: Option<i64> = sqlx::query_scalar("SELECT MAX(chapter) FROM verses WHERE book = ?")
        .bind(book)
        .fetch_one(pool)
        .await?;

    Ok(max)
}

/// All verses ordered by id, for index builds
pub async fn all_verses(pool: &DbPool) -> Result<Vec<Verse>> {
    let verses = sqlx::query_as::<_, Verse>("SELECT * FROM verses ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(verses)
}

/// Count all verses
pub async fn count_verses(pool: &DbPool) -> Result<i64> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM verses")
        .fetch_one(pool)
        .await?;
    Ok(count.0)
}
