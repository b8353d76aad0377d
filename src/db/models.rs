use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One verse of the corpus. `normalized_text` is the diacritic-stripped
/// form the full-text index matches against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Verse {
    pub id: i64,
    pub book: String,
    pub chapter: i64,
    pub verse: i64,
    pub text: String,
    pub normalized_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVerse {
    pub book: String,
    pub chapter: i64,
    pub verse: i64,
    pub text: String,
}
