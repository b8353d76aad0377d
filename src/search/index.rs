use crate::db::{self, DbPool};
use crate::error::{Error, Result};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::{Field, Schema, FAST, STORED, TEXT};
use tantivy::{doc, Index, IndexReader, IndexWriter, ReloadPolicy, Term};
use tracing::{debug, info};

/// Keyword search over normalized verse text, addressed by verse id.
/// The index internals are opaque to the engine; `ready` gates the text
/// pass while the backing data is still loading.
pub trait TextIndex: Send + Sync {
    fn ready(&self) -> bool;
    fn search_ids(&self, text: &str, limit: usize) -> Result<Vec<i64>>;
}

/// Schema for the verse search index
#[derive(Clone)]
pub struct VerseSchema {
    pub schema: Schema,
    pub id: Field,
    pub text: Field,
}

impl VerseSchema {
    pub fn new() -> Self {
        let mut schema_builder = Schema::builder();

        // Verse ID (stored, not searchable)
        let id = schema_builder.add_i64_field("id", STORED | FAST);

        // Normalized verse text (searchable)
        let text = schema_builder.add_text_field("text", TEXT);

        let schema = schema_builder.build();

        Self { schema, id, text }
    }
}

impl Default for VerseSchema {
    fn default() -> Self {
        Self::new()
    }
}

pub struct VerseIndex {
    index: Index,
    reader: IndexReader,
    schema: VerseSchema,
    ready: AtomicBool,
}

impl VerseIndex {
    /// Create or open the index at a directory path. A fresh index is
    /// not ready until [`VerseIndex::build_from_store`] completes.
    pub fn new(index_path: impl AsRef<Path>) -> Result<Self> {
        let path = index_path.as_ref();
        let schema = VerseSchema::new();

        std::fs::create_dir_all(path)?;

        let index = if path.join("meta.json").exists() {
            Index::open_in_dir(path)
                .map_err(|e| Error::Search(format!("Failed to open index: {e}")))?
        } else {
            Index::create_in_dir(path, schema.schema.clone())
                .map_err(|e| Error::Search(format!("Failed to create index: {e}")))?
        };

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommitWithDelay)
            .try_into()
            .map_err(|e| Error::Search(format!("Failed to create reader: {e}")))?;

        info!("Verse index opened at {:?}", path);

        Ok(Self {
            index,
            reader,
            schema,
            ready: AtomicBool::new(false),
        })
    }

    /// Get index writer
    pub fn writer(&self) -> Result<IndexWriter> {
        self.index
            .writer(50_000_000) // 50MB buffer
            .map_err(|e| Error::Search(format!("Failed to create writer: {e}")))
    }

    /// One-time population from the verse store. Idempotent: each id is
    /// deleted before being re-added. Readiness flips only after a
    /// successful commit; until then every search returns no hits.
    pub async fn build_from_store(&self, pool: &DbPool) -> Result<()> {
        let verses = db::verses::all_verses(pool).await?;

        let mut writer = self.writer()?;
        for verse in &verses {
            writer.delete_term(Term::from_field_i64(self.schema.id, verse.id));
            writer.add_document(doc!(
                self.schema.id => verse.id,
                self.schema.text => verse.normalized_text.clone(),
            ))?;
        }

        writer
            .commit()
            .map_err(|e| Error::Search(format!("Failed to commit: {e}")))?;
        self.reader.reload()?;
        self.ready.store(true, Ordering::Release);

        info!("Verse index built ({} verses)", verses.len());
        Ok(())
    }
}

impl TextIndex for VerseIndex {
    fn ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    fn search_ids(&self, text: &str, limit: usize) -> Result<Vec<i64>> {
        if !self.ready() || limit == 0 {
            return Ok(Vec::new());
        }

        let searcher = self.reader.searcher();

        let query_parser = QueryParser::for_index(&self.index, vec![self.schema.text]);
        let query = query_parser
            .parse_query(text)
            .map_err(|e| Error::Search(format!("Invalid query: {e}")))?;

        let top_docs = searcher
            .search(&*query, &TopDocs::with_limit(limit))
            .map_err(|e| Error::Search(format!("Search failed: {e}")))?;

        debug!("Index query matched {} verses", top_docs.len());

        let ids = top_docs
            .into_iter()
            .filter_map(|(_score, doc_address)| {
                let doc = searcher.doc::<tantivy::TantivyDocument>(doc_address).ok()?;
                match doc.get_first(self.schema.id)? {
                    tantivy::schema::OwnedValue::I64(id) => Some(*id),
                    _ => None,
                }
            })
            .collect();

        Ok(ids)
    }
}
