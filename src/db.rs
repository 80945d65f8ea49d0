//! SQLite-backed corpus, reading verses from corpus.db

use crate::cache::BookCache;
use crate::corpus::{verse_at, Chapters, Corpus};
use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Layout expected in corpus.db. Chapter and verse numbers are 1-based.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS verses (
    book TEXT NOT NULL,
    chapter INTEGER NOT NULL,
    verse INTEGER NOT NULL,
    hebrew TEXT NOT NULL,
    english TEXT NOT NULL DEFAULT '',
    PRIMARY KEY (book, chapter, verse)
);
"#;

pub struct SqliteCorpus {
    db_path: PathBuf,
    cache: BookCache,
}

impl SqliteCorpus {
    pub fn open(db_path: impl Into<PathBuf>, cache_capacity: usize) -> Result<Self> {
        let db_path = db_path.into();
        let conn = Self::connect(&db_path)?;
        let has_verses: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'verses'",
            [],
            |row| row.get(0),
        )?;
        if has_verses == 0 {
            anyhow::bail!("No verses table in {:?}", db_path);
        }
        Ok(Self { db_path, cache: BookCache::new(cache_capacity) })
    }

    /// Each call opens its own read-only connection.
    fn connect(db_path: &Path) -> Result<Connection> {
        Connection::open_with_flags(db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("Failed to open corpus.db at {:?}", db_path))
    }

    /// Fill a book's chapters from one text column, `hebrew` or `english`.
    fn load_column(&self, book: &str, column: Column) -> Result<Chapters> {
        let conn = Self::connect(&self.db_path)?;
        let sql = format!(
            "SELECT chapter, verse, {} FROM verses WHERE book = ?1 ORDER BY chapter, verse",
            column.name()
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([book], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?, row.get::<_, String>(2)?))
        })?;

        let mut chapters: Chapters = Vec::new();
        for row in rows {
            let (chapter, verse, text) = row?;
            let (c, v) = match (usize::try_from(chapter), usize::try_from(verse)) {
                (Ok(c), Ok(v)) if c > 0 && v > 0 => (c - 1, v - 1),
                _ => anyhow::bail!(
                    "Invalid reference {} {}:{} in {:?}",
                    book,
                    chapter,
                    verse,
                    self.db_path
                ),
            };
            if chapters.len() <= c {
                chapters.resize_with(c + 1, Vec::new);
            }
            // gaps in verse numbering stay as empty verses so indices line up
            let verses = &mut chapters[c];
            if verses.len() <= v {
                verses.resize(v + 1, String::new());
            }
            verses[v] = text;
        }

        let column = column.name();
        tracing::debug!(book, column, chapters = chapters.len(), "loaded book from corpus.db");
        Ok(chapters)
    }

    fn load(&self, book: &str, column: Column) -> Result<Arc<Chapters>> {
        let key = format!("{}/{}", column.name(), book);
        self.cache
            .get_or_load(&key, || self.load_column(book, column))
            .with_context(|| format!("Failed to load {} {}", column.name(), book))
    }
}

#[derive(Debug, Clone, Copy)]
enum Column {
    Hebrew,
    English,
}

impl Column {
    fn name(self) -> &'static str {
        match self {
            Column::Hebrew => "hebrew",
            Column::English => "english",
        }
    }
}

impl Corpus for SqliteCorpus {
    fn vocalized_text(&self, book: &str) -> Result<Arc<Chapters>> {
        self.load(book, Column::Hebrew)
    }

    fn english_verse(&self, book: &str, chapter: usize, verse: usize) -> Result<String> {
        let text = self.load(book, Column::English)?;
        verse_at(&text, book, chapter, verse).map(str::to_string)
    }
}
