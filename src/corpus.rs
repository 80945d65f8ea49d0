//! Corpus access: per-book chapters of vocalized verses plus English lookups
//!
//! Storage is 0-based; the verse lookups take 1-based chapter and verse numbers,
//! the way references are shown to users.

use crate::cache::BookCache;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// Chapters of a book, each an ordered list of verse strings.
pub type Chapters = Vec<Vec<String>>;

pub trait Corpus: Send + Sync {
    /// All vocalized chapters of `book`.
    fn vocalized_text(&self, book: &str) -> Result<Arc<Chapters>>;

    /// Full vocalized verse, used for highlighting.
    fn vocalized_verse(&self, book: &str, chapter: usize, verse: usize) -> Result<String> {
        let text = self.vocalized_text(book)?;
        verse_at(&text, book, chapter, verse).map(str::to_string)
    }

    /// Display-only English translation of a verse.
    fn english_verse(&self, book: &str, chapter: usize, verse: usize) -> Result<String>;
}

/// 1-based verse lookup into 0-based storage.
pub fn verse_at<'a>(
    chapters: &'a Chapters,
    book: &str,
    chapter: usize,
    verse: usize,
) -> Result<&'a str> {
    chapter
        .checked_sub(1)
        .and_then(|c| chapters.get(c))
        .and_then(|verses| verses.get(verse.checked_sub(1)?))
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} {}:{} is not in the corpus", book, chapter, verse))
}

// === In-memory corpus ===

#[derive(Default)]
pub struct InMemoryCorpus {
    hebrew: HashMap<String, Arc<Chapters>>,
    english: HashMap<String, Arc<Chapters>>,
}

impl InMemoryCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, book: &str, chapters: Chapters) -> &mut Self {
        self.hebrew.insert(book.to_string(), Arc::new(chapters));
        self
    }

    pub fn add_translation(&mut self, book: &str, chapters: Chapters) -> &mut Self {
        self.english.insert(book.to_string(), Arc::new(chapters));
        self
    }
}

impl Corpus for InMemoryCorpus {
    fn vocalized_text(&self, book: &str) -> Result<Arc<Chapters>> {
        self.hebrew
            .get(book)
            .cloned()
            .ok_or_else(|| anyhow!("Book not loaded: {}", book))
    }

    fn english_verse(&self, book: &str, chapter: usize, verse: usize) -> Result<String> {
        let text = self
            .english
            .get(book)
            .ok_or_else(|| anyhow!("No translation loaded for {}", book))?;
        verse_at(text, book, chapter, verse).map(str::to_string)
    }
}

// === JSON directory corpus ===

/// A book file is either a Sefaria-style export object or a bare chapter array.
#[derive(Deserialize)]
#[serde(untagged)]
enum BookFile {
    Export { text: Chapters },
    Bare(Chapters),
}

impl BookFile {
    fn into_chapters(self) -> Chapters {
        match self {
            BookFile::Export { text } => text,
            BookFile::Bare(text) => text,
        }
    }
}

/// Reads `<root>/hebrew/<Book>.json` and `<root>/english/<Book>.json`.
pub struct JsonCorpus {
    root: PathBuf,
    cache: BookCache,
}

impl JsonCorpus {
    pub fn open(root: impl Into<PathBuf>, cache_capacity: usize) -> Result<Self> {
        let root = root.into();
        let hebrew_dir = root.join("hebrew");
        if !hebrew_dir.is_dir() {
            anyhow::bail!("Hebrew text directory not found at {:?}", hebrew_dir);
        }
        Ok(Self { root, cache: BookCache::new(cache_capacity) })
    }

    fn load(&self, language: &str, book: &str) -> Result<Arc<Chapters>> {
        let key = format!("{}/{}", language, book);
        self.cache.get_or_load(&key, || {
            let path = self.root.join(language).join(format!("{}.json", book));
            tracing::debug!(?path, "loading book text");
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            let file: BookFile = serde_json::from_str(&raw)
                .with_context(|| format!("Failed to parse {:?}", path))?;
            Ok(file.into_chapters())
        })
    }
}

impl Corpus for JsonCorpus {
    fn vocalized_text(&self, book: &str) -> Result<Arc<Chapters>> {
        self.load("hebrew", book)
    }

    fn english_verse(&self, book: &str, chapter: usize, verse: usize) -> Result<String> {
        let text = self.load("english", book)?;
        verse_at(&text, book, chapter, verse).map(str::to_string)
    }
}
