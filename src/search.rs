//! Search entry point: compile, scan, highlight and assemble display results

use crate::books::{self, permalink, title};
use crate::corpus::{verse_at, Corpus};
use crate::error::SearchError;
use crate::highlight::Highlighter;
use crate::query::compile_query;
use crate::scanner::{scan_corpus, SearchHit};
use serde::Serialize;
use std::sync::Arc;

/// One matched verse, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayResult {
    pub id: usize,
    pub title: String,
    pub hebrew_markup: String,
    pub english_text: String,
    pub permalink: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub total_hits: usize,
    pub results: Vec<DisplayResult>,
    pub elapsed_ms: u64,
}

/// Both renderings of a single verse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerseText {
    pub title: String,
    pub hebrew: String,
    pub english: String,
    pub permalink: String,
}

pub struct Searcher {
    corpus: Arc<dyn Corpus>,
    highlighter: Highlighter,
}

impl Searcher {
    pub fn new(corpus: Arc<dyn Corpus>) -> Self {
        Self { corpus, highlighter: Highlighter::default() }
    }

    pub fn with_highlighter(mut self, highlighter: Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Every matching verse in canonical book, chapter, verse order.
    ///
    /// An invalid pattern fails before the corpus is touched. An empty query is
    /// not rejected here and matches every verse.
    pub fn search(&self, query: &str) -> Result<Vec<DisplayResult>, SearchError> {
        let matcher = compile_query(query)?;
        let hits = scan_corpus(&*self.corpus, &matcher)?;
        hits.iter()
            .enumerate()
            .map(|(id, hit)| self.display_result(id, hit))
            .collect()
    }

    /// [`Searcher::search`] wrapped with timing, as served over HTTP.
    pub fn search_timed(&self, query: &str) -> Result<SearchResults, SearchError> {
        let start = std::time::Instant::now();
        let results = self.search(query)?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        tracing::info!(query, hits = results.len(), elapsed_ms, "search complete");
        Ok(SearchResults {
            query: query.to_string(),
            total_hits: results.len(),
            results,
            elapsed_ms,
        })
    }

    fn display_result(&self, id: usize, hit: &SearchHit) -> Result<DisplayResult, SearchError> {
        let vocalized = self
            .corpus
            .vocalized_verse(&hit.book, hit.chapter, hit.verse)
            .map_err(SearchError::corpus)?;
        let english = self
            .corpus
            .english_verse(&hit.book, hit.chapter, hit.verse)
            .map_err(SearchError::corpus)?;

        Ok(DisplayResult {
            id,
            title: title(&hit.book, hit.chapter, hit.verse),
            hebrew_markup: self.highlighter.render(&vocalized, &hit.spans),
            english_text: english,
            permalink: permalink(&hit.book, hit.chapter, hit.verse),
        })
    }

    /// Look up a single verse by 1-based reference.
    pub fn verse(
        &self,
        book: &str,
        chapter: usize,
        verse: usize,
    ) -> Result<VerseText, SearchError> {
        if !books::is_canonical(book) {
            return Err(SearchError::NotFound(format!("Unknown book: {}", book)));
        }

        let text = self.corpus.vocalized_text(book).map_err(SearchError::corpus)?;
        let hebrew = verse_at(&text, book, chapter, verse)
            .map_err(|e| SearchError::NotFound(e.to_string()))?
            .to_string();
        let english = self
            .corpus
            .english_verse(book, chapter, verse)
            .map_err(SearchError::corpus)?;

        Ok(VerseText {
            title: title(book, chapter, verse),
            hebrew,
            english,
            permalink: permalink(book, chapter, verse),
        })
    }
}
