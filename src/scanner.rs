//! Corpus scanning: run a compiled matcher over every verse of every book

use crate::books::ALL_BOOKS;
use crate::corpus::Corpus;
use crate::error::SearchError;
use regex::Regex;
use serde::Serialize;

/// Byte range of one match inside a vocalized verse, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A verse with at least one match. Chapter and verse are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub book: String,
    pub chapter: usize,
    pub verse: usize,
    pub spans: Vec<MatchSpan>,
}

/// Leftmost-first, non-overlapping matches, each search resuming where the last ended.
pub fn matching_spans(verse: &str, matcher: &Regex) -> Vec<MatchSpan> {
    matcher
        .find_iter(verse)
        .map(|m| MatchSpan::new(m.start(), m.end()))
        .collect()
}

/// Scan one book. Internal chapter/verse indices are 0-based; hits carry them 1-based.
pub fn scan_book<C: Corpus + ?Sized>(
    corpus: &C,
    book: &str,
    matcher: &Regex,
) -> Result<Vec<SearchHit>, SearchError> {
    let text = corpus.vocalized_text(book).map_err(SearchError::corpus)?;

    let mut hits = Vec::new();
    for (c, chapter) in text.iter().enumerate() {
        for (v, verse) in chapter.iter().enumerate() {
            let spans = matching_spans(verse, matcher);
            if !spans.is_empty() {
                hits.push(SearchHit {
                    book: book.to_string(),
                    chapter: c + 1,
                    verse: v + 1,
                    spans,
                });
            }
        }
    }

    tracing::debug!(book, chapters = text.len(), hits = hits.len(), "scanned book");
    Ok(hits)
}

/// Scan every book in canonical order.
pub fn scan_corpus<C: Corpus + ?Sized>(
    corpus: &C,
    matcher: &Regex,
) -> Result<Vec<SearchHit>, SearchError> {
    let mut hits = Vec::new();
    for book in ALL_BOOKS {
        hits.extend(scan_book(corpus, book, matcher)?);
    }
    Ok(hits)
}
