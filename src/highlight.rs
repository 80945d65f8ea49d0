//! Match highlighting: widen raw match offsets to whole words and mark them up
//!
//! Word boundaries are plain spaces only. Maqaf and sof pasuq are not treated
//! as boundaries, so a match next to either can take in the neighbouring word.

use crate::scanner::MatchSpan;

pub const MATCH_OPEN: &str = "<b class=\"search-match\">";
pub const MATCH_CLOSE: &str = "</b>";

/// Outcome of rendering one span.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    /// Output so far, and the verse offset up to which text has been emitted.
    Continue { out: String, cursor: usize },
    /// The span reached the last word; the verse is fully rendered.
    Done(String),
}

#[derive(Debug, Clone)]
pub struct Highlighter {
    open: String,
    close: String,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(MATCH_OPEN, MATCH_CLOSE)
    }
}

/// Nearest space strictly before `span.start` and nearest space at or after `span.end`.
pub fn word_bounds(verse: &str, span: MatchSpan) -> (Option<usize>, Option<usize>) {
    let before = verse[..span.start].rfind(' ');
    let after = verse[span.end..].find(' ').map(|i| span.end + i);
    (before, after)
}

impl Highlighter {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self { open: open.into(), close: close.into() }
    }

    fn wrap(&self, out: &mut String, text: &str) {
        out.push_str(&self.open);
        out.push_str(text);
        out.push_str(&self.close);
    }

    /// Render a single span onto `out`, which holds `verse[..cursor]` already.
    pub fn step(&self, verse: &str, mut out: String, cursor: usize, span: MatchSpan) -> Step {
        let (before, after) = word_bounds(verse, span);
        let word_start = before.map_or(0, |space| space + 1);
        let from = word_start.max(cursor);
        let to = after.unwrap_or(verse.len());

        // word already emitted by an earlier span
        if to <= from {
            return Step::Continue { out, cursor };
        }

        match (before, after) {
            (None, Some(space)) if cursor == 0 => {
                self.wrap(&mut out, &verse[..space]);
                out.push(' ');
                Step::Continue { out, cursor: space + 1 }
            }
            (_, None) => {
                out.push_str(&verse[cursor..from]);
                self.wrap(&mut out, &verse[from..]);
                Step::Done(out)
            }
            (_, Some(space)) => {
                out.push_str(&verse[cursor..from]);
                self.wrap(&mut out, &verse[from..space]);
                Step::Continue { out, cursor: space }
            }
        }
    }

    /// Verse text with every matched word wrapped in the highlight marker.
    /// Spans must be increasing and non-overlapping.
    pub fn render(&self, verse: &str, spans: &[MatchSpan]) -> String {
        let marker_len = self.open.len() + self.close.len();
        let mut out = String::with_capacity(verse.len() + spans.len() * marker_len);
        let mut cursor = 0;

        for &span in spans {
            match self.step(verse, out, cursor, span) {
                Step::Continue { out: rendered, cursor: next } => {
                    out = rendered;
                    cursor = next;
                }
                Step::Done(rendered) => return rendered,
            }
        }

        out.push_str(&verse[cursor..]);
        out
    }
}
