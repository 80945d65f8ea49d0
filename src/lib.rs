//! Tanakh Search - vowel and trope tolerant search over the Hebrew Bible
//!
//! Backend library providing query compilation, corpus scanning and match highlighting.

pub mod books;
pub mod query;
pub mod scanner;
pub mod highlight;
pub mod search;
pub mod cache;
pub mod corpus;
pub mod db;
pub mod error;
pub mod config;
pub mod server;

pub use error::SearchError;
pub use books::{ALL_BOOKS, permalink, title};
pub use query::compile_query;
pub use scanner::{MatchSpan, SearchHit};
pub use highlight::Highlighter;
pub use search::{DisplayResult, SearchResults, Searcher};
pub use corpus::{Chapters, Corpus, InMemoryCorpus, JsonCorpus};
pub use db::SqliteCorpus;
pub use cache::BookCache;
pub use config::{Backend, ServerConfig};
