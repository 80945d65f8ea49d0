//! Error types for Tanakh Search

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search pattern: {0}")]
    InvalidQuery(String),

    #[error("Corpus unavailable: {0}")]
    CorpusUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<regex::Error> for SearchError {
    fn from(err: regex::Error) -> Self {
        SearchError::InvalidQuery(err.to_string())
    }
}

impl SearchError {
    /// Wrap a corpus provider failure, keeping the whole context chain.
    pub fn corpus(err: anyhow::Error) -> Self {
        SearchError::CorpusUnavailable(format!("{:#}", err))
    }
}

impl serde::Serialize for SearchError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
