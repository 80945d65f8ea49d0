//! Server configuration from command-line flags and environment

use crate::cache::DEFAULT_CACHE_CAPACITY;
use crate::corpus::{Corpus, JsonCorpus};
use crate::db::SqliteCorpus;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// hebrew/<Book>.json and english/<Book>.json under the data directory
    Json,
    /// corpus.db under the data directory
    Sqlite,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "tanakh-search",
    version,
    about = "Vowel- and trope-tolerant Hebrew Bible search server"
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "TANAKH_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Directory holding the corpus
    #[arg(long, env = "TANAKH_DATA_DIR", default_value = "/opt/tanakh/data")]
    pub data_dir: PathBuf,

    #[arg(long, env = "TANAKH_BACKEND", value_enum, default_value_t = Backend::Json)]
    pub backend: Backend,

    /// Number of book texts kept in memory
    #[arg(long, env = "TANAKH_CACHE_CAPACITY", default_value_t = DEFAULT_CACHE_CAPACITY)]
    pub cache_capacity: usize,
}

impl ServerConfig {
    pub fn open_corpus(&self) -> Result<Arc<dyn Corpus>> {
        tracing::info!(backend = ?self.backend, data_dir = ?self.data_dir, "opening corpus");
        match self.backend {
            Backend::Json => Ok(Arc::new(JsonCorpus::open(&self.data_dir, self.cache_capacity)?)),
            Backend::Sqlite => Ok(Arc::new(SqliteCorpus::open(
                self.data_dir.join("corpus.db"),
                self.cache_capacity,
            )?)),
        }
    }
}
