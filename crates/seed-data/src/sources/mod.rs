//! Sources of book records to seed.
//!
//! - [`BookSource::Builtin`] - the literal reference catalog
//! - [`BookSource::File`] - a JSON array of records on disk

use std::path::{Path, PathBuf};

use bookstore::BookRecord;
use thiserror::Error;
use tracing::info;

use crate::catalog;
use crate::config::SeedConfig;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid books file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Books file contains no records")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookSource {
    Builtin,
    File(PathBuf),
}

impl BookSource {
    /// The file named in the config, or the built-in catalog.
    pub fn from_config(config: &SeedConfig) -> Self {
        match &config.books_file {
            Some(path) => Self::File(path.clone()),
            None => Self::Builtin,
        }
    }

    pub fn load(&self) -> Result<Vec<BookRecord>, SourceError> {
        match self {
            Self::Builtin => Ok(catalog::books()),
            Self::File(path) => load_file(path),
        }
    }
}

/// Loads records from a JSON array. Values are taken as written.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<BookRecord>, SourceError> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    let books = load_bytes(&data)?;

    info!("Loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

pub fn load_bytes(data: &[u8]) -> Result<Vec<BookRecord>, SourceError> {
    let books: Vec<BookRecord> = serde_json::from_slice(data)?;
    if books.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(books)
}
