//! Database seeding.

use async_trait::async_trait;
use bookstore::BookRecord;
use thiserror::Error;
use tracing::{error, info};

use crate::config::SeedConfig;
use crate::sources::{BookSource, SourceError};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Connection error: {0}")]
    Connection(String),
    #[error("Insert error: {0}")]
    Insert(String),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Opens connections to the target database.
#[async_trait]
pub trait Connector: Send + Sync {
    type Connection: Connection;

    /// Connects and verifies the endpoint is reachable. Fails with
    /// [`SeedError::Connection`]; callers do not retry.
    async fn connect(&self, config: &SeedConfig) -> Result<Self::Connection, SeedError>;
}

/// An open connection bound to the target collection.
#[async_trait]
pub trait Connection: Send + Sync + Sized {
    /// Sends every record in one batch and returns the inserted count the
    /// server reports. Fails with [`SeedError::Insert`].
    async fn insert_many(&self, books: &[BookRecord]) -> Result<u64, SeedError>;

    /// Releases the connection.
    async fn close(self);
}

/// Outcome of a successful seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub inserted: u64,
    pub attempted: usize,
    pub database: String,
    pub collection: String,
}

impl SeedReport {
    /// True when the server accepted every record sent.
    pub fn is_complete(&self) -> bool {
        self.inserted == self.attempted as u64
    }
}

/// Inserts a batch of books into the configured collection.
pub struct Seeder<C> {
    connector: C,
    config: SeedConfig,
}

impl<C: Connector> Seeder<C> {
    pub fn new(connector: C, config: SeedConfig) -> Self {
        Self { connector, config }
    }

    /// Loads the books from `source`, then seeds them with [`Seeder::run`].
    ///
    /// A source that fails to load fails with [`SeedError::Source`] before
    /// any connection is opened.
    pub async fn run_source(&self, source: &BookSource) -> Result<SeedReport, SeedError> {
        let books = source.load()?;
        info!("Seeding {} books into {}", books.len(), self.config.namespace());
        self.run(&books).await
    }

    /// Connects, inserts `books` in a single batch, reports the count and
    /// closes the connection.
    ///
    /// The connection is closed whether or not the insert succeeds. A failed
    /// connect attempts no insert. Repeated runs append duplicates.
    pub async fn run(&self, books: &[BookRecord]) -> Result<SeedReport, SeedError> {
        let namespace = self.config.namespace();

        let connection = self.connector.connect(&self.config).await?;
        info!("Connected to MongoDB: {}", self.config.redacted_uri());

        let outcome = connection.insert_many(books).await;
        match &outcome {
            Ok(inserted) => info!("Inserted {inserted} documents into {namespace}"),
            Err(e) => error!("Seeding {namespace} failed: {e}"),
        }

        connection.close().await;
        info!("Connection closed.");

        let inserted = outcome?;
        Ok(SeedReport {
            inserted,
            attempted: books.len(),
            database: self.config.database.clone(),
            collection: self.config.collection.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MemoryState {
        documents: Vec<BookRecord>,
        insert_calls: usize,
        connects: usize,
        closes: usize,
    }

    /// In-memory stand-in for a MongoDB deployment.
    #[derive(Clone, Default)]
    struct MemoryConnector {
        state: Arc<Mutex<MemoryState>>,
        refuse_connect: bool,
        fail_insert: bool,
        accept_limit: Option<usize>,
    }

    struct MemoryConnection {
        state: Arc<Mutex<MemoryState>>,
        fail_insert: bool,
        accept_limit: Option<usize>,
    }

    #[async_trait]
    impl Connector for MemoryConnector {
        type Connection = MemoryConnection;

        async fn connect(&self, _config: &SeedConfig) -> Result<Self::Connection, SeedError> {
            if self.refuse_connect {
                return Err(SeedError::Connection("connection refused".to_string()));
            }
            self.state.lock().unwrap().connects += 1;
            Ok(MemoryConnection {
                state: self.state.clone(),
                fail_insert: self.fail_insert,
                accept_limit: self.accept_limit,
            })
        }
    }

    #[async_trait]
    impl Connection for MemoryConnection {
        async fn insert_many(&self, books: &[BookRecord]) -> Result<u64, SeedError> {
            let mut state = self.state.lock().unwrap();
            state.insert_calls += 1;
            if self.fail_insert {
                return Err(SeedError::Insert("E11000 duplicate key error".to_string()));
            }
            let accepted = self.accept_limit.unwrap_or(books.len()).min(books.len());
            state.documents.extend_from_slice(&books[..accepted]);
            Ok(accepted as u64)
        }

        async fn close(self) {
            self.state.lock().unwrap().closes += 1;
        }
    }

    impl MemoryConnector {
        fn snapshot<T>(&self, f: impl FnOnce(&MemoryState) -> T) -> T {
            f(&self.state.lock().unwrap())
        }
    }

    #[tokio::test]
    async fn test_run_inserts_full_catalog() {
        let connector = MemoryConnector::default();
        let seeder = Seeder::new(connector.clone(), SeedConfig::default());
        let books = catalog::books();

        let report = seeder.run(&books).await.unwrap();

        assert_eq!(report.inserted, 12);
        assert_eq!(report.attempted, 12);
        assert!(report.is_complete());
        assert_eq!(report.database, "plp_bookstore");
        assert_eq!(report.collection, "books");
        connector.snapshot(|s| {
            assert_eq!(s.insert_calls, 1);
            assert_eq!(s.closes, 1);
            assert_eq!(s.documents, books);
        });
    }

    #[tokio::test]
    async fn test_inserted_records_match_source_and_filter_by_author() {
        let connector = MemoryConnector::default();
        let seeder = Seeder::new(connector.clone(), SeedConfig::default());

        seeder.run(&catalog::books()).await.unwrap();

        let by_author = connector.snapshot(|s| {
            s.documents
                .iter()
                .filter(|b| b.author == "D. Woldesenbet")
                .count()
        });
        assert_eq!(by_author, 3);
    }

    #[tokio::test]
    async fn test_second_run_appends_duplicates() {
        let connector = MemoryConnector::default();
        let seeder = Seeder::new(connector.clone(), SeedConfig::default());
        let books = catalog::books();

        seeder.run(&books).await.unwrap();
        seeder.run(&books).await.unwrap();

        connector.snapshot(|s| {
            assert_eq!(s.documents.len(), 2 * catalog::CATALOG_SIZE);
            assert_eq!(s.connects, 2);
            assert_eq!(s.closes, 2);
        });
    }

    #[tokio::test]
    async fn test_run_source_seeds_builtin_catalog() {
        let connector = MemoryConnector::default();
        let seeder = Seeder::new(connector.clone(), SeedConfig::default());

        let report = seeder.run_source(&BookSource::Builtin).await.unwrap();

        assert_eq!(report.inserted, catalog::CATALOG_SIZE as u64);
        connector.snapshot(|s| assert_eq!(s.documents, catalog::books()));
    }

    #[tokio::test]
    async fn test_unreadable_source_never_connects() {
        let connector = MemoryConnector::default();
        let seeder = Seeder::new(connector.clone(), SeedConfig::default());
        let source = BookSource::File("/nonexistent/books.json".into());

        let err = seeder.run_source(&source).await.unwrap_err();

        assert!(matches!(err, SeedError::Source(SourceError::Io(_))));
        connector.snapshot(|s| {
            assert_eq!(s.connects, 0);
            assert_eq!(s.insert_calls, 0);
        });
    }

    #[tokio::test]
    async fn test_connection_failure_skips_insert() {
        let connector = MemoryConnector {
            refuse_connect: true,
            ..MemoryConnector::default()
        };
        let seeder = Seeder::new(connector.clone(), SeedConfig::default());

        let err = seeder.run(&catalog::books()).await.unwrap_err();

        assert!(matches!(err, SeedError::Connection(_)));
        connector.snapshot(|s| {
            assert_eq!(s.insert_calls, 0);
            assert!(s.documents.is_empty());
        });
    }

    #[tokio::test]
    async fn test_insert_failure_still_closes_connection() {
        let connector = MemoryConnector {
            fail_insert: true,
            ..MemoryConnector::default()
        };
        let seeder = Seeder::new(connector.clone(), SeedConfig::default());

        let err = seeder.run(&catalog::books()).await.unwrap_err();

        assert!(matches!(err, SeedError::Insert(ref msg) if msg.contains("E11000")));
        connector.snapshot(|s| {
            assert_eq!(s.insert_calls, 1);
            assert_eq!(s.closes, 1);
        });
    }

    #[tokio::test]
    async fn test_partial_insert_reports_server_count() {
        let connector = MemoryConnector {
            accept_limit: Some(7),
            ..MemoryConnector::default()
        };
        let seeder = Seeder::new(connector.clone(), SeedConfig::default());

        let report = seeder.run(&catalog::books()).await.unwrap();

        assert_eq!(report.inserted, 7);
        assert_eq!(report.attempted, 12);
        assert!(!report.is_complete());
        connector.snapshot(|s| assert_eq!(s.closes, 1));
    }
}
