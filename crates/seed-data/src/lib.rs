//! Seeding for the bookstore collection.
//!
//! Loads the reference book catalog (or a JSON file of records) and inserts
//! it into MongoDB in one batch.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let config = SeedConfig::from_env()?;
//! let books = BookSource::from_config(&config).load()?;
//! let report = Seeder::new(MongoConnector, config).run(&books).await?;
//! println!("inserted {}", report.inserted);
//! ```

pub mod catalog;
pub mod config;
pub mod db;
pub mod sources;

pub use bookstore::BookRecord;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::catalog::{CATALOG_SIZE, books};
    pub use crate::config::{ConfigError, SeedConfig};
    pub use crate::db::{Connection, Connector, MongoConnector, SeedError, SeedReport, Seeder};
    pub use crate::sources::{BookSource, SourceError};
    pub use crate::BookRecord;
}
