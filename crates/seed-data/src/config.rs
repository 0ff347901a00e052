//! Configuration for seeding runs.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "plp_bookstore";
pub const DEFAULT_COLLECTION: &str = "books";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const URI_VAR: &str = "MONGODB_URI";
pub const DATABASE_VAR: &str = "BOOKSTORE_DB";
pub const COLLECTION_VAR: &str = "BOOKSTORE_COLLECTION";
pub const TIMEOUT_VAR: &str = "MONGODB_TIMEOUT_SECS";
pub const BOOKS_FILE_VAR: &str = "BOOKS_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("MONGODB_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
}

/// Where to connect and what to seed.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// MongoDB connection string.
    pub uri: String,

    /// Target database name.
    pub database: String,

    /// Target collection name.
    pub collection: String,

    /// Connect and server-selection timeout.
    pub timeout: Duration,

    /// JSON file replacing the built-in catalog, if set.
    pub books_file: Option<PathBuf>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            timeout: DEFAULT_TIMEOUT,
            books_file: None,
        }
    }
}

impl SeedConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, falling back to defaults for
    /// unset or empty variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let timeout = match var(TIMEOUT_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => defaults.timeout,
        };

        Ok(Self {
            uri: var(URI_VAR).unwrap_or(defaults.uri),
            database: var(DATABASE_VAR).unwrap_or(defaults.database),
            collection: var(COLLECTION_VAR).unwrap_or(defaults.collection),
            timeout,
            books_file: var(BOOKS_FILE_VAR).map(PathBuf::from),
        })
    }

    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    /// `database.collection`, as used in log lines.
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }

    /// The connection string with any password replaced by `****`.
    pub fn redacted_uri(&self) -> String {
        let Some((scheme, rest)) = self.uri.split_once("://") else {
            return self.uri.clone();
        };
        let authority_end = rest.find('/').unwrap_or(rest.len());
        let Some(at) = rest[..authority_end].rfind('@') else {
            return self.uri.clone();
        };

        let userinfo = &rest[..at];
        let user = match userinfo.split_once(':') {
            Some((user, _)) => format!("{user}:****"),
            None => userinfo.to_string(),
        };

        format!("{scheme}://{user}{}", &rest[at..])
    }
}
