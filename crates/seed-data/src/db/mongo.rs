//! MongoDB-backed [`Connector`].

use async_trait::async_trait;
use bookstore::{BookRecord, Database};
use mongodb::Client;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use tracing::debug;

use super::seeder::{Connection, Connector, SeedError};
use crate::config::SeedConfig;

const APP_NAME: &str = "bookstore-seed";

/// Connects with the official MongoDB driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

/// A driver client plus the resolved books collection.
pub struct MongoConnection {
    client: Client,
    database: Database,
}

#[async_trait]
impl Connector for MongoConnector {
    type Connection = MongoConnection;

    async fn connect(&self, config: &SeedConfig) -> Result<Self::Connection, SeedError> {
        let client = open_client(config).await.map_err(connection_error)?;

        // The driver connects lazily; ping so an unreachable server or bad
        // credentials fail here rather than on insert.
        client
            .database(&config.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(connection_error)?;
        debug!("Ping to {} succeeded", config.redacted_uri());

        let database = Database::new(&client, &config.database, &config.collection);
        Ok(MongoConnection { client, database })
    }
}

#[async_trait]
impl Connection for MongoConnection {
    async fn insert_many(&self, books: &[BookRecord]) -> Result<u64, SeedError> {
        self.database
            .insert_books(books)
            .await
            .map_err(|e| SeedError::Insert(e.to_string()))
    }

    async fn close(self) {
        let Self { client, database } = self;
        drop(database);
        client.shutdown().await;
    }
}

/// Builds a driver client with the configured timeouts. Does not touch the
/// network beyond SRV/TXT resolution for `mongodb+srv` URIs.
pub async fn open_client(config: &SeedConfig) -> mongodb::error::Result<Client> {
    let mut options = ClientOptions::parse(&config.uri).await?;
    options.app_name = Some(APP_NAME.to_string());
    options.connect_timeout = Some(config.timeout);
    options.server_selection_timeout = Some(config.timeout);

    Client::with_options(options)
}

fn connection_error(e: mongodb::error::Error) -> SeedError {
    SeedError::Connection(e.to_string())
}
