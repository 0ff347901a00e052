//! Seeds the bookstore collection with the reference catalog.
//!
//! Run with:
//! ```
//! MONGODB_URI=mongodb://localhost:27017 cargo run -p seed-data --bin seed
//! ```

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;
    let source = BookSource::from_config(&config);

    tracing::info!("Target: {} at {}", config.namespace(), config.redacted_uri());

    let seeder = Seeder::new(MongoConnector, config);
    match seeder.run_source(&source).await {
        Ok(report) => {
            tracing::info!("Seed completed!");
            tracing::info!("  Inserted: {}/{}", report.inserted, report.attempted);
            if !report.is_complete() {
                tracing::warn!("Server accepted fewer documents than were sent");
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Error: {e}");
            Err(e.into())
        }
    }
}
