//! Example: Run the reference query catalog against a seeded collection.
//!
//! Walks through the CRUD, projection, sorting, pagination, aggregation and
//! indexing queries in order, printing each result as JSON.
//!
//! Run the seed binary first, then:
//! ```
//! cargo run -p seed-data --example run_queries
//! ```

use bookstore::{Database, Page, SortOrder, queries};
use seed_data::config::SeedConfig;
use seed_data::db::open_client;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn show<T: Serialize>(heading: &str, value: &T) -> anyhow::Result<()> {
    println!("\n== {heading}");
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env()?;
    let client = open_client(&config).await?;
    let db = Database::new(&client, &config.database, &config.collection);

    tracing::info!("Querying {}", config.namespace());

    // Basic CRUD
    show("Technology books", &db.find_by_genre("Technology").await?)?;
    show("Published after 2019", &db.published_after(2019).await?)?;
    show("Books by D. Woldesenbet", &db.by_author("D. Woldesenbet").await?)?;

    let updated = db.update_price("Intro to Python Data Analysis", 32.0).await?;
    tracing::info!(
        "Price update matched {}, modified {}",
        updated.matched,
        updated.modified
    );

    let deleted = db.delete_by_title("Practical MongoDB").await?;
    tracing::info!("Deleted {deleted} book(s)");

    // Advanced queries
    show("In stock, published after 2010", &db.in_stock_published_after(2010).await?)?;
    show("Technology summaries", &db.summaries_by_genre("Technology").await?)?;
    show("By price, ascending", &db.titles_by_price(SortOrder::Ascending).await?)?;
    show("By price, descending", &db.titles_by_price(SortOrder::Descending).await?)?;

    let first = Page::default();
    show("Page 1", &db.page(first).await?)?;
    show("Page 2", &db.page(first.next()).await?)?;

    // Aggregation
    show("Average price by genre", &db.average_price_by_genre().await?)?;
    show("Top author", &db.top_author().await?)?;

    let decades = db.count_by_decade().await?;
    for bucket in &decades {
        tracing::info!("  {}: {}", bucket.label(), bucket.count);
    }

    // Indexing
    let before = db.explain_title_lookup("Intro to Python Data Analysis").await?;
    let names = db.create_indexes().await?;
    tracing::info!("Created indexes: {}", names.join(", "));
    let after = db.explain_title_lookup("Intro to Python Data Analysis").await?;
    tracing::info!(
        "Docs examined by title lookup: before {:?}, after {:?}",
        queries::docs_examined(&before),
        queries::docs_examined(&after)
    );

    let compound = db.explain_author_since("D. Woldesenbet", 2020).await?;
    tracing::info!(
        "Docs examined by author + year: {:?}",
        queries::docs_examined(&compound)
    );

    drop(db);
    client.shutdown().await;
    Ok(())
}
