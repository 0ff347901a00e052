use mongodb::bson::Document;
use mongodb::{Client, Collection, Cursor, bson};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::StoreError;
use crate::models::{
    AuthorCount, BookRecord, BookSummary, DecadeCount, GenrePriceStats, PricedTitle, SortOrder,
    UpdateOutcome,
};
use crate::pagination::Page;
use crate::queries;

/// Handle to the books collection.
///
/// Cheap to clone; all clones share the client's connection pool.
#[derive(Clone)]
pub struct Database {
    db: mongodb::Database,
    books: Collection<BookRecord>,
}

impl Database {
    /// Resolves `database.collection` on `client`. The collection is created
    /// by the server on first insert.
    pub fn new(client: &Client, database: &str, collection: &str) -> Self {
        let db = client.database(database);
        let books = db.collection::<BookRecord>(collection);
        Self { db, books }
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    pub fn collection_name(&self) -> &str {
        self.books.name()
    }

    /// Inserts all books in a single `insertMany` and returns the number of
    /// documents the server reports as inserted.
    pub async fn insert_books(&self, books: &[BookRecord]) -> Result<u64, StoreError> {
        let result = self.books.insert_many(books).await?;
        Ok(result.inserted_ids.len() as u64)
    }

    pub async fn count_all(&self) -> Result<u64, StoreError> {
        Ok(self.books.count_documents(Document::new()).await?)
    }

    pub async fn find_by_genre(&self, genre: &str) -> Result<Vec<BookRecord>, StoreError> {
        self.find(queries::by_genre(genre)).await
    }

    pub async fn published_after(&self, year: i32) -> Result<Vec<BookRecord>, StoreError> {
        self.find(queries::published_after(year)).await
    }

    pub async fn by_author(&self, author: &str) -> Result<Vec<BookRecord>, StoreError> {
        self.find(queries::by_author(author)).await
    }

    pub async fn in_stock_published_after(
        &self,
        year: i32,
    ) -> Result<Vec<BookRecord>, StoreError> {
        self.find(queries::in_stock_published_after(year)).await
    }

    /// Sets the price of the first book matching `title`.
    pub async fn update_price(&self, title: &str, price: f64) -> Result<UpdateOutcome, StoreError> {
        let result = self
            .books
            .update_one(queries::by_title(title), queries::set_price(price))
            .await?;

        debug!(
            "update_price({title}): matched {}, modified {}",
            result.matched_count, result.modified_count
        );

        Ok(UpdateOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    /// Deletes the first book matching `title`, returning the deleted count.
    pub async fn delete_by_title(&self, title: &str) -> Result<u64, StoreError> {
        let result = self.books.delete_one(queries::by_title(title)).await?;
        Ok(result.deleted_count)
    }

    /// Title, author and price of every book in `genre`.
    pub async fn summaries_by_genre(&self, genre: &str) -> Result<Vec<BookSummary>, StoreError> {
        let cursor = self
            .books
            .clone_with_type::<BookSummary>()
            .find(queries::by_genre(genre))
            .projection(queries::summary_projection())
            .await?;

        collect(cursor).await
    }

    /// Title and price of every book, ordered by price.
    pub async fn titles_by_price(&self, order: SortOrder) -> Result<Vec<PricedTitle>, StoreError> {
        let cursor = self
            .books
            .clone_with_type::<PricedTitle>()
            .find(Document::new())
            .projection(queries::priced_title_projection())
            .sort(queries::sort_by_price(order))
            .await?;

        collect(cursor).await
    }

    /// One page of books in natural order.
    pub async fn page(&self, page: Page) -> Result<Vec<BookRecord>, StoreError> {
        let cursor = self
            .books
            .find(Document::new())
            .skip(page.skip())
            .limit(page.limit())
            .await?;

        collect(cursor).await
    }

    pub async fn average_price_by_genre(&self) -> Result<Vec<GenrePriceStats>, StoreError> {
        self.aggregate(queries::average_price_by_genre()).await
    }

    /// The author with the most books, or `None` for an empty collection.
    pub async fn top_author(&self) -> Result<Option<AuthorCount>, StoreError> {
        let mut rows = self.aggregate(queries::top_author()).await?;
        Ok(rows.pop())
    }

    pub async fn count_by_decade(&self) -> Result<Vec<DecadeCount>, StoreError> {
        self.aggregate(queries::count_by_decade()).await
    }

    /// Creates the title and author/year indexes, returning their names.
    pub async fn create_indexes(&self) -> Result<Vec<String>, StoreError> {
        let result = self.books.create_indexes(queries::catalog_indexes()).await?;
        Ok(result.index_names)
    }

    pub async fn drop_indexes(&self) -> Result<(), StoreError> {
        for name in [queries::TITLE_INDEX, queries::AUTHOR_YEAR_INDEX] {
            self.books.drop_index(name).await?;
        }
        Ok(())
    }

    /// Query plan for a lookup by title.
    pub async fn explain_title_lookup(&self, title: &str) -> Result<Document, StoreError> {
        self.explain(queries::by_title(title)).await
    }

    /// Query plan for books by `author` published in or after `year`.
    pub async fn explain_author_since(
        &self,
        author: &str,
        year: i32,
    ) -> Result<Document, StoreError> {
        self.explain(queries::by_author_since(author, year)).await
    }

    /// Drops the whole collection.
    pub async fn drop_collection(&self) -> Result<(), StoreError> {
        self.books.drop().await?;
        Ok(())
    }

    async fn find(&self, filter: Document) -> Result<Vec<BookRecord>, StoreError> {
        let cursor = self.books.find(filter).await?;
        collect(cursor).await
    }

    async fn aggregate<T: DeserializeOwned>(
        &self,
        pipeline: Vec<Document>,
    ) -> Result<Vec<T>, StoreError> {
        let mut cursor = self.books.aggregate(pipeline).await?;
        let mut rows = Vec::new();
        while cursor.advance().await? {
            let raw: Document = cursor.deserialize_current()?;
            rows.push(bson::from_document(raw)?);
        }
        Ok(rows)
    }

    async fn explain(&self, filter: Document) -> Result<Document, StoreError> {
        let command = queries::explain_find(self.collection_name(), filter);
        Ok(self.db.run_command(command).await?)
    }
}

async fn collect<T: DeserializeOwned>(mut cursor: Cursor<T>) -> Result<Vec<T>, StoreError> {
    let mut items = Vec::new();
    while cursor.advance().await? {
        items.push(cursor.deserialize_current()?);
    }
    Ok(items)
}
