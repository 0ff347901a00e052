use serde::{Deserialize, Serialize};

/// A single book document in the `books` collection.
///
/// No identifier is carried here; MongoDB assigns `_id` on insert and it is
/// ignored when documents are read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub published_year: i32,
    pub price: f64,
    pub in_stock: bool,
    pub pages: i32,
    pub publisher: String,
}

/// Title, author and price of a book (`_id` excluded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// Title and price of a book, used by the price-sorted listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedTitle {
    pub title: String,
    pub price: f64,
}

/// Average price and book count for one genre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenrePriceStats {
    #[serde(rename = "_id")]
    pub genre: String,
    #[serde(rename = "avgPrice")]
    pub avg_price: f64,
    pub count: i64,
}

/// Number of books written by one author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorCount {
    #[serde(rename = "_id")]
    pub author: String,
    #[serde(rename = "booksCount")]
    pub books_count: i64,
}

/// Number of books published in one decade.
///
/// The server computes the bucket with `$floor`/`$multiply`, so the key comes
/// back as a double.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecadeCount {
    #[serde(rename = "_id")]
    pub decade: f64,
    pub count: i64,
}

impl DecadeCount {
    /// First year of the decade, e.g. `2010`.
    pub fn start_year(&self) -> i32 {
        self.decade as i32
    }

    /// Human readable label, e.g. `"2010s"`.
    pub fn label(&self) -> String {
        format!("{}s", self.start_year())
    }
}

/// Decade bucket for a year, matching the server-side `floor(year / 10) * 10`.
pub fn decade_of(year: i32) -> i32 {
    year.div_euclid(10) * 10
}

/// Sort direction for ordered listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The value MongoDB expects in a sort or index key document.
    pub fn as_i32(self) -> i32 {
        match self {
            SortOrder::Ascending => 1,
            SortOrder::Descending => -1,
        }
    }
}

/// Result of a single-document update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched: u64,
    pub modified: u64,
}
