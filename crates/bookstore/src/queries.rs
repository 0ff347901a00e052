//! Query documents for the reference catalog.
//!
//! Each function returns the filter, projection, update or pipeline that
//! [`Database`](crate::database::Database) sends to the server, so the shape
//! of every query can be checked without a running MongoDB.

use mongodb::IndexModel;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::IndexOptions;

use crate::models::SortOrder;

/// Name of the single-field index on `title`.
pub const TITLE_INDEX: &str = "IdxTitle";

/// Name of the compound index on `author` then `published_year` (descending).
pub const AUTHOR_YEAR_INDEX: &str = "IdxAuthorYear";

/// Verbosity passed to `explain`.
pub const EXPLAIN_VERBOSITY: &str = "executionStats";

pub fn by_genre(genre: &str) -> Document {
    doc! { "genre": genre }
}

pub fn published_after(year: i32) -> Document {
    doc! { "published_year": { "$gt": year } }
}

pub fn by_author(author: &str) -> Document {
    doc! { "author": author }
}

pub fn by_title(title: &str) -> Document {
    doc! { "title": title }
}

/// Books by `author` published in or after `year`.
pub fn by_author_since(author: &str, year: i32) -> Document {
    doc! { "author": author, "published_year": { "$gte": year } }
}

/// In-stock books published after `year`.
pub fn in_stock_published_after(year: i32) -> Document {
    doc! { "in_stock": true, "published_year": { "$gt": year } }
}

pub fn set_price(price: f64) -> Document {
    doc! { "$set": { "price": price } }
}

/// Projection returning only title, author and price.
pub fn summary_projection() -> Document {
    doc! { "title": 1, "author": 1, "price": 1, "_id": 0 }
}

/// Projection returning only title and price.
pub fn priced_title_projection() -> Document {
    doc! { "title": 1, "price": 1, "_id": 0 }
}

pub fn sort_by_price(order: SortOrder) -> Document {
    doc! { "price": order.as_i32() }
}

/// Average price and count per genre, most expensive genre first.
pub fn average_price_by_genre() -> Vec<Document> {
    vec![
        doc! {
            "$group": {
                "_id": "$genre",
                "avgPrice": { "$avg": "$price" },
                "count": { "$sum": 1 },
            }
        },
        doc! { "$sort": { "avgPrice": -1 } },
    ]
}

/// The author with the most books.
pub fn top_author() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$author", "booksCount": { "$sum": 1 } } },
        doc! { "$sort": { "booksCount": -1 } },
        doc! { "$limit": 1 },
    ]
}

/// Book counts per publication decade, oldest decade first.
pub fn count_by_decade() -> Vec<Document> {
    vec![
        doc! {
            "$project": {
                "title": 1,
                "decade": {
                    "$multiply": [
                        { "$floor": { "$divide": ["$published_year", 10] } },
                        10,
                    ]
                },
            }
        },
        doc! { "$group": { "_id": "$decade", "count": { "$sum": 1 } } },
        doc! { "$sort": { "_id": 1 } },
    ]
}

/// The secondary indexes of the catalog: title, and author + year.
pub fn catalog_indexes() -> Vec<IndexModel> {
    vec![
        IndexModel::builder()
            .keys(doc! { "title": SortOrder::Ascending.as_i32() })
            .options(IndexOptions::builder().name(TITLE_INDEX.to_string()).build())
            .build(),
        IndexModel::builder()
            .keys(doc! {
                "author": SortOrder::Ascending.as_i32(),
                "published_year": SortOrder::Descending.as_i32(),
            })
            .options(
                IndexOptions::builder()
                    .name(AUTHOR_YEAR_INDEX.to_string())
                    .build(),
            )
            .build(),
    ]
}

/// `explain` command wrapping a `find` on `collection`.
pub fn explain_find(collection: &str, filter: Document) -> Document {
    doc! {
        "explain": { "find": collection, "filter": filter },
        "verbosity": EXPLAIN_VERBOSITY,
    }
}

/// Pulls `executionStats.totalDocsExamined` out of an explain result.
pub fn docs_examined(explain: &Document) -> Option<i64> {
    match explain
        .get_document("executionStats")
        .ok()?
        .get("totalDocsExamined")?
    {
        Bson::Int32(n) => Some(i64::from(*n)),
        Bson::Int64(n) => Some(*n),
        Bson::Double(n) => Some(*n as i64),
        _ => None,
    }
}
