//! Book records and the reference query catalog for the bookstore collection.
//!
//! [`Database`] wraps the MongoDB `books` collection and runs the catalog:
//! filters, projections, sorting, pagination, aggregations and indexes.
//! The query documents themselves live in [`queries`].

pub mod database;
pub mod errors;
pub mod models;
pub mod pagination;
pub mod queries;

pub use database::Database;
pub use errors::StoreError;
pub use models::{
    AuthorCount, BookRecord, BookSummary, DecadeCount, GenrePriceStats, PricedTitle, SortOrder,
    UpdateOutcome, decade_of,
};
pub use pagination::Page;
