//! Database integration for seeding.
//!
//! The [`Seeder`] drives a single connect / insert / close cycle through a
//! [`Connector`]; [`MongoConnector`] is the production implementation.

mod mongo;
mod seeder;

pub use mongo::{MongoConnection, MongoConnector, open_client};
pub use seeder::{Connection, Connector, SeedError, SeedReport, Seeder};
