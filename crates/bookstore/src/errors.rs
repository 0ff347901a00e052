use mongodb::bson;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),
}
