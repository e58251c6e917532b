//! DynamoDB storage backend implementation.
//!
//! Posts live in a single table whose partition key is `id` (S). Listing is a
//! plain `Scan`, so page order is whatever DynamoDB returns.

mod conversions;
mod error;
mod repository;

pub use repository::DynamoDbRepository;
