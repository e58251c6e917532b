pub mod auth;
pub mod error;
pub mod health;
pub mod posts;

pub use error::ApiError;
