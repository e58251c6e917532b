mod error;
mod requests;
mod types;

pub use error::PostError;
pub use requests::CreatePostRequest;
pub use types::{generate_post_id, Post};
