//! Cursor pagination over an unordered post store.
//!
//! The store decides scan order. A page carries an opaque [`PageCursor`] when
//! the store reports more records; consumers continue while a `next_url` is
//! present and never infer completion from the number of items returned.

mod cursor;
mod error;
mod page;
mod request;

pub use cursor::PageCursor;
pub use error::PaginationError;
pub use page::{next_url, Page, PostListView, POSTS_PATH};
pub use request::{PageRequest, DEFAULT_PAGE_LIMIT};
