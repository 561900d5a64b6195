//! Blog source abstraction layer
//!
//! A source produces the ordered list of blog records the helpers consume.
//! Local exports and the blog-list API both implement the `Source` trait.

pub(crate) mod api;
pub(crate) mod file;
pub(crate) mod loader;

use crate::core::Blog;
use crate::error::LoadError;

pub(crate) use api::ApiSource;
pub(crate) use file::FileSource;
pub(crate) use loader::{LoadResult, load_blogs};

/// Records produced by one fetch, before filtering
#[derive(Debug, Default)]
pub(crate) struct Fetched {
    pub(crate) blogs: Vec<Blog>,
    /// Records that were present but could not be read as a blog
    pub(crate) skipped: usize,
    /// Number of files (or requests) the records came from
    pub(crate) inputs: usize,
}

/// Data source trait - implemented by each way of obtaining blogs
pub(crate) trait Source: Send + Sync {
    /// Label for log and table output
    fn display_name(&self) -> String;

    /// Fetch all records in source order
    fn fetch(&self) -> Result<Fetched, LoadError>;
}

/// Box type for dynamic dispatch
pub(crate) type BoxedSource = Box<dyn Source>;

/// Convert already-parsed JSON values into blogs, counting the ones that don't fit
pub(crate) fn blogs_from_values(values: Vec<serde_json::Value>) -> (Vec<Blog>, usize) {
    let mut blogs = Vec::with_capacity(values.len());
    let mut skipped = 0;
    for value in values {
        match serde_json::from_value::<Blog>(value) {
            Ok(blog) => blogs.push(blog),
            Err(e) => {
                tracing::debug!("skipping malformed blog record: {e}");
                skipped += 1;
            }
        }
    }
    (blogs, skipped)
}
