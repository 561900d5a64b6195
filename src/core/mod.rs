//! Core module - blog data model and the aggregation helpers

pub mod list_helper;
mod types;

pub use list_helper::{author_stats, dummy, favorite_blog, most_blogs, most_likes, total_likes};
pub use types::{AuthorBlogs, AuthorLikes, AuthorStats, Blog, BlogFilter, UserRef};
