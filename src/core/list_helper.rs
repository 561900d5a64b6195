//! Aggregation helpers over an ordered list of blogs
//!
//! All helpers are pure: they borrow the input, never mutate it and return
//! a defined value for an empty list.

use std::collections::HashMap;

use crate::core::types::{AuthorBlogs, AuthorLikes, AuthorStats, Blog};

/// Always 1. Kept as a smoke-test fixture for the helper module.
pub fn dummy(_blogs: &[Blog]) -> u32 {
    1
}

/// Sum of likes over all blogs, saturating at `u64::MAX`
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|b| b.likes).fold(0, u64::saturating_add)
}

/// Blog with the most likes. The first one in input order wins a tie.
pub fn favorite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best: Option<&Blog>, blog| match best {
        Some(current) if current.likes >= blog.likes => Some(current),
        _ => Some(blog),
    })
}

/// Group blogs by author, keeping the order in which authors first appear
pub fn author_stats(blogs: &[Blog]) -> Vec<AuthorStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<AuthorStats> = Vec::new();

    for blog in blogs {
        let slot = *index.entry(blog.author.as_str()).or_insert_with(|| {
            groups.push(AuthorStats {
                author: blog.author.clone(),
                blogs: 0,
                likes: 0,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.blogs = group.blogs.saturating_add(1);
        group.likes = group.likes.saturating_add(blog.likes);
    }

    groups
}

/// Author with the most blogs. On equal counts the author seen later wins.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogs> {
    // max_by_key keeps the last of several equal maxima
    author_stats(blogs)
        .into_iter()
        .max_by_key(|g| g.blogs)
        .map(|g| AuthorBlogs {
            author: g.author,
            blogs: g.blogs,
        })
}

/// Author with the highest like total. On equal totals the author seen later wins.
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikes> {
    author_stats(blogs)
        .into_iter()
        .max_by_key(|g| g.likes)
        .map(|g| AuthorLikes {
            author: g.author,
            likes: g.likes,
        })
}
