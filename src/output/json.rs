//! JSON renderers
//!
//! A helper with no result (empty input) renders as `{}`.

use serde::Serialize;
use serde_json::{Value, json};

use crate::core::{self, AuthorStats, Blog};

fn or_empty<T: Serialize>(value: Option<T>) -> Value {
    value
        .and_then(|v| serde_json::to_value(v).ok())
        .unwrap_or_else(|| json!({}))
}

fn pretty(value: &Value) -> String {
    format!("{value:#}")
}

pub(crate) fn output_summary_json(blogs: &[Blog]) -> String {
    pretty(&json!({
        "blogs": blogs.len(),
        "total_likes": core::total_likes(blogs),
        "favorite_blog": or_empty(core::favorite_blog(blogs)),
        "most_blogs": or_empty(core::most_blogs(blogs)),
        "most_likes": or_empty(core::most_likes(blogs)),
    }))
}

pub(crate) fn output_dummy_json(blogs: &[Blog]) -> String {
    pretty(&json!(core::dummy(blogs)))
}

pub(crate) fn output_total_likes_json(blogs: &[Blog]) -> String {
    pretty(&json!({ "total_likes": core::total_likes(blogs) }))
}

pub(crate) fn output_favorite_json(blogs: &[Blog]) -> String {
    pretty(&or_empty(core::favorite_blog(blogs)))
}

pub(crate) fn output_most_blogs_json(blogs: &[Blog]) -> String {
    pretty(&or_empty(core::most_blogs(blogs)))
}

pub(crate) fn output_most_likes_json(blogs: &[Blog]) -> String {
    pretty(&or_empty(core::most_likes(blogs)))
}

pub(crate) fn output_authors_json(stats: &[AuthorStats]) -> String {
    pretty(&json!(stats))
}

pub(crate) fn output_list_json(blogs: &[&Blog]) -> String {
    pretty(&json!(blogs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn empty_results_render_as_empty_object() {
        assert_eq!(parse(&output_favorite_json(&[])), json!({}));
        assert_eq!(parse(&output_most_blogs_json(&[])), json!({}));
        assert_eq!(parse(&output_most_likes_json(&[])), json!({}));
        assert_eq!(parse(&output_total_likes_json(&[])), json!({"total_likes": 0}));
    }

    #[test]
    fn summary_shape() {
        let blogs = vec![Blog::new("A", 5), Blog::new("B", 7), Blog::new("A", 3)];
        let v = parse(&output_summary_json(&blogs));
        assert_eq!(v["blogs"], 3);
        assert_eq!(v["total_likes"], 15);
        assert_eq!(v["favorite_blog"], json!({"author": "B", "likes": 7}));
        assert_eq!(v["most_blogs"], json!({"author": "A", "blogs": 2}));
        assert_eq!(v["most_likes"], json!({"author": "A", "likes": 8}));
    }

    #[test]
    fn summary_of_nothing() {
        let v = parse(&output_summary_json(&[]));
        assert_eq!(v["blogs"], 0);
        assert_eq!(v["total_likes"], 0);
        assert_eq!(v["favorite_blog"], json!({}));
    }

    #[test]
    fn dummy_is_one() {
        assert_eq!(parse(&output_dummy_json(&[])), json!(1));
    }

    #[test]
    fn authors_array() {
        let stats = core::author_stats(&[Blog::new("A", 1), Blog::new("A", 2)]);
        assert_eq!(
            parse(&output_authors_json(&stats)),
            json!([{"author": "A", "blogs": 2, "likes": 3}])
        );
    }
}
