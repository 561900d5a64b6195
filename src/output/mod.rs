mod csv;
mod format;
mod json;
mod table;

use std::cmp::Ordering;

use crate::cli::{SortKey, SortOrder};
use crate::core::{AuthorStats, Blog};

pub(crate) use csv::{output_authors_csv, output_list_csv};
pub(crate) use format::NumberFormat;
pub(crate) use json::{
    output_authors_json, output_dummy_json, output_favorite_json, output_list_json,
    output_most_blogs_json, output_most_likes_json, output_summary_json, output_total_likes_json,
};
pub(crate) use table::{
    LoadSummary, TableOptions, print_authors_table, print_favorite_table, print_list_table,
    print_most_blogs_table, print_most_likes_table, print_summary_table, print_total_likes,
};

fn apply_order(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Sort author groups for display. Stable: equal keys keep first-seen order.
pub(crate) fn sort_authors(stats: &mut [AuthorStats], key: SortKey, order: SortOrder) {
    stats.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.author.cmp(&b.author),
            SortKey::Blogs => a.blogs.cmp(&b.blogs),
            SortKey::Likes => a.likes.cmp(&b.likes),
        };
        apply_order(ordering, order)
    });
}

/// Sort blogs for display. Stable: equal keys keep input order.
pub(crate) fn sort_blogs(blogs: &mut [&Blog], key: SortKey, order: SortOrder) {
    blogs.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Name => a.title.cmp(&b.title),
            SortKey::Blogs | SortKey::Likes => a.likes.cmp(&b.likes),
        };
        apply_order(ordering, order)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(author: &str, blogs: u64, likes: u64) -> AuthorStats {
        AuthorStats {
            author: author.to_string(),
            blogs,
            likes,
        }
    }

    #[test]
    fn sort_authors_by_likes_desc_is_stable() {
        let mut list = vec![stats("A", 1, 5), stats("B", 3, 9), stats("C", 2, 5)];
        sort_authors(&mut list, SortKey::Likes, SortOrder::Desc);
        let names: Vec<&str> = list.iter().map(|s| s.author.as_str()).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn sort_authors_by_name_asc() {
        let mut list = vec![stats("b", 1, 0), stats("a", 1, 0)];
        sort_authors(&mut list, SortKey::Name, SortOrder::Asc);
        assert_eq!(list[0].author, "a");
    }

    #[test]
    fn sort_authors_by_blogs() {
        let mut list = vec![stats("A", 1, 50), stats("B", 3, 0)];
        sort_authors(&mut list, SortKey::Blogs, SortOrder::Desc);
        assert_eq!(list[0].author, "B");
    }

    #[test]
    fn sort_blogs_by_likes_asc() {
        let a = Blog::new("A", 3);
        let b = Blog::new("B", 1);
        let mut list = vec![&a, &b];
        sort_blogs(&mut list, SortKey::Likes, SortOrder::Asc);
        assert_eq!(list[0].author, "B");
    }
}
