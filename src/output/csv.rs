use std::fmt::Write;

use crate::core::{AuthorStats, Blog};

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

pub(crate) fn output_authors_csv(stats: &[AuthorStats]) -> String {
    let mut out = String::from("author,blogs,likes\n");
    for group in stats {
        let _ = writeln!(
            out,
            "{},{},{}",
            csv_escape(&group.author),
            group.blogs,
            group.likes
        );
    }
    out
}

pub(crate) fn output_list_csv(blogs: &[&Blog]) -> String {
    let mut out = String::from("id,title,author,url,likes,user\n");
    for blog in blogs {
        let _ = writeln!(
            out,
            "{},{},{},{},{},{}",
            csv_escape(blog.id.as_deref().unwrap_or_default()),
            csv_escape(blog.title.as_deref().unwrap_or_default()),
            csv_escape(&blog.author),
            csv_escape(blog.url.as_deref().unwrap_or_default()),
            blog.likes,
            csv_escape(blog.username().unwrap_or_default()),
        );
    }
    out
}
