use comfy_table::{Cell, Color};

use crate::consts::MISSING;
use crate::core::{self, AuthorStats, Blog};
use crate::output::format::{
    NumberFormat, author_label, create_styled_table, format_count, format_number, header_cell,
    right_cell, styled_cell,
};

const NO_BLOGS: &str = "No blogs found.";

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) number_format: NumberFormat,
}

impl TableOptions {
    fn count(&self, n: u64) -> String {
        format_count(n, self.number_format, self.compact)
    }

    fn accent(&self) -> Option<Color> {
        self.use_color.then_some(Color::Green)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LoadSummary {
    pub(crate) blogs: usize,
    pub(crate) inputs: usize,
    pub(crate) skipped: usize,
    pub(crate) filtered_out: usize,
    pub(crate) elapsed_ms: Option<f64>,
}

/// Footer line with load statistics and optional timing
fn summary_line(summary: &LoadSummary, opts: &TableOptions) -> String {
    let fmt = opts.number_format;
    let mut text = format!(
        "{} blogs from {} {}",
        format_number(summary.blogs as u64, fmt),
        format_number(summary.inputs as u64, fmt),
        if summary.inputs == 1 { "input" } else { "inputs" },
    );
    if summary.filtered_out > 0 {
        text.push_str(&format!(
            ", {} filtered out",
            format_number(summary.filtered_out as u64, fmt)
        ));
    }
    if summary.skipped > 0 {
        text.push_str(&format!(
            ", {} malformed skipped",
            format_number(summary.skipped as u64, fmt)
        ));
    }

    match summary.elapsed_ms {
        Some(ms) if opts.use_color => format!("\n  {text} | \x1b[36m{ms:.0}ms\x1b[0m\n"),
        Some(ms) => format!("\n  {text} | {ms:.0}ms\n"),
        None => format!("\n  {text}\n"),
    }
}

fn blog_caption(blog: &Blog) -> String {
    match blog.title.as_deref() {
        Some(title) => format!("{title} by {}", author_label(&blog.author)),
        None => author_label(&blog.author).to_string(),
    }
}

pub(crate) fn print_summary_table(
    blogs: &[Blog],
    summary: &LoadSummary,
    opts: TableOptions,
) -> String {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Statistic", c), header_cell("Value", c)]);

    table.add_row(vec![
        Cell::new("Blogs"),
        right_cell(&opts.count(blogs.len() as u64), None, false),
    ]);
    table.add_row(vec![
        Cell::new("Total likes"),
        right_cell(&opts.count(core::total_likes(blogs)), opts.accent(), true),
    ]);

    let favorite = core::favorite_blog(blogs).map_or_else(
        || MISSING.to_string(),
        |b| format!("{} ({} likes)", blog_caption(b), opts.count(b.likes)),
    );
    table.add_row(vec![Cell::new("Favorite blog"), Cell::new(favorite)]);

    let most_blogs = core::most_blogs(blogs).map_or_else(
        || MISSING.to_string(),
        |top| format!("{} ({} blogs)", author_label(&top.author), opts.count(top.blogs)),
    );
    table.add_row(vec![Cell::new("Most blogs"), Cell::new(most_blogs)]);

    let most_likes = core::most_likes(blogs).map_or_else(
        || MISSING.to_string(),
        |top| format!("{} ({} likes)", author_label(&top.author), opts.count(top.likes)),
    );
    table.add_row(vec![Cell::new("Most likes"), Cell::new(most_likes)]);

    format!("{table}\n{}", summary_line(summary, &opts))
}

pub(crate) fn print_total_likes(blogs: &[Blog], opts: TableOptions) -> String {
    format!("{}\n", opts.count(core::total_likes(blogs)))
}

pub(crate) fn print_favorite_table(blogs: &[Blog], opts: TableOptions) -> String {
    let Some(blog) = core::favorite_blog(blogs) else {
        return format!("{NO_BLOGS}\n");
    };
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Title", c),
        header_cell("Author", c),
        header_cell("URL", c),
        header_cell("Likes", c),
    ]);
    table.add_row(vec![
        Cell::new(blog.title.as_deref().unwrap_or(MISSING)),
        Cell::new(author_label(&blog.author)),
        Cell::new(blog.url.as_deref().unwrap_or(MISSING)),
        right_cell(&opts.count(blog.likes), opts.accent(), true),
    ]);
    format!("{table}\n")
}

pub(crate) fn print_most_blogs_table(blogs: &[Blog], opts: TableOptions) -> String {
    let Some(top) = core::most_blogs(blogs) else {
        return format!("{NO_BLOGS}\n");
    };
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Author", c), header_cell("Blogs", c)]);
    table.add_row(vec![
        Cell::new(author_label(&top.author)),
        right_cell(&opts.count(top.blogs), opts.accent(), true),
    ]);
    format!("{table}\n")
}

pub(crate) fn print_most_likes_table(blogs: &[Blog], opts: TableOptions) -> String {
    let Some(top) = core::most_likes(blogs) else {
        return format!("{NO_BLOGS}\n");
    };
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Author", c), header_cell("Likes", c)]);
    table.add_row(vec![
        Cell::new(author_label(&top.author)),
        right_cell(&opts.count(top.likes), opts.accent(), true),
    ]);
    format!("{table}\n")
}

pub(crate) fn print_authors_table(stats: &[AuthorStats], opts: TableOptions) -> String {
    if stats.is_empty() {
        return format!("{NO_BLOGS}\n");
    }
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Author", c),
        header_cell("Blogs", c),
        header_cell("Likes", c),
    ]);

    let mut total_blogs: u64 = 0;
    let mut total_likes: u64 = 0;
    for group in stats {
        total_blogs = total_blogs.saturating_add(group.blogs);
        total_likes = total_likes.saturating_add(group.likes);
        table.add_row(vec![
            Cell::new(author_label(&group.author)),
            right_cell(&opts.count(group.blogs), None, false),
            right_cell(&opts.count(group.likes), opts.accent(), false),
        ]);
    }

    let total_color = c.then_some(Color::Yellow);
    table.add_row(vec![
        styled_cell("Total", total_color, true),
        right_cell(&opts.count(total_blogs), total_color, true),
        right_cell(&opts.count(total_likes), total_color, true),
    ]);
    format!("{table}\n")
}

pub(crate) fn print_list_table(blogs: &[&Blog], opts: TableOptions) -> String {
    if blogs.is_empty() {
        return format!("{NO_BLOGS}\n");
    }
    let c = opts.use_color;
    let mut table = create_styled_table();
    if opts.compact {
        table.set_header(vec![
            header_cell("Title", c),
            header_cell("Author", c),
            header_cell("Likes", c),
        ]);
    } else {
        table.set_header(vec![
            header_cell("Title", c),
            header_cell("Author", c),
            header_cell("URL", c),
            header_cell("User", c),
            header_cell("Likes", c),
        ]);
    }

    for blog in blogs {
        let mut row = vec![
            Cell::new(blog.title.as_deref().unwrap_or(MISSING)),
            Cell::new(author_label(&blog.author)),
        ];
        if !opts.compact {
            row.push(Cell::new(blog.url.as_deref().unwrap_or(MISSING)));
            row.push(Cell::new(blog.username().unwrap_or(MISSING)));
        }
        row.push(right_cell(&opts.count(blog.likes), opts.accent(), false));
        table.add_row(row);
    }
    format!("{table}\n")
}
