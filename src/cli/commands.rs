//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Subcommand)]
pub(crate) enum Commands {
    /// Show every statistic at once (default)
    #[default]
    Summary,
    /// Sum of likes over all blogs
    TotalLikes,
    /// The blog with the most likes
    Favorite,
    /// The author with the most blogs
    MostBlogs,
    /// The author whose blogs have the most likes in total
    MostLikes,
    /// Blog count and like total per author
    Authors,
    /// List the loaded blogs
    List,
    /// Always prints 1 (smoke test for the helper pipeline)
    #[command(hide = true)]
    Dummy,
}

impl Commands {
    /// Whether the command renders a list that can be written as CSV
    pub(crate) fn supports_csv(self) -> bool {
        matches!(self, Commands::Authors | Commands::List)
    }
}
