//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigSortKey, ConfigSortOrder};
use crate::consts::{API_URL_ENV, TOKEN_ENV};
use crate::core::BlogFilter;
use crate::error::AppError;
use crate::source::{ApiSource, BoxedSource, FileSource};

use super::commands::Commands;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortOrder {
    /// Smallest first
    Asc,
    /// Largest first (default)
    #[default]
    Desc,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortKey {
    /// Author name (or blog title for `list`)
    Name,
    /// Number of blogs (falls back to likes for `list`)
    Blogs,
    /// Like count (default)
    #[default]
    Likes,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Source settings taken from the environment
///
/// Read outside clap so that an exported URL never overrides or conflicts
/// with `--file` given on the command line.
#[derive(Debug, Clone, Default)]
pub(crate) struct EnvOverrides {
    pub(crate) url: Option<String>,
    pub(crate) token: Option<String>,
}

impl EnvOverrides {
    pub(crate) fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            url: var(API_URL_ENV),
            token: var(TOKEN_ENV),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "bloglist")]
#[command(about = "Like and author statistics for blog lists", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Blog export to read: file, directory or glob pattern (repeatable)
    #[arg(short, long = "file", global = true, value_name = "PATH")]
    pub(crate) files: Vec<String>,

    /// Base URL of a running blog-list API (reads GET /api/blogs) [env: BLOGLIST_API_URL]
    #[arg(long, global = true, value_name = "URL")]
    pub(crate) url: Option<String>,

    /// Bearer token sent to the API [env: BLOGLIST_TOKEN]
    #[arg(long, global = true, value_name = "TOKEN")]
    pub(crate) token: Option<String>,

    /// Only include blogs by this author (exact match)
    #[arg(short, long, global = true, value_name = "NAME")]
    pub(crate) author: Option<String>,

    /// Only include blogs owned by this username
    #[arg(long, global = true, value_name = "USERNAME")]
    pub(crate) user: Option<String>,

    /// Only include blogs with at least this many likes
    #[arg(long, global = true, value_name = "N")]
    pub(crate) min_likes: Option<u64>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Output as CSV (authors and list only)
    #[arg(long, global = true)]
    pub(crate) csv: bool,

    /// Filter JSON output with jq expression (requires jq installed)
    #[arg(long, global = true, value_name = "FILTER")]
    pub(crate) jq: Option<String>,

    /// Sort key for authors and list
    #[arg(short, long, global = true, value_enum, default_value = "likes")]
    pub(crate) sort: SortKey,

    /// Sort order for authors and list
    #[arg(short, long, global = true, value_enum, default_value = "desc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, global = true, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Compact output (fewer columns, shortened numbers)
    #[arg(short = 'c', long, global = true)]
    pub(crate) compact: bool,

    /// Locale for number formatting (e.g., "en", "de", "fr")
    #[arg(long, global = true, value_name = "LOCALE")]
    pub(crate) locale: Option<String>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge environment and config file values into CLI (CLI args take precedence)
    ///
    /// Source order: `--file`, `--url`, `BLOGLIST_API_URL`, config `files`,
    /// config `url`. Only the first one present is kept.
    pub(crate) fn with_config(mut self, config: &Config, env: &EnvOverrides) -> Self {
        if !self.files.is_empty() {
            self.url = None;
        } else if self.url.is_none() {
            if env.url.is_some() {
                self.url = env.url.clone();
            } else if !config.files.is_empty() {
                self.files = config.files.clone();
            } else {
                self.url = config.url.clone();
            }
        }
        if self.token.is_none() {
            self.token = env.token.clone().or_else(|| config.token.clone());
        }

        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }

        // For enum values, apply config only while the CLI is at its default
        if let Some(order) = config.order
            && self.order == SortOrder::default()
        {
            self.order = match order {
                ConfigSortOrder::Asc => SortOrder::Asc,
                ConfigSortOrder::Desc => SortOrder::Desc,
            };
        }
        if let Some(sort) = config.sort
            && self.sort == SortKey::default()
        {
            self.sort = match sort {
                ConfigSortKey::Name => SortKey::Name,
                ConfigSortKey::Blogs => SortKey::Blogs,
                ConfigSortKey::Likes => SortKey::Likes,
            };
        }
        if let Some(color) = config.color
            && self.color == ColorMode::default()
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if self.locale.is_none() {
            self.locale = config.locale.clone();
        }

        self
    }

    pub(crate) fn command(&self) -> Commands {
        self.command.unwrap_or_default()
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    pub(crate) fn output_format(&self) -> Result<OutputFormat, AppError> {
        match (self.json || self.jq.is_some(), self.csv) {
            (true, true) => Err(AppError::ConflictingFormats),
            (true, false) => Ok(OutputFormat::Json),
            (false, true) => Ok(OutputFormat::Csv),
            (false, false) => Ok(OutputFormat::Table),
        }
    }

    pub(crate) fn filter(&self) -> BlogFilter {
        BlogFilter {
            author: self.author.clone(),
            username: self.user.clone(),
            min_likes: self.min_likes,
        }
    }

    /// Build the blog source named on the command line or in the config
    pub(crate) fn source(&self) -> Result<BoxedSource, AppError> {
        if !self.files.is_empty() {
            return Ok(Box::new(FileSource::new(self.files.clone())));
        }
        match &self.url {
            Some(url) => Ok(Box::new(ApiSource::new(url, self.token.clone()))),
            None => Err(AppError::NoSource),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Source;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["bloglist"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["-f", "blogs.json"]);
        assert_eq!(cli.command(), Commands::Summary);
        assert_eq!(cli.sort, SortKey::Likes);
        assert_eq!(cli.order, SortOrder::Desc);
        assert_eq!(cli.output_format().unwrap(), OutputFormat::Table);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["most-likes", "-f", "a.json", "-f", "b.json", "-j"]);
        assert_eq!(cli.command(), Commands::MostLikes);
        assert_eq!(cli.files, ["a.json", "b.json"]);
        assert!(cli.json);
    }

    fn env_url(url: &str) -> EnvOverrides {
        EnvOverrides {
            url: Some(url.to_string()),
            token: Some("env-token".to_string()),
        }
    }

    #[test]
    fn file_beats_url_on_command_line() {
        let cli = parse(&["-f", "a.json", "--url", "http://localhost:3003"])
            .with_config(&Config::default(), &EnvOverrides::default());
        assert_eq!(cli.files, ["a.json"]);
        assert!(cli.url.is_none());
        assert_eq!(cli.source().unwrap().display_name(), "a.json");
    }

    #[test]
    fn file_beats_url_from_env() {
        let cli = parse(&["total-likes", "-f", "a.json"])
            .with_config(&Config::default(), &env_url("http://127.0.0.1:9"));
        assert_eq!(cli.files, ["a.json"]);
        assert!(cli.url.is_none());
    }

    #[test]
    fn env_url_beats_config_source() {
        let config = Config::parse(
            r#"
files = ["exports/"]
token = "config-token"
"#,
        )
        .unwrap();
        let cli = parse(&["summary"]).with_config(&config, &env_url("http://localhost:3003"));
        assert!(cli.files.is_empty());
        assert_eq!(cli.url.as_deref(), Some("http://localhost:3003"));
        assert_eq!(cli.token.as_deref(), Some("env-token"));
    }

    #[test]
    fn cli_url_beats_env_url() {
        let cli = parse(&["--url", "http://cli:1", "--token", "cli-token"])
            .with_config(&Config::default(), &env_url("http://env:2"));
        assert_eq!(cli.url.as_deref(), Some("http://cli:1"));
        assert_eq!(cli.token.as_deref(), Some("cli-token"));
    }

    #[test]
    fn json_and_csv_conflict() {
        let cli = parse(&["authors", "-f", "a.json", "--json", "--csv"]);
        assert!(matches!(
            cli.output_format(),
            Err(AppError::ConflictingFormats)
        ));
    }

    #[test]
    fn jq_implies_json() {
        let cli = parse(&["-f", "a.json", "--jq", ".total_likes"]);
        assert_eq!(cli.output_format().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn no_source_is_error() {
        let cli = parse(&["summary"]).with_config(&Config::default(), &EnvOverrides::default());
        assert!(matches!(cli.source(), Err(AppError::NoSource)));
    }

    #[test]
    fn config_fills_unset_values() {
        let config = Config::parse(
            r#"
files = ["exports/"]
order = "asc"
sort = "name"
color = "never"
compact = true
locale = "de"
"#,
        )
        .unwrap();
        let cli = parse(&[]).with_config(&config, &EnvOverrides::default());
        assert_eq!(cli.files, ["exports/"]);
        assert!(cli.url.is_none());
        assert_eq!(cli.order, SortOrder::Asc);
        assert_eq!(cli.sort, SortKey::Name);
        assert_eq!(cli.color, ColorMode::Never);
        assert!(cli.compact);
        assert_eq!(cli.locale.as_deref(), Some("de"));
        assert!(!cli.use_color());
    }

    #[test]
    fn cli_values_beat_config() {
        let config = Config::parse(
            r#"
files = ["exports/"]
locale = "de"
color = "always"
"#,
        )
        .unwrap();
        let cli = parse(&["-f", "mine.json", "--locale", "fr", "--no-color"])
            .with_config(&config, &EnvOverrides::default());
        assert_eq!(cli.files, ["mine.json"]);
        assert_eq!(cli.locale.as_deref(), Some("fr"));
        assert!(!cli.use_color());
    }

    #[test]
    fn filter_from_flags() {
        let cli = parse(&["-f", "a.json", "--author", "A", "--user", "root", "--min-likes", "3"]);
        let filter = cli.filter();
        assert_eq!(filter.author.as_deref(), Some("A"));
        assert_eq!(filter.username.as_deref(), Some("root"));
        assert_eq!(filter.min_likes, Some(3));
    }
}
