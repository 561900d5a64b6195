use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("No blog source given. Use --file <PATH> or --url <URL> (or set them in the config file).")]
    NoSource,

    #[error("--json and --csv cannot be used together")]
    ConflictingFormats,

    #[error("CSV output is only available for the authors and list commands")]
    CsvUnsupported,

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Jq(#[from] JqError),
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid file pattern \"{pattern}\": {message}")]
    Pattern { pattern: String, message: String },

    #[error("No blog files matched {input}")]
    NoMatch { input: String },

    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Unexpected response from {url}: {source}")]
    Response {
        url: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum JqError {
    #[error("jq not found. Please install jq to use --jq option.")]
    NotFound,

    #[error("Failed to run jq: {0}")]
    Spawn(std::io::Error),

    #[error("Failed to write to jq stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to wait for jq: {0}")]
    Wait(std::io::Error),

    #[error("Invalid UTF-8 from jq: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("jq error: {0}")]
    Filter(String),
}
