/// Label shown for blogs that have no author
pub(crate) const NO_AUTHOR: &str = "(no author)";

/// Placeholder for missing text cells in tables
pub(crate) const MISSING: &str = "-";

/// Environment variable naming the blog-list API base URL
pub(crate) const API_URL_ENV: &str = "BLOGLIST_API_URL";

/// Environment variable holding the API bearer token
pub(crate) const TOKEN_ENV: &str = "BLOGLIST_TOKEN";
