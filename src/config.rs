use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Environment variable pointing at an explicit config file
pub(crate) const CONFIG_ENV: &str = "BLOGLIST_CONFIG";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigSortKey {
    Name,
    Blogs,
    Likes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Base URL of the blog-list API
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) token: Option<String>,
    /// Export files, directories or glob patterns
    #[serde(default)]
    pub(crate) files: Vec<String>,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) order: Option<ConfigSortOrder>,
    #[serde(default)]
    pub(crate) sort: Option<ConfigSortKey>,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
}

impl Config {
    /// Load the first readable config file, falling back to defaults
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", path.display(), e);
                    continue;
                }
            };
            match Self::parse(&content) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}", path.display(), e);
                }
            }
        }

        Self::default()
    }

    pub(crate) fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // An explicit path wins and disables the default locations
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            paths.push(PathBuf::from(explicit));
            return paths;
        }

        // 1. XDG config: ~/.config/bloglist/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("bloglist").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support/bloglist/config.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("bloglist").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.bloglist.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".bloglist.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_is_default() {
        let config = Config::parse("").unwrap();
        assert!(config.url.is_none());
        assert!(config.files.is_empty());
        assert!(!config.compact);
        assert!(config.order.is_none());
    }

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            r#"
url = "http://localhost:3003"
token = "abc"
files = ["exports/*.json"]
compact = true
no_color = true
order = "asc"
sort = "blogs"
color = "never"
locale = "de"
"#,
        )
        .unwrap();
        assert_eq!(config.url.as_deref(), Some("http://localhost:3003"));
        assert_eq!(config.token.as_deref(), Some("abc"));
        assert_eq!(config.files, ["exports/*.json"]);
        assert!(config.compact);
        assert!(config.no_color);
        assert_eq!(config.order, Some(ConfigSortOrder::Asc));
        assert_eq!(config.sort, Some(ConfigSortKey::Blogs));
        assert_eq!(config.color, Some(ConfigColorMode::Never));
        assert_eq!(config.locale.as_deref(), Some("de"));
    }

    #[test]
    fn parse_rejects_bad_enum_value() {
        assert!(Config::parse(r#"order = "sideways""#).is_err());
    }

    #[test]
    fn parse_rejects_unknown_key() {
        assert!(Config::parse(r#"colour = "never""#).is_err());
    }

    #[test]
    fn test_config_paths() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
    }
}
