//! Navigation configuration for VuePress-style documentation sites.
//!
//! Parses `sitenav.toml` files with serde into a [`SiteConfig`]: site
//! metadata, the theme's sidebar and navbar trees, and the plugin list.
//! Sidebar and navbar ordering is preserved exactly as written.
//!
//! ## Validation
//!
//! - `base` and every sidebar prefix must start and end with `/`
//! - navbar links must be absolute site paths or `http(s)://` URLs
//! - `themeConfig.sidebar` and `themeConfig.navbar` are required
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `base`
//! - `title`
//! - `themeConfig.repo`

mod expand;
mod navigation;
mod routes;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use navigation::{NavGroup, NavLink, NavbarEntry, Sidebar, SidebarGroup, SidebarSection};
pub use routes::{RouteEntry, content_candidates, page_route, page_route_in, resolve_child};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "sitenav.toml";

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site language.
    #[serde(default = "default_lang")]
    pub lang: String,
    /// Site title.
    #[serde(default)]
    pub title: String,
    /// Path prefix the site is served under.
    #[serde(default = "default_base")]
    pub base: String,
    /// Site description.
    #[serde(default)]
    pub description: String,
    /// Markdown rendering options.
    #[serde(default)]
    pub markdown: MarkdownConfig,
    /// Theme configuration holding the navigation trees.
    pub theme_config: ThemeConfig,
    /// Plugins in registration order.
    #[serde(default)]
    pub plugins: Vec<PluginEntry>,
}

fn default_lang() -> String {
    "en-US".to_owned()
}

fn default_base() -> String {
    "/".to_owned()
}

/// Markdown rendering options.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MarkdownConfig {
    /// Code block options.
    pub code: CodeConfig,
}

/// Code block options.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeConfig {
    /// Whether code blocks show line numbers.
    pub line_numbers: bool,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self { line_numbers: true }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Logo image path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Repository URL shown in the header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Sidebar groups keyed by path prefix.
    pub sidebar: Sidebar,
    /// Header navigation entries.
    pub navbar: Vec<NavbarEntry>,
}

/// Plugin registration: name plus opaque options.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PluginEntry {
    /// Plugin package name, e.g. `@vuepress/plugin-shiki`.
    pub name: String,
    /// Options passed to the plugin unchanged.
    #[serde(default, skip_serializing_if = "toml::Table::is_empty")]
    pub options: toml::Table,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed TOML, or a required field missing or of the wrong shape.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Path value violating the slash conventions.
    #[error("Invalid path in {field}: \"{path}\" must {requirement}")]
    InvalidPath {
        /// Config field path (e.g., "`base`").
        field: String,
        /// Offending value.
        path: String,
        /// What the value must satisfy.
        requirement: &'static str,
    },
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`themeConfig.repo`").
        field: String,
        /// Error message (e.g., "${`SITE_BASE`} not set").
        message: String,
    },
    /// TOML serialization error.
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

const SLASH_DELIMITED: &str = "start and end with '/'";
const SITE_PATH_OR_URL: &str = "be an absolute path or an http(s):// URL";

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a path to start and end with `/`.
fn require_slash_delimited(path: &str, field: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') || !path.ends_with('/') {
        return Err(ConfigError::InvalidPath {
            field: field.to_owned(),
            path: path.to_owned(),
            requirement: SLASH_DELIMITED,
        });
    }
    Ok(())
}

/// Require a link to be an absolute site path or an http(s) URL.
fn require_site_path_or_url(link: &str, field: &str) -> Result<(), ConfigError> {
    if !link.starts_with('/') && !link.starts_with("http://") && !link.starts_with("https://") {
        return Err(ConfigError::InvalidPath {
            field: field.to_owned(),
            path: link.to_owned(),
            requirement: SITE_PATH_OR_URL,
        });
    }
    Ok(())
}

impl SiteConfig {
    /// Load configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file doesn't exist,
    /// `ConfigError::Parse` if required fields are absent or malformed and
    /// `ConfigError::InvalidPath` if a path breaks the slash conventions.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;

        tracing::debug!(
            path = %path.display(),
            sidebar_prefixes = config.theme_config.sidebar.len(),
            navbar_entries = config.theme_config.navbar.len(),
            "Loaded site configuration"
        );

        Ok(config)
    }

    /// Parse, expand and validate configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        // Expand environment variables before validation
        config.expand_env_vars()?;
        config.validate()?;

        Ok(config)
    }

    /// Resolve the configuration file to use.
    ///
    /// If `config_path` is provided, it must exist. Otherwise searches for
    /// `sitenav.toml` in the current directory and parents.
    pub fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Ok(path.to_path_buf());
        }

        let cwd = std::env::current_dir()?;
        Self::discover_from(&cwd).ok_or_else(|| ConfigError::NotFound(cwd.join(CONFIG_FILENAME)))
    }

    /// Search for the config file in `start` and its parents.
    pub fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered configuration file");
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Serialize back to TOML. Reloading the output yields an equal config.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPath` for slash convention violations and
    /// `ConfigError::Validation` for empty labels or plugin names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_slash_delimited(&self.base, "base")?;
        self.validate_sidebar()?;
        self.validate_navbar()?;
        self.validate_plugins()?;
        Ok(())
    }

    /// Validate sidebar prefixes and group labels.
    fn validate_sidebar(&self) -> Result<(), ConfigError> {
        for section in &self.theme_config.sidebar {
            require_slash_delimited(&section.prefix, "themeConfig.sidebar")?;

            for (idx, group) in section.groups.iter().enumerate() {
                let field = format!("themeConfig.sidebar.\"{}\"[{idx}].text", section.prefix);
                require_non_empty(&group.text, &field)?;

                // Valid, but renders as an empty heading
                if group.children.is_empty() {
                    tracing::warn!(
                        prefix = %section.prefix,
                        group = %group.text,
                        "Sidebar group has no pages"
                    );
                }
            }
        }
        Ok(())
    }

    /// Validate navbar labels and links.
    fn validate_navbar(&self) -> Result<(), ConfigError> {
        for (idx, entry) in self.theme_config.navbar.iter().enumerate() {
            require_non_empty(entry.text(), &format!("themeConfig.navbar[{idx}].text"))?;
            if let NavbarEntry::Dropdown(group) = entry
                && group.children.is_empty()
            {
                tracing::warn!(text = %group.text, "Navbar dropdown has no links");
            }
            for link in entry.links() {
                require_non_empty(&link.text, &format!("themeConfig.navbar[{idx}] link text"))?;
                require_site_path_or_url(&link.link, "themeConfig.navbar")?;
            }
        }
        Ok(())
    }

    /// Validate plugin names.
    fn validate_plugins(&self) -> Result<(), ConfigError> {
        for (idx, plugin) in self.plugins.iter().enumerate() {
            require_non_empty(&plugin.name, &format!("plugins[{idx}].name"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.base = expand::expand_env(&self.base, "base")?;
        self.title = expand::expand_env(&self.title, "title")?;

        if let Some(ref repo) = self.theme_config.repo {
            self.theme_config.repo = Some(expand::expand_env(repo, "themeConfig.repo")?);
        }

        Ok(())
    }

    /// Plugin registered under `name`, if any.
    pub fn plugin(&self, name: &str) -> Option<&PluginEntry> {
        self.plugins.iter().find(|plugin| plugin.name == name)
    }
}
