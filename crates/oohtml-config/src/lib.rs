//! Configuration management for oohtml.
//!
//! Parses `oohtml.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base_url`
//! - `blocks.dir`
//! - `page.stylesheets`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override base URL prefixed to form actions.
    pub base_url: Option<String>,
    /// Override blocks directory.
    pub blocks_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "oohtml.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site configuration.
    pub site: SiteConfig,
    /// Blocks configuration (paths are relative strings from TOML).
    blocks: BlocksConfigRaw,
    /// Page assembly configuration.
    pub page: PageConfig,

    /// Resolved blocks configuration (set after loading).
    #[serde(skip)]
    pub blocks_resolved: BlocksConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Document base URL and prefix for `action` attributes. Empty or unset
    /// disables both.
    pub base_url: Option<String>,
}

/// Raw blocks configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct BlocksConfigRaw {
    dir: Option<String>,
}

/// Resolved blocks configuration with absolute paths.
#[derive(Debug, Default)]
pub struct BlocksConfig {
    /// Directory containing `<name>.html` block files.
    pub dir: PathBuf,
}

/// Page assembly configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// Charset declared in the page head.
    pub charset: String,
    /// Stylesheet URLs linked in the page head, in order.
    pub stylesheets: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            lang: "en".to_owned(),
            charset: "utf-8".to_owned(),
            stylesheets: Vec::new(),
        }
    }
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
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`BASE_URL`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL prefix to be site-absolute or use http:// or https://.
fn require_url_prefix(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with('/') && !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with /, http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `oohtml.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            tracing::debug!(path = %discovered.display(), "Discovered config file");
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No config file found, using defaults");
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.site.base_url = Some(base_url.clone());
        }
        if let Some(blocks_dir) = &settings.blocks_dir {
            self.blocks_resolved.dir.clone_from(blocks_dir);
        }
    }

    /// Base URL to inject into element construction, if any.
    pub fn base_url(&self) -> Option<&str> {
        self.site.base_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            blocks: BlocksConfigRaw::default(),
            page: PageConfig::default(),
            blocks_resolved: BlocksConfig {
                dir: base.join("blocks"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base_url) = self.base_url() {
            require_url_prefix(base_url, "site.base_url")?;
        }
        require_non_empty(&self.page.lang, "page.lang")?;
        require_non_empty(&self.page.charset, "page.charset")?;
        for stylesheet in &self.page.stylesheets {
            require_non_empty(stylesheet, "page.stylesheets")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref url) = self.site.base_url {
            self.site.base_url = Some(expand::expand_env(url, "site.base_url")?);
        }

        if let Some(ref dir) = self.blocks.dir {
            self.blocks.dir = Some(expand::expand_env(dir, "blocks.dir")?);
        }

        self.page.stylesheets = self
            .page
            .stylesheets
            .iter()
            .map(|url| expand::expand_env(url, "page.stylesheets"))
            .collect::<Result<_, _>>()?;

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.blocks_resolved = BlocksConfig {
            dir: config_dir.join(self.blocks.dir.as_deref().unwrap_or("blocks")),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.base_url(), None);
        assert_eq!(config.blocks_resolved.dir, PathBuf::from("/test/blocks"));
        assert_eq!(config.page.lang, "en");
        assert_eq!(config.page.charset, "utf-8");
        assert!(config.page.stylesheets.is_empty());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.base_url(), None);
        assert_eq!(config.page.lang, "en");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[site]
base_url = "/app"

[blocks]
dir = "partials"

[page]
lang = "de"
charset = "iso-8859-1"
stylesheets = ["/css/site.css", "/css/print.css"]
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.base_url(), Some("/app"));
        assert_eq!(config.blocks_resolved.dir, PathBuf::from("/project/partials"));
        assert_eq!(config.page.lang, "de");
        assert_eq!(config.page.charset, "iso-8859-1");
        assert_eq!(
            config.page.stylesheets,
            vec!["/css/site.css".to_owned(), "/css/print.css".to_owned()]
        );
    }

    #[test]
    fn test_empty_base_url_disables_prefix() {
        let config: Config = toml::from_str("[site]\nbase_url = \"\"\n").unwrap();
        assert_eq!(config.base_url(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let config: Config = toml::from_str("[site]\nbase_url = \"example.com\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_empty_lang_is_invalid() {
        let config: Config = toml::from_str("[page]\nlang = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            base_url: Some("https://example.com".to_owned()),
            blocks_dir: Some(PathBuf::from("/custom/blocks")),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.base_url(), Some("https://example.com"));
        assert_eq!(config.blocks_resolved.dir, PathBuf::from("/custom/blocks"));
        assert_eq!(config.page.lang, "en"); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_partial() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.base_url(), None);
        assert_eq!(config.blocks_resolved.dir, PathBuf::from("/test/blocks"));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "[blocks]\ndir = \"parts\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.blocks_resolved.dir, dir.path().join("parts"));
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/oohtml.toml")), None).unwrap_err();
        assert!(
            matches!(err, ConfigError::NotFound(_)),
            "Expected ConfigError::NotFound, got {err:?}"
        );
    }

    #[test]
    fn test_load_expands_env_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(
            &path,
            "[site]\nbase_url = \"${OOHTML_TEST_UNSET_BASE:-/fallback}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(config.base_url(), Some("/fallback"));
    }

    #[test]
    fn test_load_rejects_invalid_cli_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            base_url: Some("ftp://example.com".to_owned()),
            ..Default::default()
        };

        let result = Config::load(Some(&path), Some(&overrides));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
