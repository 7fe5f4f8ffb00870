//! Configuration management for `ia`.
//!
//! Parses `ia.toml` with serde and finds it in the current directory or its
//! parents when no path is given. CLI settings are applied on top via
//! [`CliSettings`].
//!
//! ```toml
//! [render]
//! format = "html"
//! markup = "parse"
//!
//! [[trackers]]
//! source = "${TRACKER_URL:-https://example.com/track}"
//!
//! [[trackers]]
//! html_file = "snippets/analytics.html"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! `trackers[].source` and `trackers[].html_file` support `${VAR}` and
//! `${VAR:-default}`.

mod expand;

use std::path::{Path, PathBuf};

use ia_dom::{DocumentOptions, MarkupMode, OutputFormat};
use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "ia.toml";

/// CLI settings that override configuration file values.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override output format.
    pub format: Option<OutputFormat>,
    /// Override markup insertion mode.
    pub markup: Option<MarkupMode>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rendering options.
    pub render: RenderConfig,
    /// Tracker entries as written in TOML.
    trackers: Vec<TrackerConfigRaw>,

    /// Trackers with inline markup loaded (set after loading).
    #[serde(skip)]
    pub trackers_resolved: Vec<TrackerConfig>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Rendering options.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output dialect.
    pub format: OutputFormat,
    /// How inline tracker markup is inserted.
    pub markup: MarkupMode,
}

impl RenderConfig {
    /// Options for the target document.
    #[must_use]
    pub fn document_options(&self) -> DocumentOptions {
        DocumentOptions {
            format: self.format,
            markup: self.markup,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TrackerConfigRaw {
    source: Option<String>,
    html: Option<String>,
    html_file: Option<String>,
}

/// A configured analytics tracker.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Frame source URI; empty when not set.
    pub source: String,
    /// Inline tracking markup, from `html` or the contents of `html_file`.
    pub html: Option<String>,
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
    /// Tracker markup file could not be read.
    #[error("Cannot read tracker markup {}: {source}", .path.display())]
    HtmlFile {
        /// Resolved file path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`trackers[0].source`").
        field: String,
        /// Error message (e.g., "${`TRACKER_URL`} not set").
        message: String,
    },
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `ia.toml` in the current directory and its parents, falling back
    /// to defaults (no trackers).
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// validation fails or a tracker markup file cannot be read.
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
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(format) = settings.format {
            self.render.format = format;
        }
        if let Some(markup) = settings.markup {
            self.render.markup = markup;
        }
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

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.validate()?;
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_trackers(config_dir)?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Validate tracker entries.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if a tracker sets both `html` and
    /// `html_file`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (index, tracker) in self.trackers.iter().enumerate() {
            if tracker.html.is_some() && tracker.html_file.is_some() {
                return Err(ConfigError::Validation(format!(
                    "trackers[{index}] sets both html and html_file"
                )));
            }
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        for (index, tracker) in self.trackers.iter_mut().enumerate() {
            if let Some(ref source) = tracker.source {
                let field = format!("trackers[{index}].source");
                tracker.source = Some(expand::expand_env(source, &field)?);
            }
            if let Some(ref html_file) = tracker.html_file {
                let field = format!("trackers[{index}].html_file");
                tracker.html_file = Some(expand::expand_env(html_file, &field)?);
            }
        }
        Ok(())
    }

    /// Read `html_file` entries relative to the config directory.
    fn resolve_trackers(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        self.trackers_resolved = self
            .trackers
            .iter()
            .map(|tracker| -> Result<TrackerConfig, ConfigError> {
                let html = match &tracker.html_file {
                    Some(file) => {
                        let path = config_dir.join(file);
                        let markup = std::fs::read_to_string(&path)
                            .map_err(|source| ConfigError::HtmlFile { path, source })?;
                        Some(markup)
                    }
                    None => tracker.html.clone(),
                };
                Ok(TrackerConfig {
                    source: tracker.source.clone().unwrap_or_default(),
                    html,
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(())
    }
}
