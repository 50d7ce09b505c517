//! Run configuration for the `apidoc` tool.
//!
//! An [`ApiDocConfig`] is read from TOML, overlaid with command-line flags and
//! then [resolved](ApiDocConfig::resolve) into the [`RunConfig`] the engine
//! consumes. Validation (output path present, skip patterns compile) happens
//! in `resolve`, before any input is read.

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use apidoc_canon::{AnnotationPolicy, CanonOptions, ImportMode, DEFAULT_ALLOWED_ANNOTATIONS};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod logging;

pub use logging::init_logging;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiDocConfig {
    /// Destination of the canonical text; the location map goes to
    /// `<output>.map`.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Prefix stripped from source paths in the location map.
    #[serde(default)]
    pub root_dir: Option<PathBuf>,

    /// Types whose qualified name matches any of these patterns are skipped.
    #[serde(default)]
    pub skip_class_regex: Vec<String>,

    // Accepted for doclet command-line compatibility; they have no effect.
    #[serde(default)]
    pub doc_title: Option<String>,
    #[serde(default)]
    pub window_title: Option<String>,
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Shorten qualified names through an import header.
    #[serde(default = "ApiDocConfig::default_imports")]
    pub imports: bool,

    #[serde(default)]
    pub annotations: AnnotationsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ApiDocConfig {
    fn default_imports() -> bool {
        true
    }

    /// Load a config file from TOML.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::load_from_str(&text)?;
        tracing::debug!(target: "apidoc.config", path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Validates the configuration and builds the engine options.
    pub fn resolve(&self) -> Result<RunConfig, ConfigError> {
        let output = self.output.clone().ok_or(ConfigError::MissingOutput)?;

        let skip_classes = self
            .skip_class_regex
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidSkipPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let imports = if self.imports {
            ImportMode::Shorten
        } else {
            ImportMode::Qualified
        };

        if self.doc_title.is_some() || self.window_title.is_some() || self.directory.is_some() {
            tracing::debug!(
                target: "apidoc.config",
                "ignoring doctitle/windowtitle/directory options"
            );
        }

        Ok(RunConfig {
            output,
            options: CanonOptions {
                skip_classes,
                root_dir: self.root_dir.clone(),
                annotations: self.annotations.policy(),
                imports,
            },
        })
    }
}

impl Default for ApiDocConfig {
    fn default() -> Self {
        Self {
            output: None,
            root_dir: None,
            skip_class_regex: Vec::new(),
            doc_title: None,
            window_title: None,
            directory: None,
            imports: Self::default_imports(),
            annotations: AnnotationsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationPolicyKind {
    #[default]
    AllowList,
    Documented,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnnotationsConfig {
    #[serde(default)]
    pub policy: AnnotationPolicyKind,

    /// Qualified annotation names printed under the allow-list policy.
    #[serde(default = "AnnotationsConfig::default_allow")]
    pub allow: Vec<String>,
}

impl AnnotationsConfig {
    fn default_allow() -> Vec<String> {
        DEFAULT_ALLOWED_ANNOTATIONS
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn policy(&self) -> AnnotationPolicy {
        match self.policy {
            AnnotationPolicyKind::AllowList => AnnotationPolicy::allow_list(self.allow.iter().cloned()),
            AnnotationPolicyKind::Documented => AnnotationPolicy::Documented,
        }
    }
}

impl Default for AnnotationsConfig {
    fn default() -> Self {
        Self {
            policy: AnnotationPolicyKind::default(),
            allow: Self::default_allow(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// A simple level (`info`, `debug`, ...) or a full `EnvFilter` directive
    /// string.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_owned()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
            json: false,
        }
    }
}

/// A validated configuration, ready to drive one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output: PathBuf,
    pub options: CanonOptions,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no output path configured (set `output` or pass --output)")]
    MissingOutput,
    #[error("invalid skip-class pattern `{pattern}`: {source}")]
    InvalidSkipPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse toml config: {0}")]
    Toml(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        // `Display` includes a source snippet; keep only the message.
        ConfigError::Toml(err.message().to_owned())
    }
}
