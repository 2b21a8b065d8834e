use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::inline::{Delimiter, Tokenizer};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Inline delimiter for `{kind}` has an empty token")]
    EmptyDelimiter { kind: String },
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub paths: PathsConfig,
    pub build: BuildConfig,
    pub inline: InlineConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub static_dir: PathBuf,
    pub content_dir: PathBuf,
    pub public_dir: PathBuf,
    pub template: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            content_dir: PathBuf::from("content"),
            public_dir: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Stop the whole build at the first page that fails to render.
    pub fail_fast: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self { fail_fast: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InlineConfig {
    pub delimiters: Vec<Delimiter>,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            delimiters: Tokenizer::default().delimiters().to_vec(),
        }
    }
}

impl Config {
    /// The configuration bundled with the binary.
    pub fn compiled_default() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("default_config.toml is validated by build.rs")
    }

    /// Parse a config from TOML text.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::compiled_default());
        }
        Self::load(path)
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new(self.inline.delimiters.clone())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        match self.inline.delimiters.iter().find(|d| d.token.is_empty()) {
            Some(delimiter) => Err(ConfigError::EmptyDelimiter {
                kind: delimiter.kind.to_string(),
            }),
            None => Ok(()),
        }
    }
}
