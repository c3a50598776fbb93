use crate::adapters::builtin::stock_content_types;
use crate::adapters::{ChunkLibrary, FileContentTypeSource, InMemoryContentTypeSource};
use crate::core::{ContentTypeRecord, ContentTypeSource, SnippetProperties};
use crate::utils::error::{Result, SnippetError};
use crate::utils::validation::{self, Validate};
use async_trait::async_trait;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnippetConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub chunks: ChunksConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    /// `.json` or `.toml`; the stock content types are used when unset.
    pub records_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunksConfig {
    pub directory: Option<String>,
    /// Chunk name to body; wins over a file of the same name in `directory`.
    pub inline: Option<HashMap<String, String>>,
}

/// Snippet properties applied when the call does not set them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub format: Option<String>,
    pub tpl: Option<String>,
    #[serde(rename = "wrapperTpl", alias = "wrapper_tpl")]
    pub wrapper_tpl: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl SnippetConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SnippetError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SnippetError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(records_file) = &self.source.records_file {
            validation::validate_path("source.records_file", records_file)?;
        }

        if let Some(directory) = &self.chunks.directory {
            validation::validate_path("chunks.directory", directory)?;
        }

        if let Some(inline) = &self.chunks.inline {
            for name in inline.keys() {
                validation::validate_non_empty_string("chunks.inline", name)?;
            }
        }

        if let Some(format) = &self.defaults.format {
            validation::validate_format("defaults.format", format)?;
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level) {
                return Err(SnippetError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.to_string(),
                    reason: format!("Valid levels: {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    /// Fills properties the caller left unset from `[defaults]`.
    pub fn apply_defaults(&self, mut properties: SnippetProperties) -> SnippetProperties {
        if properties.format.is_none() {
            properties.format = self.defaults.format.clone();
        }
        if properties.tpl.is_none() {
            properties.tpl = self.defaults.tpl.clone();
        }
        if properties.wrapper_tpl.is_none() {
            properties.wrapper_tpl = self.defaults.wrapper_tpl.clone();
        }
        properties
    }

    pub fn content_type_source(&self) -> ConfiguredSource {
        match &self.source.records_file {
            Some(path) => ConfiguredSource::File(FileContentTypeSource::new(path)),
            None => ConfiguredSource::Stock(InMemoryContentTypeSource::new(stock_content_types())),
        }
    }

    pub fn chunk_library(&self) -> Result<ChunkLibrary> {
        let mut library = match &self.chunks.directory {
            Some(directory) => ChunkLibrary::from_dir(directory)?,
            None => ChunkLibrary::new(),
        };

        if let Some(inline) = &self.chunks.inline {
            for (name, body) in inline {
                library.insert(name, body);
            }
        }

        Ok(library)
    }
}

impl Validate for SnippetConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// Record source chosen by `[source]`.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    File(FileContentTypeSource),
    Stock(InMemoryContentTypeSource),
}

#[async_trait]
impl ContentTypeSource for ConfiguredSource {
    async fn fetch(&self, id: Option<i64>) -> Result<Vec<ContentTypeRecord>> {
        match self {
            ConfiguredSource::File(source) => source.fetch(id).await,
            ConfiguredSource::Stock(source) => source.fetch(id).await,
        }
    }
}
