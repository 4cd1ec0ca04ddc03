//! Configuration for the extraction engine.
//!
//! Everything has a development default so the engine runs without any
//! environment set up. `ExtractorConfig::from_env` reads overrides and
//! validates the numeric knobs.

use std::env;
use std::fmt::Display;
use thiserror::Error;

use crate::entities::EntityKind;

/// Environment variable names.
pub const ENV_FILE_PATH_BASE: &str = "FILE_PATH_BASE";
pub const ENV_MEDIA_INDEX: &str = "MEDIA_INDEX";
pub const ENV_SEASON_INDEX: &str = "SEASON_INDEX";
pub const ENV_EPISODE_INDEX: &str = "EPISODE_INDEX";
pub const ENV_EXTRACT_CONCURRENCY: &str = "EXTRACT_CONCURRENCY";
pub const ENV_MAX_PLACEHOLDER_EPISODES: &str = "MAX_PLACEHOLDER_EPISODES";

const DEFAULT_FILE_PATH_BASE: &str = "https://en.wikipedia.org/wiki/Special:FilePath/";
const DEFAULT_MEDIA_INDEX: &str = "media";
const DEFAULT_SEASON_INDEX: &str = "season";
const DEFAULT_EPISODE_INDEX: &str = "episode";
const DEFAULT_EXTRACT_CONCURRENCY: usize = 4;
const DEFAULT_MAX_PLACEHOLDER_EPISODES: u32 = 1000;

/// Extraction runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    file_path_base: String,
    media_index: String,
    season_index: String,
    episode_index: String,
    concurrency: usize,
    max_placeholder_episodes: u32,
}

impl ExtractorConfig {
    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file_path_base =
            env::var(ENV_FILE_PATH_BASE).unwrap_or_else(|_| DEFAULT_FILE_PATH_BASE.to_string());
        let media_index =
            env::var(ENV_MEDIA_INDEX).unwrap_or_else(|_| DEFAULT_MEDIA_INDEX.to_string());
        let season_index =
            env::var(ENV_SEASON_INDEX).unwrap_or_else(|_| DEFAULT_SEASON_INDEX.to_string());
        let episode_index =
            env::var(ENV_EPISODE_INDEX).unwrap_or_else(|_| DEFAULT_EPISODE_INDEX.to_string());

        let concurrency = parse_var(
            ENV_EXTRACT_CONCURRENCY,
            "concurrency",
            DEFAULT_EXTRACT_CONCURRENCY,
        )?;
        if concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "concurrency",
                reason: "must be at least 1".to_string(),
            });
        }
        let max_placeholder_episodes = parse_var(
            ENV_MAX_PLACEHOLDER_EPISODES,
            "max_placeholder_episodes",
            DEFAULT_MAX_PLACEHOLDER_EPISODES,
        )?;

        if !file_path_base.starts_with("http://") && !file_path_base.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                field: "file_path_base",
                reason: format!("not an http(s) url: {file_path_base}"),
            });
        }

        Ok(Self {
            file_path_base,
            media_index,
            season_index,
            episode_index,
            concurrency,
            max_placeholder_episodes,
        })
    }

    /// URL prefix that resolves a file name to the file itself.
    pub fn file_path_base(&self) -> &str {
        &self.file_path_base
    }

    /// Destination index for an entity kind.
    pub fn index_for(&self, kind: EntityKind) -> &str {
        match kind {
            EntityKind::Media => &self.media_index,
            EntityKind::Season => &self.season_index,
            EntityKind::Episode => &self.episode_index,
        }
    }

    /// Number of articles extracted concurrently by the batch runner.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Upper bound on synthesized placeholder episodes per article.
    pub fn max_placeholder_episodes(&self) -> u32 {
        self.max_placeholder_episodes
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_max_placeholder_episodes(mut self, max: u32) -> Self {
        self.max_placeholder_episodes = max;
        self
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            file_path_base: DEFAULT_FILE_PATH_BASE.to_string(),
            media_index: DEFAULT_MEDIA_INDEX.to_string(),
            season_index: DEFAULT_SEASON_INDEX.to_string(),
            episode_index: DEFAULT_EPISODE_INDEX.to_string(),
            concurrency: DEFAULT_EXTRACT_CONCURRENCY,
            max_placeholder_episodes: DEFAULT_MAX_PLACEHOLDER_EPISODES,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    key: &str,
    field: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                field,
                reason: format!("{raw:?}: {e}"),
            }),
        Err(_) => Ok(default),
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
