//! Configuration types for postsearch.
//!
//! [`Config::load`] reads `~/.config/postsearch/config.toml`, creating it
//! with the built-in defaults if it does not yet exist. [`Config::load_from`]
//! reads an explicit path without creating anything. [`Config::defaults`]
//! returns the same defaults without touching the filesystem.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
min_term_len = 3

[emoji]
enable_custom_emoji = true

[mentions]
special = ["all", "channel", "here"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/postsearch/config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub emoji: EmojiConfig,
    #[serde(default)]
    pub mentions: MentionConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchConfig {
    /// Queries and tokens shorter than this many characters are ignored.
    #[serde(default = "default_min_term_len")]
    pub min_term_len: usize,
}

fn default_min_term_len() -> usize { 3 }

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_term_len: default_min_term_len(),
        }
    }
}

/// `[emoji]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmojiConfig {
    #[serde(default = "default_enable_custom_emoji")]
    pub enable_custom_emoji: bool,
}

fn default_enable_custom_emoji() -> bool { true }

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            enable_custom_emoji: default_enable_custom_emoji(),
        }
    }
}

/// `[mentions]` section of `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MentionConfig {
    /// Channel-wide mentions that never name a user.
    #[serde(default = "default_special")]
    pub special: Vec<String>,
}

fn default_special() -> Vec<String> {
    ["all", "channel", "here"].iter().map(|s| s.to_string()).collect()
}

impl Default for MentionConfig {
    fn default() -> Self {
        Self {
            special: default_special(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/postsearch/config.toml`, layered on top of the
    /// built-in defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load from an explicit path, layered on top of the built-in defaults.
    /// The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            search: SearchConfig::default(),
            emoji: EmojiConfig::default(),
            mentions: MentionConfig::default(),
        }
    }

    fn layered(path: &Path, required: bool) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .build()?
            .try_deserialize()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("postsearch")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
