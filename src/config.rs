use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::frequency::download::{default_wordlist_dir, wordlist_file_name};
use crate::resolver::DEFAULT_MAX_ATTEMPTS;
use crate::text::profile::ProfileParams;
use crate::wikipedia::client::{default_api_url, DEFAULT_REQUESTS_PER_SECOND};

/// Central configuration loaded from environment variables.
///
/// Every setting has a default; the .env file is loaded automatically at
/// startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// ISO 639-1 code of the Wikipedia edition and word list (FUSE_LANGUAGE)
    pub language: String,
    /// MediaWiki api.php endpoint (FUSE_WIKI_API_URL)
    pub wiki_api_url: String,
    /// Maximum MediaWiki requests per second, 0 for unlimited (FUSE_WIKI_RPS)
    pub wiki_requests_per_second: f64,
    /// Search for the closest title before fetching a page (FUSE_AUTO_SUGGEST)
    pub auto_suggest: bool,
    /// Word frequency list for the configured language (FUSE_WORDLIST_PATH)
    pub wordlist_path: PathBuf,
    /// Profiling thresholds (FUSE_COMMON_WORD_FREQ, FUSE_MIN_FREQ)
    pub profile: ProfileParams,
    /// Names a user may try per concept before giving up (FUSE_MAX_ATTEMPTS)
    pub max_attempts: u32,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let language = env::var("FUSE_LANGUAGE").unwrap_or_else(|_| "en".to_string());

        let defaults = ProfileParams::default();
        let profile = ProfileParams {
            common_word_threshold: positive_frequency(
                "FUSE_COMMON_WORD_FREQ",
                parse_var("FUSE_COMMON_WORD_FREQ", defaults.common_word_threshold)?,
            )?,
            minimum_frequency: positive_frequency(
                "FUSE_MIN_FREQ",
                parse_var("FUSE_MIN_FREQ", defaults.minimum_frequency)?,
            )?,
        };

        let wiki_requests_per_second =
            request_rate(parse_var("FUSE_WIKI_RPS", DEFAULT_REQUESTS_PER_SECOND)?)?;

        Ok(Self {
            wiki_api_url: env::var("FUSE_WIKI_API_URL")
                .unwrap_or_else(|_| default_api_url(&language)),
            wiki_requests_per_second,
            auto_suggest: parse_var("FUSE_AUTO_SUGGEST", true)?,
            wordlist_path: env::var("FUSE_WORDLIST_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| default_wordlist_dir().join(wordlist_file_name(&language))),
            profile,
            max_attempts: parse_var("FUSE_MAX_ATTEMPTS", DEFAULT_MAX_ATTEMPTS)?,
            language,
        })
    }

    /// Whether the word list for the configured language is installed.
    pub fn wordlist_present(&self) -> bool {
        self.wordlist_path.exists()
    }
}

/// Read and parse an optional environment variable, falling back to `default`.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {name}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

/// A frequency setting must be a finite number above zero.
fn positive_frequency(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value <= 0.0 {
        anyhow::bail!("{name} must be a positive number, got {value}");
    }
    Ok(value)
}

/// Requests per second must be finite and not negative (0 disables limiting).
fn request_rate(value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        anyhow::bail!("FUSE_WIKI_RPS must be 0 or a positive number, got {value}");
    }
    Ok(value)
}
