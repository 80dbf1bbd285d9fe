//! Application configuration.
//!
//! Values come from `COREUP_*` keys. The browser build has no process
//! environment, so `from_build_env` reads the keys baked in at compile time
//! with `option_env!`; tests feed `from_lookup` directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SEARCH_PAGE_SIZE: usize = 6;
pub const DEFAULT_MAX_INDUSTRY_SELECTIONS: usize = crate::forms::rules::DEFAULT_MAX_SELECTIONS;
pub const DEFAULT_NOTIFICATIONS_DELAY_MS: u32 = 1000;
pub const DEFAULT_NEWS_FEED_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Opportunities per search results page.
    pub search_page_size: usize,
    /// Cap for multi-choice industry pickers.
    pub max_industry_selections: usize,
    /// Simulated latency of the notifications fetch.
    pub notifications_delay_ms: u32,
    /// Simulated latency of the news feed fetch.
    pub news_feed_delay_ms: u32,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_page_size: DEFAULT_SEARCH_PAGE_SIZE,
            max_industry_selections: DEFAULT_MAX_INDUSTRY_SELECTIONS,
            notifications_delay_ms: DEFAULT_NOTIFICATIONS_DELAY_MS,
            news_feed_delay_ms: DEFAULT_NEWS_FEED_DELAY_MS,
            log_level: log::Level::Info,
        }
    }
}

impl AppConfig {
    /// Build config from a key lookup.
    ///
    /// Optional keys (defaults in parentheses):
    /// - `COREUP_SEARCH_PAGE_SIZE` (6, must be > 0)
    /// - `COREUP_MAX_INDUSTRY_SELECTIONS` (3, must be > 0)
    /// - `COREUP_NOTIFICATIONS_DELAY_MS` (1000)
    /// - `COREUP_NEWS_FEED_DELAY_MS` (500)
    /// - `COREUP_LOG_LEVEL` (`info`)
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` for a value that does not parse or a zero
    /// size.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let search_page_size = parse_positive(&lookup, "COREUP_SEARCH_PAGE_SIZE", defaults.search_page_size)?;
        let max_industry_selections =
            parse_positive(&lookup, "COREUP_MAX_INDUSTRY_SELECTIONS", defaults.max_industry_selections)?;
        let notifications_delay_ms =
            parse_or(&lookup, "COREUP_NOTIFICATIONS_DELAY_MS", defaults.notifications_delay_ms)?;
        let news_feed_delay_ms = parse_or(&lookup, "COREUP_NEWS_FEED_DELAY_MS", defaults.news_feed_delay_ms)?;
        let log_level = parse_or(&lookup, "COREUP_LOG_LEVEL", defaults.log_level)?;

        Ok(Self { search_page_size, max_industry_selections, notifications_delay_ms, news_feed_delay_ms, log_level })
    }

    /// Build config from values captured at compile time, falling back to
    /// defaults (with a warning) if any of them fail to parse.
    pub fn from_build_env() -> Self {
        let baked = [
            ("COREUP_SEARCH_PAGE_SIZE", option_env!("COREUP_SEARCH_PAGE_SIZE")),
            ("COREUP_MAX_INDUSTRY_SELECTIONS", option_env!("COREUP_MAX_INDUSTRY_SELECTIONS")),
            ("COREUP_NOTIFICATIONS_DELAY_MS", option_env!("COREUP_NOTIFICATIONS_DELAY_MS")),
            ("COREUP_NEWS_FEED_DELAY_MS", option_env!("COREUP_NEWS_FEED_DELAY_MS")),
            ("COREUP_LOG_LEVEL", option_env!("COREUP_LOG_LEVEL")),
        ];
        let lookup = |key: &str| {
            baked
                .iter()
                .find(|(name, _)| *name == key)
                .and_then(|(_, value)| value.map(str::to_owned))
        };
        match Self::from_lookup(lookup) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

fn parse_positive<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = parse_or(lookup, key, default)?;
    if value == 0 {
        return Err(ConfigError::InvalidValue { key, value: "0".to_owned() });
    }
    Ok(value)
}
