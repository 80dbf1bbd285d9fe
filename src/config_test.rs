use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_empty() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.search_page_size, 6);
    assert_eq!(cfg.max_industry_selections, 3);
    assert_eq!(cfg.log_level, log::Level::Info);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("COREUP_SEARCH_PAGE_SIZE", "12"),
        ("COREUP_MAX_INDUSTRY_SELECTIONS", " 5 "),
        ("COREUP_NOTIFICATIONS_DELAY_MS", "0"),
        ("COREUP_NEWS_FEED_DELAY_MS", "250"),
        ("COREUP_LOG_LEVEL", "debug"),
    ]))
    .unwrap();
    assert_eq!(cfg.search_page_size, 12);
    assert_eq!(cfg.max_industry_selections, 5);
    assert_eq!(cfg.notifications_delay_ms, 0);
    assert_eq!(cfg.news_feed_delay_ms, 250);
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn from_lookup_rejects_unparseable_value() {
    let err = AppConfig::from_lookup(lookup_from(&[("COREUP_SEARCH_PAGE_SIZE", "six")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { key: "COREUP_SEARCH_PAGE_SIZE", value: "six".to_owned() });
}

#[test]
fn from_lookup_rejects_zero_page_size() {
    let err = AppConfig::from_lookup(lookup_from(&[("COREUP_SEARCH_PAGE_SIZE", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { key: "COREUP_SEARCH_PAGE_SIZE", .. }));
}

#[test]
fn from_lookup_rejects_unknown_log_level() {
    let err = AppConfig::from_lookup(lookup_from(&[("COREUP_LOG_LEVEL", "loud")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid value for COREUP_LOG_LEVEL: \"loud\"");
}
