pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod listing_config;
pub mod server_config;
pub mod storage_config;

use std::str::FromStr;

/// Parses `raw`, falling back to `default` when it is absent or malformed.
pub(crate) fn parse_or<T: FromStr>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %value, "Ignoring malformed setting, using default");
            default
        }),
    }
}

pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(key, std::env::var(key).ok(), default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_when_missing() {
        assert_eq!(parse_or("SIZE", None, 10_i64), 10);
    }

    #[test]
    fn should_parse_present_value() {
        assert_eq!(parse_or("SIZE", Some(" 25 ".to_string()), 10_i64), 25);
    }

    #[test]
    fn should_use_default_when_malformed() {
        assert_eq!(parse_or("SIZE", Some("many".to_string()), 10_i64), 10);
    }
}
