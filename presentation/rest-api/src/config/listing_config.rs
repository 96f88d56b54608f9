use business::domain::product::page::{
    DEFAULT_PAGE_SIZE, ListingLimits, MAX_KEYWORD_CHARS, MAX_PAGE_SIZE, PAGE_SIZE_CEILING,
};

use super::env_or;

/// Bounds for the listing endpoints
#[derive(Debug, Clone, Copy)]
pub struct ListingConfig {
    pub limits: ListingLimits,
}

impl ListingConfig {
    /// Environment variables:
    /// - LISTING_DEFAULT_SIZE: page size when none is requested (default: 10)
    /// - LISTING_MAX_SIZE: largest accepted page size (default: 100, capped at 1000)
    /// - LISTING_MAX_KEYWORD_LEN: longest accepted keyword, in characters (default: 100)
    pub fn from_env() -> Self {
        Self::new(
            env_or("LISTING_DEFAULT_SIZE", DEFAULT_PAGE_SIZE),
            env_or("LISTING_MAX_SIZE", MAX_PAGE_SIZE),
            env_or("LISTING_MAX_KEYWORD_LEN", MAX_KEYWORD_CHARS),
        )
    }

    /// `max_size` is clamped into `1..=PAGE_SIZE_CEILING` and the default size into
    /// `1..=max_size`, so the default always passes validation.
    pub fn new(default_size: i64, max_size: i64, max_keyword_chars: usize) -> Self {
        let max_size = max_size.clamp(1, PAGE_SIZE_CEILING);
        Self {
            limits: ListingLimits {
                default_size: default_size.clamp(1, max_size),
                max_size,
                max_keyword_chars,
            },
        }
    }
}
