use super::cursor::Cursor;
use super::errors::ProductError;
use super::model::Product;
use super::sort::SortKey;
use crate::domain::shared::value_objects::UserId;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;
/// Hard upper bound for a configured `max_size`.
pub const PAGE_SIZE_CEILING: i64 = 1_000;
pub const MAX_KEYWORD_CHARS: usize = 100;

/// Bounds applied to listing input before any query reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingLimits {
    pub default_size: i64,
    pub max_size: i64,
    pub max_keyword_chars: usize,
}

impl Default for ListingLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
            max_keyword_chars: MAX_KEYWORD_CHARS,
        }
    }
}

impl ListingLimits {
    /// Absent size means the default; an explicit size must be in `1..=max_size`.
    pub fn page_size(&self, requested: Option<i64>) -> Result<i64, ProductError> {
        match requested {
            None => Ok(self.default_size),
            Some(size) if size <= 0 => Err(ProductError::InvalidArgument("product.invalid_size")),
            Some(size) if size > self.max_size => {
                Err(ProductError::InvalidArgument("product.size_too_large"))
            }
            Some(size) => Ok(size),
        }
    }

    /// Blank keywords are dropped; overlong ones are rejected.
    pub fn keyword(&self, raw: Option<String>) -> Result<Option<String>, ProductError> {
        let Some(raw) = raw else {
            return Ok(None);
        };
        let keyword = raw.trim();
        if keyword.is_empty() {
            return Ok(None);
        }
        if keyword.chars().count() > self.max_keyword_chars {
            return Err(ProductError::InvalidArgument("product.keyword_too_long"));
        }
        Ok(Some(keyword.to_string()))
    }

    pub fn category(&self, raw: Option<i32>) -> Result<Option<i32>, ProductError> {
        match raw {
            Some(category) if category <= 0 => {
                Err(ProductError::InvalidArgument("product.invalid_category"))
            }
            other => Ok(other),
        }
    }

    /// Validates size and cursor and assembles the store query.
    pub fn query(
        &self,
        scope: ProductScope,
        sort: SortKey,
        last: Option<&str>,
        size: Option<i64>,
    ) -> Result<ProductQuery, ProductError> {
        let size = self.page_size(size)?;
        let cursor = Cursor::decode(last, sort)?;
        Ok(ProductQuery {
            scope,
            sort,
            cursor,
            size,
        })
    }
}

/// Which products a listing draws from.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductScope {
    /// Global discovery, the only scope with keyword and category filters.
    Catalog {
        keyword: Option<String>,
        category: Option<i32>,
    },
    Owner(UserId),
    /// Products favorited by the user, joined through wishes.
    WishedBy(UserId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub scope: ProductScope,
    pub sort: SortKey,
    pub cursor: Option<Cursor>,
    pub size: i64,
}

impl ProductQuery {
    /// One extra row tells whether another page exists.
    pub fn fetch_limit(&self) -> i64 {
        self.size.saturating_add(1)
    }

    /// Row-level filters: catalog keyword/category, owner, and the cursor bound.
    /// Wish membership is left to the store.
    pub fn admits(&self, product: &Product) -> bool {
        let in_scope = match &self.scope {
            ProductScope::Catalog { keyword, category } => {
                keyword
                    .as_deref()
                    .is_none_or(|keyword| title_contains(&product.title, keyword))
                    && category.is_none_or(|category| product.category_id == Some(category))
            }
            ProductScope::Owner(user_id) => &product.user_id == user_id,
            ProductScope::WishedBy(_) => true,
        };

        in_scope
            && self
                .cursor
                .is_none_or(|cursor| cursor.admits(product, self.sort))
    }
}

/// Case-insensitive substring match used for keyword search.
pub fn title_contains(title: &str, keyword: &str) -> bool {
    title.to_lowercase().contains(&keyword.to_lowercase())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The size that was requested, not the number of items returned.
    pub size: i64,
    /// Cursor for the following page, `None` on the last page.
    pub next: Option<String>,
    pub has_more: bool,
}

impl Page<Product> {
    /// Builds a page from rows fetched with `query.fetch_limit()`.
    pub fn from_rows(mut rows: Vec<Product>, query: &ProductQuery) -> Self {
        let page_len = usize::try_from(query.size).unwrap_or(usize::MAX);
        let has_more = rows.len() > page_len;
        rows.truncate(page_len);

        let next = if has_more {
            rows.last()
                .map(|product| Cursor::encode(product, query.sort))
        } else {
            None
        };

        Self {
            items: rows,
            size: query.size,
            next,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ImageRef;
    use crate::domain::shared::value_objects::ProductId;
    use chrono::Utc;

    fn product(id: i64, title: &str, category_id: Option<i32>) -> Product {
        Product {
            id: ProductId::new(id),
            user_id: UserId::new("seller"),
            title: title.to_string(),
            price: 100,
            category_id,
            images: vec![ImageRef::new("img")],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_use_default_size_when_absent() {
        assert_eq!(ListingLimits::default().page_size(None).unwrap(), 10);
    }

    #[test]
    fn should_reject_explicit_non_positive_size() {
        let limits = ListingLimits::default();
        assert!(matches!(
            limits.page_size(Some(0)),
            Err(ProductError::InvalidArgument("product.invalid_size"))
        ));
        assert!(matches!(
            limits.page_size(Some(-5)),
            Err(ProductError::InvalidArgument("product.invalid_size"))
        ));
    }

    #[test]
    fn should_reject_size_above_maximum() {
        let limits = ListingLimits {
            max_size: 50,
            ..ListingLimits::default()
        };
        assert_eq!(limits.page_size(Some(50)).unwrap(), 50);
        assert!(matches!(
            limits.page_size(Some(51)),
            Err(ProductError::InvalidArgument("product.size_too_large"))
        ));
    }

    #[test]
    fn should_drop_blank_keyword_and_reject_long_one() {
        let limits = ListingLimits {
            max_keyword_chars: 5,
            ..ListingLimits::default()
        };
        assert_eq!(limits.keyword(Some("   ".to_string())).unwrap(), None);
        assert_eq!(
            limits.keyword(Some(" bike ".to_string())).unwrap(),
            Some("bike".to_string())
        );
        assert!(matches!(
            limits.keyword(Some("bicycle".to_string())),
            Err(ProductError::InvalidArgument("product.keyword_too_long"))
        ));
    }

    #[test]
    fn should_reject_non_positive_category() {
        let limits = ListingLimits::default();
        assert_eq!(limits.category(Some(4)).unwrap(), Some(4));
        assert!(limits.category(Some(0)).is_err());
    }

    #[test]
    fn should_match_keyword_case_insensitively_and_category_exactly() {
        let query = ProductQuery {
            scope: ProductScope::Catalog {
                keyword: Some("BIKE".to_string()),
                category: Some(2),
            },
            sort: SortKey::IdDesc,
            cursor: None,
            size: 10,
        };

        assert!(query.admits(&product(1, "Mountain bike", Some(2))));
        assert!(!query.admits(&product(2, "Mountain bike", Some(3))));
        assert!(!query.admits(&product(3, "Sofa", Some(2))));
    }

    #[test]
    fn should_flag_more_rows_and_emit_next_cursor() {
        let query = ProductQuery {
            scope: ProductScope::Owner(UserId::new("seller")),
            sort: SortKey::IdDesc,
            cursor: None,
            size: 2,
        };
        let rows = vec![
            product(5, "a", None),
            product(4, "b", None),
            product(3, "c", None),
        ];

        let page = Page::from_rows(rows, &query);

        assert_eq!(page.items.len(), 2);
        assert!(page.has_more);
        assert_eq!(page.next.as_deref(), Some("4"));
    }

    #[test]
    fn should_keep_requested_size_on_short_last_page() {
        let query = ProductQuery {
            scope: ProductScope::Owner(UserId::new("seller")),
            sort: SortKey::Id,
            cursor: None,
            size: 10,
        };

        let page = Page::from_rows(vec![product(1, "a", None)], &query);

        assert_eq!(page.size, 10);
        assert!(!page.has_more);
        assert_eq!(page.next, None);
    }

    #[test]
    fn should_not_overflow_fetch_limit_at_largest_size() {
        let limits = ListingLimits {
            max_size: i64::MAX,
            ..ListingLimits::default()
        };

        let query = limits
            .query(ProductScope::Owner(UserId::new("u")), SortKey::IdDesc, None, Some(i64::MAX))
            .unwrap();

        assert_eq!(query.fetch_limit(), i64::MAX);
    }
}
