use std::cmp::Ordering;

use super::model::Product;

/// Ordering direction for sorted queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// Sort keys accepted by the listing endpoints.
///
/// Every key breaks ties on the product id, so each ordering is total and a
/// cursor always points at exactly one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Price ascending, then id ascending.
    Price,
    /// Price descending, then id descending.
    PriceDesc,
    /// Id ascending.
    Id,
    /// Id descending.
    #[default]
    IdDesc,
}

impl SortKey {
    /// Resolves a raw `sort` parameter. Unknown or missing keys fall back to `iddesc`.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|key| key.parse().ok()).unwrap_or_default()
    }

    pub fn is_price_based(self) -> bool {
        matches!(self, SortKey::Price | SortKey::PriceDesc)
    }

    pub fn direction(self) -> OrderDirection {
        match self {
            SortKey::Price | SortKey::Id => OrderDirection::Asc,
            SortKey::PriceDesc | SortKey::IdDesc => OrderDirection::Desc,
        }
    }

    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        let ascending = if self.is_price_based() {
            a.price.cmp(&b.price).then(a.id.cmp(&b.id))
        } else {
            a.id.cmp(&b.id)
        };

        match self.direction() {
            OrderDirection::Asc => ascending,
            OrderDirection::Desc => ascending.reverse(),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Price => write!(f, "price"),
            SortKey::PriceDesc => write!(f, "pricedesc"),
            SortKey::Id => write!(f, "id"),
            SortKey::IdDesc => write!(f, "iddesc"),
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(SortKey::Price),
            "pricedesc" => Ok(SortKey::PriceDesc),
            "id" => Ok(SortKey::Id),
            "iddesc" => Ok(SortKey::IdDesc),
            _ => Err(format!("Invalid sort key: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ImageRef;
    use crate::domain::shared::value_objects::{ProductId, UserId};
    use chrono::Utc;

    fn product(id: i64, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            user_id: UserId::new("seller"),
            title: format!("item {id}"),
            price,
            category_id: None,
            images: vec![ImageRef::new("img")],
            created_at: Utc::now(),
        }
    }

    fn sorted_ids(sort: SortKey, mut products: Vec<Product>) -> Vec<i64> {
        products.sort_by(|a, b| sort.compare(a, b));
        products.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn should_fall_back_to_id_desc_when_key_is_unknown_or_missing() {
        assert_eq!(SortKey::resolve(Some("popularity")), SortKey::IdDesc);
        assert_eq!(SortKey::resolve(Some("")), SortKey::IdDesc);
        assert_eq!(SortKey::resolve(None), SortKey::IdDesc);
    }

    #[test]
    fn should_resolve_every_known_key() {
        for key in ["price", "pricedesc", "id", "iddesc"] {
            assert_eq!(SortKey::resolve(Some(key)).to_string(), key);
        }
    }

    #[test]
    fn should_break_price_ties_by_id_in_sort_direction() {
        let products = vec![product(3, 100), product(1, 100), product(2, 50)];

        assert_eq!(sorted_ids(SortKey::Price, products.clone()), vec![2, 1, 3]);
        assert_eq!(sorted_ids(SortKey::PriceDesc, products), vec![3, 1, 2]);
    }

    #[test]
    fn should_order_by_id_ignoring_price() {
        let products = vec![product(2, 1), product(3, 999), product(1, 500)];

        assert_eq!(sorted_ids(SortKey::Id, products.clone()), vec![1, 2, 3]);
        assert_eq!(sorted_ids(SortKey::IdDesc, products), vec![3, 2, 1]);
    }
}
