use super::errors::ProductError;
use super::model::Product;
use super::sort::{OrderDirection, SortKey};
use crate::domain::shared::value_objects::ProductId;

const PRICE_ID_SEPARATOR: char = '_';

/// Position of the last item a caller has seen, in the shape required by a sort key.
///
/// Id orderings only need the id (`"42"`). Price orderings need the price as
/// well (`"1500_42"`) because the id alone does not locate a row among price ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Id(ProductId),
    PriceId { price: i64, id: ProductId },
}

impl Cursor {
    /// Cursor pointing at `product` under `sort`.
    pub fn after(product: &Product, sort: SortKey) -> Self {
        if sort.is_price_based() {
            Cursor::PriceId {
                price: product.price,
                id: product.id,
            }
        } else {
            Cursor::Id(product.id)
        }
    }

    pub fn encode(product: &Product, sort: SortKey) -> String {
        Cursor::after(product, sort).to_string()
    }

    /// Decodes the raw `last` parameter. `None` means start from the beginning.
    pub fn decode(raw: Option<&str>, sort: SortKey) -> Result<Option<Self>, ProductError> {
        let Some(raw) = raw else {
            return Ok(None);
        };

        let cursor = if sort.is_price_based() {
            let (price, id) = raw
                .split_once(PRICE_ID_SEPARATOR)
                .ok_or(ProductError::InvalidArgument("product.invalid_cursor"))?;
            Cursor::PriceId {
                price: parse_component(price)?,
                id: ProductId::new(parse_component(id)?),
            }
        } else {
            Cursor::Id(ProductId::new(parse_component(raw)?))
        };

        Ok(Some(cursor))
    }

    pub fn id(&self) -> ProductId {
        match self {
            Cursor::Id(id) | Cursor::PriceId { id, .. } => *id,
        }
    }

    /// Whether `product` sits strictly after this position under `sort`.
    pub fn admits(&self, product: &Product, sort: SortKey) -> bool {
        let position = match self {
            Cursor::PriceId { price, id } if sort.is_price_based() => (*price, *id),
            _ if sort.is_price_based() => return false,
            cursor => (0, cursor.id()),
        };
        let key = if sort.is_price_based() {
            (product.price, product.id)
        } else {
            (0, product.id)
        };

        match sort.direction() {
            OrderDirection::Asc => key > position,
            OrderDirection::Desc => key < position,
        }
    }
}

fn parse_component(raw: &str) -> Result<i64, ProductError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ProductError::InvalidArgument("product.invalid_cursor"));
    }
    raw.parse::<i64>()
        .map_err(|_| ProductError::InvalidArgument("product.invalid_cursor"))
}

impl std::fmt::Display for Cursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cursor::Id(id) => write!(f, "{}", id),
            Cursor::PriceId { price, id } => write!(f, "{}{}{}", price, PRICE_ID_SEPARATOR, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ImageRef;
    use crate::domain::shared::value_objects::UserId;
    use chrono::Utc;

    fn product(id: i64, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            user_id: UserId::new("seller"),
            title: "Chair".to_string(),
            price,
            category_id: None,
            images: vec![ImageRef::new("img")],
            created_at: Utc::now(),
        }
    }

    fn assert_invalid(result: Result<Option<Cursor>, ProductError>) {
        assert!(matches!(
            result,
            Err(ProductError::InvalidArgument("product.invalid_cursor"))
        ));
    }

    #[test]
    fn should_start_from_beginning_when_cursor_is_absent() {
        assert_eq!(Cursor::decode(None, SortKey::Price).unwrap(), None);
        assert_eq!(Cursor::decode(None, SortKey::IdDesc).unwrap(), None);
    }

    #[test]
    fn should_encode_id_only_for_id_sorts() {
        assert_eq!(Cursor::encode(&product(42, 1500), SortKey::Id), "42");
        assert_eq!(Cursor::encode(&product(42, 1500), SortKey::IdDesc), "42");
    }

    #[test]
    fn should_encode_price_and_id_for_price_sorts() {
        assert_eq!(Cursor::encode(&product(42, 1500), SortKey::Price), "1500_42");
        assert_eq!(
            Cursor::decode(Some("1500_42"), SortKey::PriceDesc).unwrap(),
            Some(Cursor::PriceId {
                price: 1500,
                id: ProductId::new(42)
            })
        );
    }

    #[test]
    fn should_reject_cursor_not_matching_sort_shape() {
        assert_invalid(Cursor::decode(Some("42"), SortKey::Price));
        assert_invalid(Cursor::decode(Some("1500_42"), SortKey::Id));
    }

    #[test]
    fn should_reject_malformed_cursors() {
        for raw in ["", "abc", "-3", "+3", "1_", "_1", "1_2_3", "99999999999999999999"] {
            assert_invalid(Cursor::decode(Some(raw), SortKey::IdDesc));
            assert_invalid(Cursor::decode(Some(raw), SortKey::Price));
        }
    }

    #[test]
    fn should_exclude_encoded_item_and_admit_next_one() {
        let seen = product(10, 300);
        let tie_after = product(11, 300);
        let tie_before = product(9, 300);

        let raw = Cursor::encode(&seen, SortKey::Price);
        let cursor = Cursor::decode(Some(raw.as_str()), SortKey::Price)
            .unwrap()
            .unwrap();

        assert!(!cursor.admits(&seen, SortKey::Price));
        assert!(!cursor.admits(&tie_before, SortKey::Price));
        assert!(cursor.admits(&tie_after, SortKey::Price));
        assert!(cursor.admits(&product(1, 301), SortKey::Price));
        assert!(!cursor.admits(&product(99, 299), SortKey::Price));
    }

    #[test]
    fn should_bound_descending_orders_from_above() {
        let cursor = Cursor::Id(ProductId::new(10));

        assert!(cursor.admits(&product(9, 0), SortKey::IdDesc));
        assert!(!cursor.admits(&product(10, 0), SortKey::IdDesc));
        assert!(!cursor.admits(&product(11, 0), SortKey::IdDesc));
    }
}
