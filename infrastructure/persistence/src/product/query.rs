//! SQL assembly for keyset-paginated product listings.

use sqlx::{Postgres, QueryBuilder};

use business::domain::product::cursor::Cursor;
use business::domain::product::page::{ProductQuery, ProductScope};
use business::domain::product::sort::{OrderDirection, SortKey};

use super::entity::PRODUCT_COLUMNS;

pub fn order_by_clause(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Price => " ORDER BY p.price ASC, p.id ASC",
        SortKey::PriceDesc => " ORDER BY p.price DESC, p.id DESC",
        SortKey::Id => " ORDER BY p.id ASC",
        SortKey::IdDesc => " ORDER BY p.id DESC",
    }
}

fn comparison(sort: SortKey) -> &'static str {
    match sort.direction() {
        OrderDirection::Asc => " > ",
        OrderDirection::Desc => " < ",
    }
}

/// Escapes `LIKE` wildcards so the keyword is matched literally.
pub fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub fn select_by_id_sql() -> String {
    format!("SELECT {} FROM products p WHERE p.id = $1", PRODUCT_COLUMNS)
}

pub fn build_list_query(query: &ProductQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM products p", PRODUCT_COLUMNS));

    match &query.scope {
        ProductScope::Catalog { keyword, category } => {
            builder.push(" WHERE TRUE");
            if let Some(keyword) = keyword {
                builder
                    .push(" AND p.title ILIKE ")
                    .push_bind(format!("%{}%", escape_like(keyword)));
            }
            if let Some(category) = category {
                builder.push(" AND p.category_id = ").push_bind(*category);
            }
        }
        ProductScope::Owner(user_id) => {
            builder
                .push(" WHERE p.user_id = ")
                .push_bind(user_id.as_str().to_string());
        }
        ProductScope::WishedBy(user_id) => {
            builder
                .push(" JOIN wishes w ON w.product_id = p.id WHERE w.user_id = ")
                .push_bind(user_id.as_str().to_string());
        }
    }

    match query.cursor {
        Some(Cursor::PriceId { price, id }) if query.sort.is_price_based() => {
            builder
                .push(" AND (p.price, p.id)")
                .push(comparison(query.sort))
                .push("(")
                .push_bind(price)
                .push(", ")
                .push_bind(id.value())
                .push(")");
        }
        Some(cursor) => {
            builder
                .push(" AND p.id")
                .push(comparison(query.sort))
                .push_bind(cursor.id().value());
        }
        None => {}
    }

    builder
        .push(order_by_clause(query.sort))
        .push(" LIMIT ")
        .push_bind(query.fetch_limit());
    builder
}
