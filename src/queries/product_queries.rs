use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::{
    error::Result,
    models::{Page, Product, ProductView},
    queries::relation_queries,
    reports::{ProductFilter, ProductListing, REPAIR_STATUS},
};

/// Purchase date plus warranty months of exactly 30 days (720 hours) each.
pub(crate) const WARRANTY_EXPIRY_SQL: &str =
    "(p.date_of_purchase + p.warranty_months * INTERVAL '720 hours')";

const LISTING_ORDER: &str = " ORDER BY p.date_of_purchase DESC, p.id ASC";

fn push_filter(query: &mut QueryBuilder<'_, Postgres>, filter: &ProductFilter) {
    match filter {
        ProductFilter::Warranty { state, now } => {
            query.push(WARRANTY_EXPIRY_SQL);
            query.push(state.sql_comparison());
            query.push_bind(*now);
        }
        ProductFilter::UsedBy(role) => {
            query.push("p.user_role = ");
            query.push_bind(role.as_str());
        }
        ProductFilter::InRepair => {
            query.push(
                "EXISTS (SELECT 1 FROM histories h WHERE h.id = ANY(p.history_ids) AND ",
            );
            query.push_bind(REPAIR_STATUS);
            query.push(" = ANY(h.status))");
        }
    }
}

pub async fn count_products(pool: &PgPool, filter: &ProductFilter) -> Result<i64> {
    let mut query: QueryBuilder<Postgres> =
        QueryBuilder::new("SELECT COUNT(*) FROM products p WHERE ");
    push_filter(&mut query, filter);

    let total = query.build_query_scalar::<i64>().fetch_one(pool).await?;

    Ok(total)
}

pub async fn list_products(pool: &PgPool, listing: &ProductListing) -> Result<Page<ProductView>> {
    let pagination = listing.pagination();
    let total_count = count_products(pool, listing.filter()).await?;

    if total_count <= pagination.offset() {
        return Ok(Page::new(Vec::new(), total_count, pagination));
    }

    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT p.* FROM products p WHERE ");
    push_filter(&mut query, listing.filter());
    query.push(LISTING_ORDER);
    query.push(" LIMIT ");
    query.push_bind(pagination.limit());
    query.push(" OFFSET ");
    query.push_bind(pagination.offset());

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;
    let data = expand_products(pool, products).await?;

    Ok(Page::new(data, total_count, pagination))
}

pub async fn expiring_products(pool: &PgPool, until: DateTime<Utc>) -> Result<Vec<ProductView>> {
    let mut query: QueryBuilder<Postgres> = QueryBuilder::new("SELECT p.* FROM products p WHERE ");
    query.push(WARRANTY_EXPIRY_SQL);
    query.push(" <= ");
    query.push_bind(until);
    query.push(LISTING_ORDER);

    let products = query.build_query_as::<Product>().fetch_all(pool).await?;

    expand_products(pool, products).await
}

/// Attaches manufacturer, creator and history (with locations) using one
/// batched lookup per relation.
pub async fn expand_products(pool: &PgPool, products: Vec<Product>) -> Result<Vec<ProductView>> {
    if products.is_empty() {
        return Ok(Vec::new());
    }

    let relations = relation_queries::load_relations(pool, &products).await?;

    Ok(products
        .into_iter()
        .map(|product| relations.expand(product))
        .collect())
}
