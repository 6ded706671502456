use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::{
    error::Result,
    models::{AnalyticsOverview, Chart, LabelCount},
    queries::product_queries::WARRANTY_EXPIRY_SQL,
    reports::WarrantyState,
};

pub async fn usage_by_role(pool: &PgPool) -> Result<Vec<LabelCount>> {
    let counts = sqlx::query_as::<_, LabelCount>(
        "SELECT user_role AS label, COUNT(*)::bigint AS count
         FROM products
         GROUP BY user_role
         ORDER BY user_role",
    )
    .fetch_all(pool)
    .await?;

    Ok(counts)
}

pub async fn warranty_status(pool: &PgPool, now: DateTime<Utc>) -> Result<Vec<LabelCount>> {
    let query = format!(
        "SELECT CASE WHEN {expiry} >= $1 THEN '{inside}' ELSE '{outside}' END AS label,
                COUNT(*)::bigint AS count
         FROM products p
         GROUP BY 1
         ORDER BY 1",
        expiry = WARRANTY_EXPIRY_SQL,
        inside = WarrantyState::InWarranty.label(),
        outside = WarrantyState::NotInWarranty.label(),
    );

    let counts = sqlx::query_as::<_, LabelCount>(&query)
        .bind(now)
        .fetch_all(pool)
        .await?;

    Ok(counts)
}

/// Counts every status entry of every history row.
pub async fn status_counts(pool: &PgPool) -> Result<Vec<LabelCount>> {
    let counts = sqlx::query_as::<_, LabelCount>(
        "SELECT s.name AS label, COUNT(*)::bigint AS count
         FROM histories h
         CROSS JOIN LATERAL unnest(h.status) AS s(name)
         GROUP BY s.name
         ORDER BY s.name",
    )
    .fetch_all(pool)
    .await?;

    Ok(counts)
}

pub async fn overview(pool: &PgPool, now: DateTime<Utc>) -> Result<AnalyticsOverview> {
    let useby = usage_by_role(pool).await?;
    let expiry = warranty_status(pool, now).await?;
    let status = status_counts(pool).await?;

    Ok(AnalyticsOverview {
        useby: Chart::from_counts("Products used by", useby),
        expiry: Chart::from_counts("Warranty", expiry),
        status: Chart::from_counts("Product Status", status),
    })
}
