use std::collections::HashMap;

use sqlx::PgPool;

use crate::{
    error::Result,
    models::{Company, History, Location, Product, UserSummary},
    reports::Relations,
};

pub async fn load_relations(pool: &PgPool, products: &[Product]) -> Result<Relations> {
    let mut relations = Relations {
        companies: find_companies(pool, &Relations::company_ids(products)).await?,
        users: find_users(pool, &Relations::user_ids(products)).await?,
        histories: find_histories(pool, &Relations::history_ids(products)).await?,
        locations: HashMap::new(),
    };

    relations.locations = find_locations(pool, &relations.location_ids()).await?;

    Ok(relations)
}

pub async fn find_companies(pool: &PgPool, ids: &[i32]) -> Result<HashMap<i32, Company>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let companies = sqlx::query_as::<_, Company>(
        "SELECT id, name, created_at FROM companies WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    Ok(companies.into_iter().map(|c| (c.id, c)).collect())
}

pub async fn find_users(pool: &PgPool, ids: &[i32]) -> Result<HashMap<i32, UserSummary>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let users = sqlx::query_as::<_, UserSummary>(
        "SELECT id, name, email, created_at FROM users WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    Ok(users.into_iter().map(|u| (u.id, u)).collect())
}

pub async fn find_histories(pool: &PgPool, ids: &[i32]) -> Result<HashMap<i32, History>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let histories = sqlx::query_as::<_, History>(
        "SELECT id, status, location_id, created_at FROM histories WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    Ok(histories.into_iter().map(|h| (h.id, h)).collect())
}

pub async fn find_locations(pool: &PgPool, ids: &[i32]) -> Result<HashMap<i32, Location>> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let locations = sqlx::query_as::<_, Location>(
        "SELECT id, name, created_at FROM locations WHERE id = ANY($1)",
    )
    .bind(ids)
    .fetch_all(pool)
    .await?;

    Ok(locations.into_iter().map(|l| (l.id, l)).collect())
}
