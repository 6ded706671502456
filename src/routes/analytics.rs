use axum::{
    Json,
    extract::{Query, State},
};
use chrono::{Months, Utc};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{AnalyticsOverview, ExpiringParams, Page, PageParams, ProductView, UserRole},
    queries::{analytics_queries, product_queries},
    reports::{Pagination, ProductListing, expiring_months},
};

pub async fn overview(State(state): State<AppState>) -> Result<Json<AnalyticsOverview>> {
    let overview = analytics_queries::overview(&state.db, Utc::now()).await?;

    Ok(Json(overview))
}

pub async fn admin_used(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ProductView>>> {
    list_used_by(&state, UserRole::Admin, &params).await
}

pub async fn used_by_department(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ProductView>>> {
    list_used_by(&state, UserRole::Department, &params).await
}

pub async fn used_by_normal_user(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ProductView>>> {
    list_used_by(&state, UserRole::User, &params).await
}

pub async fn repair_status(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ProductView>>> {
    let listing = ProductListing::in_repair(pagination(&params)?);
    let page = product_queries::list_products(&state.db, &listing).await?;

    Ok(Json(page))
}

pub async fn expiring(
    State(state): State<AppState>,
    Query(params): Query<ExpiringParams>,
) -> Result<Json<Vec<ProductView>>> {
    let months = expiring_months(params.months.as_deref());
    let until = Utc::now()
        .checked_add_months(Months::new(months))
        .ok_or_else(|| AppError::InvalidArgument(format!("months out of range: {}", months)))?;

    let products = product_queries::expiring_products(&state.db, until).await?;

    Ok(Json(products))
}

async fn list_used_by(
    state: &AppState,
    role: UserRole,
    params: &PageParams,
) -> Result<Json<Page<ProductView>>> {
    let listing = ProductListing::used_by(role, pagination(params)?);
    let page = product_queries::list_products(&state.db, &listing).await?;

    Ok(Json(page))
}

fn pagination(params: &PageParams) -> Result<Pagination> {
    Pagination::from_params(params.page.as_deref(), params.page_size.as_deref())
}
