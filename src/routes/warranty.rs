use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Utc;

use crate::{
    AppState,
    error::Result,
    models::{Page, PageParams, ProductView},
    queries::product_queries,
    reports::{Pagination, ProductListing, WarrantyState},
};

pub async fn in_warranty(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ProductView>>> {
    list_by_warranty_state(&state, WarrantyState::InWarranty, &params).await
}

pub async fn not_in_warranty(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ProductView>>> {
    list_by_warranty_state(&state, WarrantyState::NotInWarranty, &params).await
}

async fn list_by_warranty_state(
    state: &AppState,
    warranty_state: WarrantyState,
    params: &PageParams,
) -> Result<Json<Page<ProductView>>> {
    let pagination = Pagination::from_params(params.page.as_deref(), params.page_size.as_deref())?;
    let listing = ProductListing::warranty(warranty_state, Utc::now(), pagination);

    let page = product_queries::list_products(&state.db, &listing).await?;

    Ok(Json(page))
}
