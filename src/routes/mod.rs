mod analytics;
mod health;
mod warranty;

use axum::{Router, routing::get};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/warranty", warranty_routes())
        .nest("/analytics", analytics_routes())
}

fn warranty_routes() -> Router<AppState> {
    Router::new()
        .route("/in-warranty", get(warranty::in_warranty))
        .route("/not-in-warranty", get(warranty::not_in_warranty))
}

fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(analytics::overview))
        .route("/in-warranty-products", get(warranty::in_warranty))
        .route("/not-in-warranty-products", get(warranty::not_in_warranty))
        .route("/admin-used", get(analytics::admin_used))
        .route("/used-by-department", get(analytics::used_by_department))
        .route("/used-by-normal-user", get(analytics::used_by_normal_user))
        .route("/repair-status", get(analytics::repair_status))
        .route("/expiring", get(analytics::expiring))
}
