use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Company, HistoryView, UserSummary};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub date_of_purchase: DateTime<Utc>,
    pub warranty_months: i32,
    pub manufacturer_id: Option<i32>,
    pub created_by: Option<i32>,
    pub history_ids: Vec<i32>,
    pub user_role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Who a product is in use by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Department,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Department => "department",
            UserRole::User => "user",
        }
    }
}

/// A product with its manufacturer, creator and history attached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: i32,
    pub name: String,
    pub date_of_purchase: DateTime<Utc>,
    pub warranty_months: i32,
    pub warranty_expiry_date: DateTime<Utc>,
    pub user: String,
    pub manufacturer: Option<Company>,
    pub created_by: Option<UserSummary>,
    pub history: Vec<HistoryView>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
