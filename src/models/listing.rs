use serde::{Deserialize, Serialize};

use crate::reports::Pagination;

/// Raw pagination parameters. Values are kept as strings so that a
/// non-numeric value falls back to its default instead of rejecting the
/// whole query string.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    #[serde(rename = "pageSize", alias = "itemsperpage")]
    pub page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExpiringParams {
    pub months: Option<String>,
}

/// One page of a filtered, sorted listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total_count: i64,
    pub pages_count: i64,
    pub current_page: i64,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total_count: i64, pagination: &Pagination) -> Self {
        Self {
            data,
            total_count,
            pages_count: pagination.page_count(total_count),
            current_page: pagination.page(),
        }
    }
}
