use crate::error::{AppError, Result};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    page_size: i64,
}

impl Pagination {
    pub fn new(page: i64, page_size: i64) -> Result<Self> {
        if page_size < 1 {
            return Err(AppError::InvalidArgument(
                "pageSize must be at least 1".to_string(),
            ));
        }

        if page < 1 {
            return Err(AppError::InvalidArgument(
                "page must be at least 1".to_string(),
            ));
        }

        Ok(Self { page, page_size })
    }

    /// Omitted or non-numeric values fall back to the defaults; numeric
    /// values out of range are still rejected.
    pub fn from_params(page: Option<&str>, page_size: Option<&str>) -> Result<Self> {
        Self::new(
            parse_or(page, DEFAULT_PAGE),
            parse_or(page_size, DEFAULT_PAGE_SIZE),
        )
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn page_count(&self, total_count: i64) -> i64 {
        if total_count <= 0 {
            return 0;
        }

        total_count / self.page_size + i64::from(total_count % self.page_size != 0)
    }
}

/// Months ahead for the expiring report; anything unusable means zero.
pub fn expiring_months(months: Option<&str>) -> u32 {
    months
        .and_then(|m| m.trim().parse::<i64>().ok())
        .map(|m| m.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

fn parse_or(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(default)
}
