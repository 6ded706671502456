use chrono::{DateTime, Duration, Utc};

/// Warranty months are a fixed 30 days, not calendar months.
pub const DAYS_PER_WARRANTY_MONTH: i64 = 30;

pub fn warranty_expiry(date_of_purchase: DateTime<Utc>, warranty_months: i32) -> DateTime<Utc> {
    let days = i64::from(warranty_months) * DAYS_PER_WARRANTY_MONTH;

    Duration::try_days(days)
        .and_then(|span| date_of_purchase.checked_add_signed(span))
        .unwrap_or(if days < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarrantyState {
    InWarranty,
    NotInWarranty,
}

impl WarrantyState {
    /// An expiry exactly at `now` is still in warranty.
    pub fn classify(expiry: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if expiry >= now {
            WarrantyState::InWarranty
        } else {
            WarrantyState::NotInWarranty
        }
    }

    pub fn of(date_of_purchase: DateTime<Utc>, warranty_months: i32, now: DateTime<Utc>) -> Self {
        Self::classify(warranty_expiry(date_of_purchase, warranty_months), now)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WarrantyState::InWarranty => "in warranty",
            WarrantyState::NotInWarranty => "not in warranty",
        }
    }

    /// Comparison of the expiry date against the evaluation time.
    pub(crate) fn sql_comparison(&self) -> &'static str {
        match self {
            WarrantyState::InWarranty => " >= ",
            WarrantyState::NotInWarranty => " < ",
        }
    }
}
