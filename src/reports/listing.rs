use chrono::{DateTime, Utc};

use crate::{
    models::UserRole,
    reports::{Pagination, WarrantyState},
};

/// History status marking a product as sent for repair.
pub const REPAIR_STATUS: &str = "repair";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductFilter {
    Warranty {
        state: WarrantyState,
        now: DateTime<Utc>,
    },
    UsedBy(UserRole),
    /// At least one history entry carries [`REPAIR_STATUS`].
    InRepair,
}

/// Everything needed to run one paginated product listing: which products,
/// which page. Results are always ordered newest purchase first with ties
/// broken by ascending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductListing {
    filter: ProductFilter,
    pagination: Pagination,
}

impl ProductListing {
    pub fn new(filter: ProductFilter, pagination: Pagination) -> Self {
        Self { filter, pagination }
    }

    pub fn warranty(state: WarrantyState, now: DateTime<Utc>, pagination: Pagination) -> Self {
        Self::new(ProductFilter::Warranty { state, now }, pagination)
    }

    pub fn used_by(role: UserRole, pagination: Pagination) -> Self {
        Self::new(ProductFilter::UsedBy(role), pagination)
    }

    pub fn in_repair(pagination: Pagination) -> Self {
        Self::new(ProductFilter::InRepair, pagination)
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_pick_filters() {
        let pagination = Pagination::new(1, 10).unwrap();

        assert_eq!(
            ProductListing::used_by(UserRole::Department, pagination).filter(),
            &ProductFilter::UsedBy(UserRole::Department)
        );
        assert_eq!(
            ProductListing::in_repair(pagination).filter(),
            &ProductFilter::InRepair
        );
    }
}
