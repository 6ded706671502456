//! Pure report logic: warranty arithmetic, pagination and the listing
//! descriptions that `queries` turns into SQL.

mod expansion;
mod listing;
mod pagination;
mod warranty;

pub use expansion::Relations;
pub use listing::{ProductFilter, ProductListing, REPAIR_STATUS};
pub use pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, Pagination, expiring_months};
pub use warranty::{DAYS_PER_WARRANTY_MONTH, WarrantyState, warranty_expiry};
