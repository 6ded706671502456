use std::collections::HashMap;

use crate::{
    models::{Company, History, HistoryView, Location, Product, ProductView, UserSummary},
    reports::warranty_expiry,
};

/// Related rows fetched in bulk for a batch of products, keyed by id.
#[derive(Debug, Default)]
pub struct Relations {
    pub companies: HashMap<i32, Company>,
    pub users: HashMap<i32, UserSummary>,
    pub histories: HashMap<i32, History>,
    pub locations: HashMap<i32, Location>,
}

impl Relations {
    pub fn company_ids(products: &[Product]) -> Vec<i32> {
        dedup(products.iter().filter_map(|p| p.manufacturer_id))
    }

    pub fn user_ids(products: &[Product]) -> Vec<i32> {
        dedup(products.iter().filter_map(|p| p.created_by))
    }

    pub fn history_ids(products: &[Product]) -> Vec<i32> {
        dedup(products.iter().flat_map(|p| p.history_ids.iter().copied()))
    }

    pub fn location_ids(&self) -> Vec<i32> {
        dedup(self.histories.values().filter_map(|h| h.location_id))
    }

    /// Dangling references are dropped rather than treated as errors.
    pub fn expand(&self, product: Product) -> ProductView {
        let history = product
            .history_ids
            .iter()
            .filter_map(|id| self.histories.get(id))
            .map(|history| HistoryView {
                location: history
                    .location_id
                    .and_then(|id| self.locations.get(&id))
                    .cloned(),
                history: history.clone(),
            })
            .collect();

        ProductView {
            warranty_expiry_date: warranty_expiry(product.date_of_purchase, product.warranty_months),
            manufacturer: product
                .manufacturer_id
                .and_then(|id| self.companies.get(&id))
                .cloned(),
            created_by: product.created_by.and_then(|id| self.users.get(&id)).cloned(),
            history,
            id: product.id,
            name: product.name,
            date_of_purchase: product.date_of_purchase,
            warranty_months: product.warranty_months,
            user: product.user_role,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

fn dedup(ids: impl Iterator<Item = i32>) -> Vec<i32> {
    let mut ids: Vec<i32> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}
