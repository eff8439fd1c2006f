use std::collections::{HashMap, HashSet};
use super::ProductId;

/// Snapshot of the aggregates a view renders.
///
/// Always derived from the cart and likes at emission time, never stored on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Sum of all quantities in the cart.
    pub item_count: u64,
    /// Sum of quantity × price over the cart.
    pub total_cost: u64,
    pub liked_ids: HashSet<ProductId>,
    pub quantity_by_product_id: HashMap<ProductId, u32>,
}

impl ViewState {
    /// Quantity shown for a product row, zero when it is not in the cart.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.quantity_by_product_id.get(&id).copied().unwrap_or(0)
    }

    pub fn is_liked(&self, id: ProductId) -> bool {
        self.liked_ids.contains(&id)
    }
}
