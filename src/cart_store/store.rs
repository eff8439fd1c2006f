use std::collections::{HashMap, HashSet};
use crate::domain::{Product, ProductId, ViewState};

/// A product in the cart together with its quantity.
///
/// Keeps the most recently supplied record so the price is at hand for the total.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// Holds the cart and the likes, keyed by product id.
///
/// Every derivation is recomputed from these two maps on read; nothing is cached.
#[derive(Debug, Default)]
pub struct CartStore {
    cart: HashMap<ProductId, CartLine>,
    likes: HashMap<ProductId, Product>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity for a product, replacing any previous value.
    ///
    /// A quantity of zero removes the line, so zero and absent never diverge.
    pub fn set_quantity(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            self.cart.remove(&product.id);
        } else {
            self.cart.insert(product.id, CartLine { product, quantity });
        }
    }

    /// Flips the liked flag. Returns the new state: `true` if the product is now liked.
    pub fn toggle_like(&mut self, product: Product) -> bool {
        if self.likes.remove(&product.id).is_some() {
            false
        } else {
            self.likes.insert(product.id, product);
            true
        }
    }

    /// Clears the cart and the likes.
    pub fn reset(&mut self) {
        self.cart.clear();
        self.likes.clear();
    }

    pub fn item_count(&self) -> u64 {
        self.cart
            .values()
            .fold(0u64, |acc, line| acc.saturating_add(u64::from(line.quantity)))
    }

    pub fn total_cost(&self) -> u64 {
        self.cart.values().fold(0u64, |acc, line| {
            acc.saturating_add(u64::from(line.quantity).saturating_mul(line.product.price))
        })
    }

    pub fn liked_ids(&self) -> HashSet<ProductId> {
        self.likes.keys().copied().collect()
    }

    pub fn quantity_by_product_id(&self) -> HashMap<ProductId, u32> {
        self.cart.iter().map(|(id, line)| (*id, line.quantity)).collect()
    }

    /// All four aggregates in one snapshot.
    pub fn view_state(&self) -> ViewState {
        ViewState {
            item_count: self.item_count(),
            total_cost: self.total_cost(),
            liked_ids: self.liked_ids(),
            quantity_by_product_id: self.quantity_by_product_id(),
        }
    }

    /// Name and quantity of each cart line, ordered by product id.
    pub fn cart_lines(&self) -> Vec<(String, u32)> {
        let mut lines: Vec<_> = self.cart.values().collect();
        lines.sort_by_key(|line| line.product.id);
        lines
            .into_iter()
            .map(|line| (line.product.name.clone(), line.quantity))
            .collect()
    }

    /// Names of the liked products, ordered by product id.
    pub fn liked_names(&self) -> Vec<String> {
        let mut liked: Vec<_> = self.likes.values().collect();
        liked.sort_by_key(|product| product.id);
        liked.into_iter().map(|product| product.name.clone()).collect()
    }
}
