//! Headless table binder: the render model a product table keeps in sync
//! with the view model, plus the translation of row gestures into intents.

use crate::domain::{Product, ViewState};
use crate::shop_actor::{Intent, ViewEvent};

/// What a single table row displays.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub name: String,
    pub image_name: String,
    pub price: u64,
    pub quantity: u32,
    pub is_liked: bool,
}

/// Gestures a product row can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowGesture {
    QuantityDidChange(u32),
    HeartDidTap,
}

/// Mirrors the last catalog and view state received from the view model.
#[derive(Debug, Default)]
pub struct TableBinder {
    products: Vec<Product>,
    state: ViewState,
}

impl TableBinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::CatalogLoaded { products } => self.products = products,
            ViewEvent::ViewStateUpdated(state) => self.state = state,
        }
    }

    pub fn row_count(&self) -> usize {
        self.products.len()
    }

    pub fn row(&self, index: usize) -> Option<ProductRow> {
        let product = self.products.get(index)?;
        Some(ProductRow {
            name: product.name.clone(),
            image_name: product.image_name.clone(),
            price: product.price,
            quantity: self.state.quantity_of(product.id),
            is_liked: self.state.is_liked(product.id),
        })
    }

    pub fn header_title(&self) -> String {
        format!("Number of items: {}", self.state.item_count)
    }

    pub fn footer_title(&self) -> String {
        format!("Total cost: ${}", self.state.total_cost)
    }

    /// The intent for a gesture on row `index`, or `None` if there is no such row.
    pub fn intent_for(&self, index: usize, gesture: RowGesture) -> Option<Intent> {
        let product = self.products.get(index)?.clone();
        Some(match gesture {
            RowGesture::QuantityDidChange(quantity) => Intent::QuantityChanged { product, quantity },
            RowGesture::HeartDidTap => Intent::LikeToggled { product },
        })
    }

    pub fn reset_tapped(&self) -> Intent {
        Intent::ResetRequested
    }

    /// Header, one line per row, footer.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.row_count() + 2);
        lines.push(self.header_title());
        lines.extend((0..self.row_count()).filter_map(|index| self.row(index)).map(|row| {
            format!(
                "{} {} [{}] ${} x{}",
                if row.is_liked { "♥" } else { "♡" },
                row.name,
                row.image_name,
                row.price,
                row.quantity,
            )
        }));
        lines.push(self.footer_title());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};
    use crate::mock_framework::fruit_catalog;

    fn loaded_binder() -> TableBinder {
        let mut binder = TableBinder::new();
        binder.apply(ViewEvent::CatalogLoaded { products: fruit_catalog() });
        binder.apply(ViewEvent::ViewStateUpdated(ViewState::default()));
        binder
    }

    #[test]
    fn test_empty_binder_has_no_rows() {
        let binder = TableBinder::new();
        assert_eq!(binder.row_count(), 0);
        assert_eq!(binder.row(0), None);
        assert_eq!(binder.header_title(), "Number of items: 0");
        assert_eq!(binder.footer_title(), "Total cost: $0");
    }

    #[test]
    fn test_rows_reflect_view_state() {
        let mut binder = loaded_binder();
        binder.apply(ViewEvent::ViewStateUpdated(ViewState {
            item_count: 4,
            total_cost: 60,
            liked_ids: HashSet::from([2]),
            quantity_by_product_id: HashMap::from([(1, 2), (2, 2)]),
        }));

        assert_eq!(binder.row_count(), 2);
        assert_eq!(
            binder.row(1),
            Some(ProductRow {
                name: "Orange".to_string(),
                image_name: "orange.fill".to_string(),
                price: 20,
                quantity: 2,
                is_liked: true,
            })
        );
        assert!(!binder.row(0).unwrap().is_liked);
        assert_eq!(binder.header_title(), "Number of items: 4");
        assert_eq!(binder.footer_title(), "Total cost: $60");
    }

    #[test]
    fn test_gestures_map_to_intents() {
        let binder = loaded_binder();
        let apple = fruit_catalog()[0].clone();

        assert_eq!(
            binder.intent_for(0, RowGesture::QuantityDidChange(3)),
            Some(Intent::QuantityChanged { product: apple.clone(), quantity: 3 })
        );
        assert_eq!(
            binder.intent_for(0, RowGesture::HeartDidTap),
            Some(Intent::LikeToggled { product: apple })
        );
        assert_eq!(binder.intent_for(7, RowGesture::HeartDidTap), None);
        assert_eq!(binder.reset_tapped(), Intent::ResetRequested);
    }

    #[test]
    fn test_render_lists_header_rows_footer() {
        let binder = loaded_binder();
        let lines = binder.render();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Number of items: 0");
        assert_eq!(lines[1], "♡ Apple [apple.fill] $10 x0");
        assert_eq!(lines[3], "Total cost: $0");
    }
}
