/// Identifier of a product, unique within a catalog.
pub type ProductId = u32;

/// Represents a purchasable product in the catalog.
///
/// Products are created once when the catalog loads and never change afterwards.
/// Cart and like state is keyed by [`Product::id`], so two records sharing an id
/// refer to the same entry even if their other fields differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image_name: String,
    pub price: u64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the catalog
    /// * `name` - Display name
    /// * `image_name` - Image reference shown next to the name
    /// * `price` - Unit price in whole currency units
    pub fn new(id: ProductId, name: impl Into<String>, image_name: impl Into<String>, price: u64) -> Self {
        Self {
            id,
            name: name.into(),
            image_name: image_name.into(),
            price,
        }
    }

    /// The built-in catalog served by [`DelayedCatalog`](crate::catalog::DelayedCatalog).
    pub fn collection() -> Vec<Product> {
        vec![
            Product::new(1, "Stroller", "stroller", 1),
            Product::new(2, "Playstation", "playstation.logo", 2),
            Product::new(3, "Ceiling fan", "fan.ceiling", 3),
            Product::new(4, "Monitor", "display", 4),
            Product::new(5, "Shirt", "tshirt", 5),
        ]
    }
}
