use serde::{Deserialize, Serialize};

/// A purchasable catalog entry. Owned by the catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub image: String,
}

impl Product {
    pub fn new(id: &str, name: &str, price: u64, image: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            image: image.to_string(),
        }
    }
}

/// One product's entry in the cart.
///
/// `name` and `price` are copied from the catalog when the line is created,
/// so later catalog changes leave existing lines alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub qty: u32,
}

impl CartLine {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            qty: 1,
        }
    }

    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.qty))
    }
}

/// What a cart operation did. `Unchanged` means nothing was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    Unchanged,
    Added { id: String, name: String, qty: u32 },
    QuantityChanged { id: String, qty: u32 },
    Removed { id: String },
    Cleared,
}

impl CartChange {
    pub fn is_changed(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}
