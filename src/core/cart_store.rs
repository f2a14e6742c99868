use crate::core::catalog::Catalog;
use crate::core::persistence::CartPersistence;
use crate::domain::model::{CartChange, CartLine};
use crate::domain::ports::KeyValueStore;
use std::sync::Arc;

/// Owns the cart lines and mirrors every mutation to storage.
///
/// Operations never fail: unknown ids are ignored and storage write errors
/// are logged and dropped. The returned [`CartChange`] tells the caller
/// whether anything needs to be redrawn.
pub struct CartStore<K: KeyValueStore> {
    catalog: Arc<Catalog>,
    persistence: CartPersistence<K>,
    lines: Vec<CartLine>,
}

impl<K: KeyValueStore> CartStore<K> {
    /// Restore the cart from storage, starting empty when nothing usable is
    /// stored.
    pub async fn open(catalog: Arc<Catalog>, persistence: CartPersistence<K>) -> Self {
        let lines = persistence.load().await;
        tracing::info!("Loaded cart with {} line(s)", lines.len());
        Self {
            catalog,
            persistence,
            lines,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn shared_catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub async fn add_to_cart(&mut self, product_id: &str) -> CartChange {
        let Some(product) = self.catalog.find(product_id) else {
            tracing::debug!("add_to_cart: unknown product '{}'", product_id);
            return CartChange::Unchanged;
        };

        let qty = match self.lines.iter_mut().find(|line| line.id == product_id) {
            Some(line) => {
                line.qty = line.qty.saturating_add(1);
                line.qty
            }
            None => {
                self.lines.push(CartLine::from_product(product));
                1
            }
        };

        let change = CartChange::Added {
            id: product.id.clone(),
            name: product.name.clone(),
            qty,
        };
        self.persist().await;
        tracing::debug!("{:?}", change);
        change
    }

    pub async fn remove_from_cart(&mut self, product_id: &str) -> CartChange {
        let before = self.lines.len();
        self.lines.retain(|line| line.id != product_id);
        if self.lines.len() == before {
            return CartChange::Unchanged;
        }

        self.persist().await;
        tracing::debug!("Removed '{}' from cart", product_id);
        CartChange::Removed {
            id: product_id.to_string(),
        }
    }

    /// Shift a line's quantity by `delta`. Reaching zero or below removes
    /// the line.
    pub async fn change_qty(&mut self, product_id: &str, delta: i64) -> CartChange {
        let Some(line) = self.lines.iter_mut().find(|line| line.id == product_id) else {
            return CartChange::Unchanged;
        };

        let next = i64::from(line.qty).saturating_add(delta);
        if next <= 0 {
            return self.remove_from_cart(product_id).await;
        }

        let qty = u32::try_from(next).unwrap_or(u32::MAX);
        if qty == line.qty {
            return CartChange::Unchanged;
        }
        line.qty = qty;

        self.persist().await;
        tracing::debug!("Quantity of '{}' is now {}", product_id, qty);
        CartChange::QuantityChanged {
            id: product_id.to_string(),
            qty,
        }
    }

    /// Empty the cart. Callers are expected to have confirmed with the user.
    pub async fn clear_cart(&mut self) -> CartChange {
        if self.lines.is_empty() {
            return CartChange::Unchanged;
        }

        self.lines.clear();
        self.persist().await;
        tracing::debug!("Cart cleared");
        CartChange::Cleared
    }

    pub fn calculate_total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |sum, line| sum.saturating_add(line.subtotal()))
    }

    async fn persist(&self) {
        if let Err(e) = self.persistence.save(&self.lines).await {
            tracing::warn!(
                "Failed to persist cart under '{}': {}",
                self.persistence.key(),
                e
            );
        }
    }
}
