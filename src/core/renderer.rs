//! Pure projections from state to the display model.
//!
//! Nothing here touches a surface; the views are rebuilt from scratch on
//! every call.

use crate::core::catalog::Catalog;
use crate::domain::model::{CartLine, Product};
use crate::domain::view::{
    CartRow, CartView, Control, ProductCard, ProductView, ADD_CLASSES, ADD_LABEL,
    DECREMENT_CLASSES, DECREMENT_LABEL, INCREMENT_CLASSES, INCREMENT_LABEL, REMOVE_CLASSES,
    REMOVE_LABEL,
};

/// A product matches when its name contains `filter` as typed, or when the
/// lowercased name contains the lowercased filter.
pub fn matches_filter(product: &Product, filter: &str) -> bool {
    product.name.contains(filter) || product.name.to_lowercase().contains(&filter.to_lowercase())
}

pub fn render_products(catalog: &Catalog, filter: &str) -> ProductView {
    let cards: Vec<ProductCard> = catalog
        .products()
        .iter()
        .filter(|p| matches_filter(p, filter))
        .map(|p| ProductCard {
            id: p.id.clone(),
            name: p.name.clone(),
            price: p.price,
            image: p.image.clone(),
            add: Control::new(ADD_CLASSES, ADD_LABEL, &p.id),
        })
        .collect();

    if cards.is_empty() {
        ProductView::NoMatches
    } else {
        ProductView::Cards(cards)
    }
}

pub fn render_cart(lines: &[CartLine], total: u64) -> CartView {
    if lines.is_empty() {
        return CartView::Empty;
    }

    let rows = lines
        .iter()
        .map(|line| CartRow {
            id: line.id.clone(),
            name: line.name.clone(),
            price: line.price,
            qty: line.qty,
            subtotal: line.subtotal(),
            decrement: Control::new(DECREMENT_CLASSES, DECREMENT_LABEL, &line.id),
            increment: Control::new(INCREMENT_CLASSES, INCREMENT_LABEL, &line.id),
            remove: Control::new(REMOVE_CLASSES, REMOVE_LABEL, &line.id),
        })
        .collect();

    CartView::Lines { rows, total }
}
