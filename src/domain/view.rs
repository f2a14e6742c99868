// 顯示模型：renderer 的輸出，surface 的輸入

pub const ADD_CLASSES: &[&str] = &["btn", "add-btn"];
pub const DECREMENT_CLASSES: &[&str] = &["btn", "small", "ghost", "dec"];
pub const INCREMENT_CLASSES: &[&str] = &["btn", "small"];
pub const REMOVE_CLASSES: &[&str] = &["btn", "small", "danger", "remove"];

pub const ADD_LABEL: &str = "Add to cart";
pub const DECREMENT_LABEL: &str = "−";
pub const INCREMENT_LABEL: &str = "+";
pub const REMOVE_LABEL: &str = "×";

/// A clickable element on the display surface.
///
/// Controls are identified the way the input router sees them: by class
/// names, displayed label and the product id they carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub classes: Vec<String>,
    pub label: String,
    pub product_id: Option<String>,
}

impl Control {
    pub fn new(classes: &[&str], label: &str, product_id: &str) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
            label: label.to_string(),
            product_id: Some(product_id.to_string()),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub image: String,
    pub add: Control,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductView {
    Cards(Vec<ProductCard>),
    NoMatches,
}

impl ProductView {
    pub fn cards(&self) -> &[ProductCard] {
        match self {
            ProductView::Cards(cards) => cards,
            ProductView::NoMatches => &[],
        }
    }

    /// The add control of a displayed product, if that product is visible.
    pub fn add_control(&self, product_id: &str) -> Option<&Control> {
        self.cards()
            .iter()
            .find(|card| card.id == product_id)
            .map(|card| &card.add)
    }

    pub fn first_add_control(&self) -> Option<&Control> {
        self.cards().first().map(|card| &card.add)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub qty: u32,
    pub subtotal: u64,
    pub decrement: Control,
    pub increment: Control,
    pub remove: Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowControl {
    Decrement,
    Increment,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartView {
    Empty,
    Lines { rows: Vec<CartRow>, total: u64 },
}

impl CartView {
    pub fn rows(&self) -> &[CartRow] {
        match self {
            CartView::Empty => &[],
            CartView::Lines { rows, .. } => rows,
        }
    }

    pub fn total(&self) -> u64 {
        match self {
            CartView::Empty => 0,
            CartView::Lines { total, .. } => *total,
        }
    }

    pub fn control(&self, product_id: &str, which: RowControl) -> Option<&Control> {
        let row = self.rows().iter().find(|row| row.id == product_id)?;
        Some(match which {
            RowControl::Decrement => &row.decrement,
            RowControl::Increment => &row.increment,
            RowControl::Remove => &row.remove,
        })
    }
}
