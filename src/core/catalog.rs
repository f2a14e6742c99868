use crate::domain::model::Product;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::collections::HashSet;

/// Immutable, ordered list of products available for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and malformed entries.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let catalog = Self { products };
        catalog.validate()?;
        Ok(catalog)
    }

    /// 內建商品清單
    pub fn builtin() -> Self {
        Self {
            products: vec![
                Product::new(
                    "p1",
                    "Women's Kurti",
                    2500,
                    "https://i.pinimg.com/736x/42/15/a1/4215a1617aeb13810d9f718c574d6abd.jpg",
                ),
                Product::new(
                    "p2",
                    "Linen Shirt",
                    1200,
                    "https://i.pinimg.com/1200x/9f/14/cc/9f14ccf653217510238ed7af0027fba6.jpg",
                ),
                Product::new(
                    "p3",
                    "Sport Boots",
                    3400,
                    "https://i.pinimg.com/1200x/59/68/fd/5968fd7f08bce23e124a222bf922f606.jpg",
                ),
                Product::new(
                    "p4",
                    "Handbag",
                    1800,
                    "https://i.pinimg.com/1200x/75/b0/49/75b049d4fa1478153d21d7b0ce1ac916.jpg",
                ),
                Product::new(
                    "p5",
                    "Sunglasses",
                    800,
                    "https://i.pinimg.com/1200x/d3/36/e8/d336e8b01c8ba25fc076d7a476b58290.jpg",
                ),
            ],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for product in &self.products {
            validate_non_empty_string("catalog.id", &product.id)?;
            validate_non_empty_string("catalog.name", &product.name)?;
            validate_url("catalog.image", &product.image)?;

            if !seen.insert(product.id.as_str()) {
                return Err(CartError::InvalidConfigValueError {
                    field: "catalog.id".to_string(),
                    value: product.id.clone(),
                    reason: "Product ids must be unique".to_string(),
                });
            }
        }

        Ok(())
    }
}
