//! Catalog business logic - the services and goods the shop sells.
//!
//! This module owns the product list, assigns ids to new entries, keeps
//! barcodes unique, and answers the lookups the point of sale needs (by id,
//! by barcode, by category). Deleting a product requires an explicit
//! confirmation from the caller.

use crate::{
    entities::{
        Product, ProductDraft, ProductKind,
        product::{normalize_barcode, required},
    },
    errors::{Error, Result},
};
use tracing::{debug, info};

/// Pseudo-category that selects every product in the point-of-sale filter.
pub const ALL_CATEGORIES: &str = "Todos";

/// Categories offered by the catalog editor.
pub const EDITABLE_CATEGORIES: [&str; 5] = ["Estética", "Protección", "Interior", "Insumos", "Merch"];

/// Partial edit of a catalog entry. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductEdit {
    /// New display name
    pub name: Option<String>,
    /// New unit price
    pub price: Option<u64>,
    /// New category
    pub category: Option<String>,
    /// New kind
    pub kind: Option<ProductKind>,
    /// New barcode; `Some("")` clears it
    pub barcode: Option<String>,
}

/// The shop's product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    next_id: i64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }
}

impl Catalog {
    /// Builds a catalog from existing products.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateBarcode`] if two products share a barcode.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        for (i, product) in products.iter().enumerate() {
            if let Some(code) = &product.barcode {
                if products[..i].iter().any(|p| p.matches_barcode(code)) {
                    return Err(Error::DuplicateBarcode {
                        barcode: code.clone(),
                    });
                }
            }
        }
        let next_id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        Ok(Self { products, next_id })
    }

    /// Every product, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks a product up by id.
    #[must_use]
    pub fn get(&self, product_id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Looks a product up by scanned code. Surrounding whitespace is ignored.
    #[must_use]
    pub fn find_by_barcode(&self, code: &str) -> Option<&Product> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.products.iter().find(|p| p.matches_barcode(code))
    }

    /// Adds a product built from a form submission.
    ///
    /// # Errors
    /// Returns a validation error for malformed fields or a category outside
    /// [`EDITABLE_CATEGORIES`], and [`Error::DuplicateBarcode`] if the
    /// barcode is already taken.
    pub fn create(&mut self, draft: ProductDraft) -> Result<&Product> {
        let product = Product::from_draft(self.next_id, draft)?;
        ensure_editable_category(&product.category)?;
        self.ensure_barcode_free(product.barcode.as_deref(), None)?;
        self.next_id += 1;
        info!(product_id = product.id, name = %product.name, "Added product to catalog");
        self.products.push(product);
        Ok(&self.products[self.products.len() - 1])
    }

    /// Applies a partial edit to an existing product.
    ///
    /// # Arguments
    /// * `product_id` - Id of the product to edit
    /// * `edit` - Fields to replace; `None` keeps the current value
    ///
    /// # Returns
    /// * `Ok(Some(&Product))` - The product after the edit
    /// * `Ok(None)` - No product has this id
    ///
    /// # Errors
    /// Returns a validation error for a blank name, a category outside
    /// [`EDITABLE_CATEGORIES`] or a malformed barcode, and
    /// [`Error::DuplicateBarcode`] for a taken barcode. On error the product
    /// is left unchanged.
    pub fn update(&mut self, product_id: i64, edit: ProductEdit) -> Result<Option<&Product>> {
        let Some(index) = self.products.iter().position(|p| p.id == product_id) else {
            return Ok(None);
        };

        let mut updated = self.products[index].clone();
        if let Some(name) = edit.name {
            updated.name = required("Product name", &name)?;
        }
        if let Some(price) = edit.price {
            updated.price = price;
        }
        if let Some(category) = edit.category {
            updated.category = required("Product category", &category)?;
            ensure_editable_category(&updated.category)?;
        }
        if let Some(kind) = edit.kind {
            updated.kind = kind;
        }
        if let Some(barcode) = edit.barcode {
            updated.barcode = normalize_barcode(&barcode)?;
        }
        self.ensure_barcode_free(updated.barcode.as_deref(), Some(product_id))?;

        debug!(product_id, "Updated product");
        self.products[index] = updated;
        Ok(Some(&self.products[index]))
    }

    /// Removes a product once `confirm` approves it.
    ///
    /// Returns the removed product, or `None` if it does not exist or the
    /// confirmation was declined.
    pub fn delete(&mut self, product_id: i64, confirm: impl FnOnce(&Product) -> bool) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == product_id)?;
        if !confirm(&self.products[index]) {
            debug!(product_id, "Product deletion declined");
            return None;
        }
        let removed = self.products.remove(index);
        info!(product_id, name = %removed.name, "Removed product from catalog");
        Some(removed)
    }

    /// "Todos" followed by each distinct category in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Products in a category; [`ALL_CATEGORIES`] selects everything.
    #[must_use]
    pub fn filter(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category == category)
            .collect()
    }

    fn ensure_barcode_free(&self, barcode: Option<&str>, except: Option<i64>) -> Result<()> {
        let Some(code) = barcode else {
            return Ok(());
        };
        let taken = self
            .products
            .iter()
            .any(|p| Some(p.id) != except && p.matches_barcode(code));
        if taken {
            return Err(Error::DuplicateBarcode {
                barcode: code.to_string(),
            });
        }
        Ok(())
    }
}

fn ensure_editable_category(category: &str) -> Result<()> {
    if EDITABLE_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(Error::validation(format!("Unknown product category '{category}'")))
    }
}
