//! Product entity - Represents a catalog entry sold at the point of sale.
//!
//! A product is either a service performed on the vehicle (paint correction,
//! ceramic coating) or a good taken off the shelf (shampoo, merch). Services
//! require a vehicle intake before a sale containing them can close.

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Longest code accepted from a scanner or typed into the catalog.
pub const MAX_BARCODE_LEN: usize = 50;

/// Whether a catalog entry is labour or stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Work performed on the vehicle
    Service,
    /// Physical stock item
    Good,
}

/// Catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog
    pub id: i64,
    /// Display name (e.g., "Shampoo pH Neutro")
    pub name: String,
    /// Unit price in whole currency units
    pub price: u64,
    /// Catalog category used by the point-of-sale filter
    pub category: String,
    /// Icon name, opaque to this crate
    pub icon: String,
    /// Service or good
    pub kind: ProductKind,
    /// EAN-13 / UPC / QR payload, unique across the catalog when present
    pub barcode: Option<String>,
}

/// Form data for a new product, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    /// Display name
    pub name: String,
    /// Unit price in whole currency units
    pub price: u64,
    /// Catalog category
    pub category: String,
    /// Icon name
    pub icon: String,
    /// Service or good
    pub kind: ProductKind,
    /// Optional barcode
    #[serde(default)]
    pub barcode: Option<String>,
}

impl Product {
    /// Builds a product from a draft, validating every field.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if the name or category is blank or the
    /// barcode is malformed.
    pub fn from_draft(id: i64, draft: ProductDraft) -> Result<Self> {
        let name = required("Product name", &draft.name)?;
        let category = required("Product category", &draft.category)?;
        let barcode = draft.barcode.as_deref().map(normalize_barcode).transpose()?;

        Ok(Self {
            id,
            name,
            price: draft.price,
            category,
            icon: draft.icon.trim().to_string(),
            kind: draft.kind,
            barcode: barcode.flatten(),
        })
    }

    /// True for labour entries that need a vehicle intake at checkout.
    #[must_use]
    pub fn is_service(&self) -> bool {
        self.kind == ProductKind::Service
    }

    /// True if this product carries exactly the given code.
    #[must_use]
    pub fn matches_barcode(&self, code: &str) -> bool {
        self.barcode.as_deref() == Some(code)
    }
}

/// Trims a barcode and checks its shape.
///
/// An empty code means "no barcode" and yields `Ok(None)`, which is what the
/// catalog editor sends when the field is cleared.
///
/// # Errors
/// Returns [`Error::Validation`] if the code is too long or contains anything
/// other than ASCII letters and digits.
pub fn normalize_barcode(raw: &str) -> Result<Option<String>> {
    let code = raw.trim();
    if code.is_empty() {
        return Ok(None);
    }
    if code.len() > MAX_BARCODE_LEN {
        return Err(Error::validation(format!(
            "Barcode must be at most {MAX_BARCODE_LEN} characters"
        )));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::validation(format!(
            "Barcode '{code}' may only contain letters and digits"
        )));
    }
    Ok(Some(code.to_string()))
}

pub(crate) fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
