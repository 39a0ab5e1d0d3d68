//! Customer entity - A client of the shop and the vehicle they bring in.

use super::product::required;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Customer directory record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier within the directory
    pub id: i64,
    /// Full name
    pub name: String,
    /// Phone number as typed (e.g., "+56912345678")
    pub phone: String,
    /// Vehicle description (e.g., "Porsche 911 GT3 RS")
    pub vehicle: String,
}

/// Form data for creating or editing a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    /// Full name, required
    pub name: String,
    /// Phone number, optional
    #[serde(default)]
    pub phone: String,
    /// Vehicle description, optional
    #[serde(default)]
    pub vehicle: String,
}

impl Customer {
    /// Builds a customer from a form submission. Only the name is required.
    ///
    /// # Errors
    /// Returns a validation error if the name is blank.
    pub fn from_draft(id: i64, draft: CustomerDraft) -> Result<Self> {
        Ok(Self {
            id,
            name: required("Customer name", &draft.name)?,
            phone: draft.phone.trim().to_string(),
            vehicle: draft.vehicle.trim().to_string(),
        })
    }
}
