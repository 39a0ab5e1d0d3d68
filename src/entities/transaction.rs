//! Transaction entity - One entry in the accounting ledger.
//!
//! Amounts are unsigned: whether money came in or went out is carried by
//! [`TransactionKind`], never by the sign of the amount.

use super::product::required;
use crate::errors::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money received (sales)
    Income,
    /// Money paid out (supplies, wages)
    Expense,
}

/// Ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier within the ledger
    pub id: i64,
    /// Booking date
    pub date: NaiveDate,
    /// What the movement was for (e.g., "1x Shampoo pH Neutro")
    pub description: String,
    /// Amount in whole currency units
    pub amount: u64,
    /// Income or expense
    pub kind: TransactionKind,
    /// Ledger category (e.g., "Ventas", "Insumos")
    pub category: String,
}

/// A transaction that has not been booked yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTransaction {
    /// Booking date
    pub date: NaiveDate,
    /// Description
    pub description: String,
    /// Amount in whole currency units
    pub amount: u64,
    /// Income or expense
    pub kind: TransactionKind,
    /// Ledger category
    pub category: String,
}

impl Transaction {
    /// Books a pending transaction under the given id.
    ///
    /// # Errors
    /// Returns a validation error if the description or category is blank.
    pub fn book(id: i64, new: NewTransaction) -> Result<Self> {
        Ok(Self {
            id,
            date: new.date,
            description: required("Transaction description", &new.description)?,
            amount: new.amount,
            kind: new.kind,
            category: required("Transaction category", &new.category)?,
        })
    }

    /// True for money received.
    #[must_use]
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }
}
