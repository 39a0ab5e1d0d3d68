//! Point-of-sale cart.
//!
//! The cart accumulates catalog products with quantities and turns into one
//! income transaction at checkout. A cart holding at least one service cannot
//! close until a vehicle intake sheet has been completed; a goods-only cart
//! closes immediately.

use crate::{
    entities::{NewTransaction, Product, TransactionKind, VehicleIntake},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use tracing::{debug, info};

/// Ledger category for point-of-sale income.
pub const SALES_CATEGORY: &str = "Ventas";

/// One product and how many of it are being sold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Snapshot of the product at the time it was added
    pub product: Product,
    /// Always at least 1 while the line is in the cart
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// A closed sale, ready to be booked in the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    /// The lines that were sold
    pub lines: Vec<CartLine>,
    /// Intake sheet, present when the sale contained services
    pub intake: Option<VehicleIntake>,
    /// Income transaction summarising the sale
    pub transaction: NewTransaction,
}

/// Result of asking the cart to close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to sell; nothing happened
    EmptyCart,
    /// The cart holds services; an intake sheet must be submitted first
    IntakeRequired,
    /// The sale closed and the cart was cleared
    Completed(Sale),
}

/// The in-progress sale.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    awaiting_intake: bool,
}

impl Cart {
    /// Lines in the order products were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// True when the cart holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantity of a product currently in the cart (0 if absent).
    #[must_use]
    pub fn quantity_of(&self, product_id: i64) -> u32 {
        self.lines
            .iter()
            .find(|l| l.product.id == product_id)
            .map_or(0, |l| l.quantity)
    }

    /// True if any line is a service.
    #[must_use]
    pub fn has_services(&self) -> bool {
        self.lines.iter().any(|l| l.product.is_service())
    }

    /// True while the intake sheet is open.
    #[must_use]
    pub const fn awaiting_intake(&self) -> bool {
        self.awaiting_intake
    }

    /// Adds one unit of a product, appending a new line if it is not in the cart yet.
    pub fn add_to_cart(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(product_id = product.id, quantity = line.quantity, "Incremented cart line");
            return;
        }
        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        debug!(product_id = product.id, "Added cart line");
    }

    /// Adds `delta` to a line's quantity; a line that drops to zero or below is removed.
    ///
    /// Unknown products are ignored.
    pub fn update_quantity(&mut self, product_id: i64, delta: i64) {
        let Some(index) = self.lines.iter().position(|l| l.product.id == product_id) else {
            return;
        };
        let new_quantity = i64::from(self.lines[index].quantity).saturating_add(delta);
        if new_quantity <= 0 {
            let removed = self.lines.remove(index);
            debug!(product_id = removed.product.id, "Removed cart line");
        } else {
            self.lines[index].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        }
    }

    /// Sum of unit price times quantity over all lines.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(0, u64::saturating_add)
    }

    /// Tries to close the sale.
    ///
    /// Returns [`CheckoutOutcome::IntakeRequired`] and keeps the cart if it
    /// holds a service; call [`Cart::submit_intake`] to finish.
    pub fn checkout(&mut self, date: NaiveDate) -> CheckoutOutcome {
        if self.lines.is_empty() {
            return CheckoutOutcome::EmptyCart;
        }
        if self.has_services() {
            self.awaiting_intake = true;
            debug!(lines = self.lines.len(), "Checkout waiting for vehicle intake");
            return CheckoutOutcome::IntakeRequired;
        }
        CheckoutOutcome::Completed(self.finalize(None, date))
    }

    /// Completes the intake sheet and closes the sale.
    ///
    /// # Errors
    /// Returns a validation error, leaving the cart untouched, if no intake
    /// sheet is open or the sheet has no plate.
    pub fn submit_intake(&mut self, intake: VehicleIntake, date: NaiveDate) -> Result<CheckoutOutcome> {
        if !self.awaiting_intake {
            return Err(Error::validation("No intake sheet is open; check out first"));
        }
        if !intake.is_complete() {
            return Err(Error::validation("Vehicle plate is required"));
        }
        if self.lines.is_empty() {
            self.awaiting_intake = false;
            return Ok(CheckoutOutcome::EmptyCart);
        }
        Ok(CheckoutOutcome::Completed(self.finalize(Some(intake), date)))
    }

    /// Closes the intake sheet without selling; the cart keeps its lines.
    pub fn cancel_intake(&mut self) {
        self.awaiting_intake = false;
    }

    fn finalize(&mut self, intake: Option<VehicleIntake>, date: NaiveDate) -> Sale {
        let transaction = NewTransaction {
            date,
            description: describe_lines(&self.lines),
            amount: self.total(),
            kind: TransactionKind::Income,
            category: SALES_CATEGORY.to_string(),
        };
        info!(
            amount = transaction.amount,
            lines = self.lines.len(),
            with_intake = intake.is_some(),
            "Sale closed"
        );
        self.awaiting_intake = false;
        Sale {
            lines: std::mem::take(&mut self.lines),
            intake,
            transaction,
        }
    }
}

/// "2x Cera, 1x Shampoo" style summary used as the ledger description.
#[must_use]
pub fn describe_lines(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(|l| format!("{}x {}", l.quantity, l.product.name))
        .collect::<Vec<_>>()
        .join(", ")
}
