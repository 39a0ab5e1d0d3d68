//! Entity module - Canonical record types for the shop.
//!
//! Every record is a plain serde struct validated at construction. Ids are
//! assigned by the owning collection in [`crate::core`].

pub mod customer;
pub mod intake;
pub mod job;
pub mod logbook;
pub mod product;
pub mod transaction;

pub use customer::{Customer, CustomerDraft};
pub use intake::VehicleIntake;
pub use job::{Job, JobStep, StepDraft};
pub use logbook::ServiceHistoryItem;
pub use product::{Product, ProductDraft, ProductKind};
pub use transaction::{NewTransaction, Transaction, TransactionKind};
