//! Core business logic - framework-agnostic shop operations.
//!
//! Each submodule owns one collection or one derived view. None of them know
//! about each other's storage; [`crate::store::Shop`] wires them together.

/// Point-of-sale cart and checkout
pub mod cart;
/// Product catalog management
pub mod catalog;
/// Customer directory
pub mod customers;
/// Accounting ledger and totals
pub mod ledger;
/// Chat deep links and message templates
pub mod notify;
/// Dashboard cards and display formatting
pub mod report;
/// Job progress tracking
pub mod tracker;
