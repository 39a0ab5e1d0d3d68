//! `apex_garage` - shop-management core for a vehicle detailing studio
//!
//! This crate keeps the whole shop in memory: the job board with per-step
//! progress, the point-of-sale cart with barcode capture, the accounting
//! ledger, the customer directory and catalog, and an AI advisory chat.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,

    // Clippy categories for overall code quality
    clippy::all,
    clippy::pedantic,
    clippy::nursery,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::needless_pass_by_value,
    clippy::unnecessary_wraps,

    // Correctness
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Complexity and readability
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::too_many_lines,

    // Style consistency
    clippy::enum_glob_use,
    clippy::inconsistent_struct_constructor,
    clippy::must_use_candidate,
    clippy::redundant_closure_for_method_calls,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_panics_doc,
)]

/// AI advisory chat and the text-generation client
pub mod advisor;
/// Configuration loading, shop settings and demo seeds
pub mod config;
/// Core business logic - framework-agnostic tracker, cart, ledger, catalog and reporting
pub mod core;
/// Record types for products, customers, jobs and transactions
pub mod entities;
/// Unified error types and result handling
pub mod errors;
/// Keyboard-wedge and camera barcode capture
pub mod scanner;
/// The shop store owning every collection
pub mod store;

#[cfg(test)]
pub mod test_utils;
