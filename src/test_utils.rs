//! Shared test utilities for Apex Garage.
//!
//! This module provides fixture builders for entities and collections with
//! sensible defaults, plus a fully seeded shop for scenario tests.
#![allow(clippy::unwrap_used)]

use crate::{
    config::{AppConfig, seed},
    core::catalog::Catalog,
    entities::{
        CustomerDraft, Job, JobStep, NewTransaction, Product, ProductDraft, ProductKind,
        TransactionKind,
    },
    store::Shop,
};
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

/// Fixed booking date used across tests.
#[must_use]
pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, 12).unwrap()
}

/// Creates a job whose steps are numbered from 1 with the given completion flags.
///
/// # Defaults
/// * `customer_id`: 0 (no such customer)
/// * `bay`: "Bahía 1"
#[must_use]
pub fn job_with_steps(id: i64, completed: &[bool]) -> Job {
    Job {
        id,
        customer_id: 0,
        bay: "Bahía 1".to_string(),
        steps: completed
            .iter()
            .zip(1_i64..)
            .map(|(&completed, step_id)| JobStep {
                id: step_id,
                name: format!("Paso {step_id}"),
                description: String::new(),
                completed,
                icon: String::new(),
            })
            .collect(),
    }
}

/// Creates a good (shelf item) with the given id, name and price.
#[must_use]
pub fn good(id: i64, name: &str, price: u64) -> Product {
    Product::from_draft(id, good_draft(name, price, None)).unwrap()
}

/// Creates a service (labour entry) with the given id, name and price.
#[must_use]
pub fn service(id: i64, name: &str, price: u64) -> Product {
    let draft = ProductDraft {
        category: "Protección".to_string(),
        icon: "shield".to_string(),
        kind: ProductKind::Service,
        ..good_draft(name, price, None)
    };
    Product::from_draft(id, draft).unwrap()
}

/// Form data for a good in the "Insumos" category.
#[must_use]
pub fn good_draft(name: &str, price: u64, barcode: Option<&str>) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        price,
        category: "Insumos".to_string(),
        icon: "water_drop".to_string(),
        kind: ProductKind::Good,
        barcode: barcode.map(str::to_string),
    }
}

/// Form data for a customer without a vehicle on file.
#[must_use]
pub fn customer_draft(name: &str, phone: &str) -> CustomerDraft {
    CustomerDraft {
        name: name.to_string(),
        phone: phone.to_string(),
        vehicle: String::new(),
    }
}

/// A pending income transaction in the sales category.
#[must_use]
pub fn income(description: &str, amount: u64) -> NewTransaction {
    NewTransaction {
        date: test_date(),
        description: description.to_string(),
        amount,
        kind: TransactionKind::Income,
        category: "Ventas".to_string(),
    }
}

/// The seeded catalog, including "Shampoo pH Neutro" with barcode `78000000001`.
#[must_use]
pub fn demo_catalog() -> Catalog {
    let mut catalog = Catalog::default();
    for draft in seed::demo_products() {
        catalog.create(draft).unwrap();
    }
    catalog
}

/// A shop seeded from the built-in demo configuration.
#[must_use]
pub fn demo_shop() -> Shop {
    Shop::from_config(&AppConfig::default()).unwrap()
}
