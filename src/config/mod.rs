//! Application configuration loading from config.toml
//!
//! Every section is optional. A missing section falls back to its defaults,
//! and a missing seed list falls back to the built-in demo data, so an empty
//! file (or no file at all) yields a fully working demo shop.

/// Environment-provided credentials
pub mod credentials;
/// Demo seed data and seed record types
pub mod seed;
/// `[shop]`, `[scanner]` and `[advisor]` sections
pub mod shop;

use crate::{
    entities::{CustomerDraft, ProductDraft, ServiceHistoryItem},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

pub use seed::JobSeed;
pub use shop::{AdvisorSettings, ScannerSettings, ShopSettings};

/// Environment variable overriding the configuration file path.
pub const CONFIG_PATH_VAR: &str = "APEX_CONFIG";

/// Path used when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Shop identity
    pub shop: ShopSettings,
    /// Barcode capture timing
    pub scanner: ScannerSettings,
    /// Text-generation service
    pub advisor: AdvisorSettings,
    /// Catalog entries to seed
    pub products: Vec<ProductDraft>,
    /// Customers to seed
    pub customers: Vec<CustomerDraft>,
    /// Jobs to open at startup
    pub jobs: Vec<JobSeed>,
    /// Vehicle logbook entries
    pub logbook: Vec<ServiceHistoryItem>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shop: ShopSettings::default(),
            scanner: ScannerSettings::default(),
            advisor: AdvisorSettings::default(),
            products: seed::demo_products(),
            customers: seed::demo_customers(),
            jobs: seed::demo_jobs(),
            logbook: seed::demo_logbook(),
        }
    }
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns [`Error::Config`] if the TOML syntax is invalid or a field has the
/// wrong type.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path);
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    parse_config(&contents)
}

/// Loads configuration from `$APEX_CONFIG` or `./config.toml`.
///
/// A missing file is not an error: the built-in defaults are used instead.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_default_config() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    if !Path::new(&path).exists() {
        info!(path = %path, "No configuration file found, using built-in defaults");
        return Ok(AppConfig::default());
    }
    let config = load_config(&path)?;
    info!(
        path = %path,
        products = config.products.len(),
        customers = config.customers.len(),
        jobs = config.jobs.len(),
        "Loaded configuration"
    );
    Ok(config)
}
