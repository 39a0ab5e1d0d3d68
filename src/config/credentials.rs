//! Credentials read from the environment (and `.env`, once loaded).
//!
//! Secrets never go in `config.toml`.

use crate::errors::{Error, Result};
use std::env;

/// Primary variable holding the text-generation API key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Fallback variable name.
pub const FALLBACK_API_KEY_VAR: &str = "API_KEY";

/// Reads the advisor API key, trying [`API_KEY_VAR`] then [`FALLBACK_API_KEY_VAR`].
///
/// # Errors
/// Returns [`Error::MissingApiKey`] if neither variable holds a usable key.
pub fn advisor_api_key() -> Result<String> {
    [API_KEY_VAR, FALLBACK_API_KEY_VAR]
        .into_iter()
        .filter_map(|var| env::var(var).ok())
        .find_map(|raw| clean_key(&raw))
        .ok_or(Error::MissingApiKey)
}

/// Strips whitespace and surrounding quotes; a blank result is no key at all.
#[must_use]
pub fn clean_key(raw: &str) -> Option<String> {
    let key = raw.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();
    (!key.is_empty()).then(|| key.to_string())
}
