//! Customer messaging - prefilled chat deep links.
//!
//! The shop never sends messages itself. It builds a link that opens the
//! customer's conversation with the text already typed in.

use crate::{
    entities::Customer,
    errors::{Error, Result},
};
use reqwest::Url;

/// Keeps only the digits of a phone number: "+56 9 1234-5678" becomes "56912345678".
#[must_use]
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Builds `https://<host>/<digits>?text=<message>` with the message URL-encoded.
///
/// # Errors
/// Returns [`Error::Validation`] if the phone has no digits and
/// [`Error::Config`] if the host does not form a valid URL.
pub fn deep_link(host: &str, phone: &str, message: &str) -> Result<String> {
    let digits = normalize_phone(phone);
    if digits.is_empty() {
        return Err(Error::validation("Phone number has no digits"));
    }
    let base = format!("https://{}/{digits}", host.trim().trim_end_matches('/'));
    let url = Url::parse_with_params(&base, &[("text", message)]).map_err(|e| Error::Config {
        message: format!("Invalid messaging host '{host}': {e}"),
    })?;
    Ok(url.into())
}

/// First-contact greeting from the customer directory.
#[must_use]
pub fn contact_message(shop_name: &str, customer: &Customer) -> String {
    format!("¡Hola {}! Te contactamos de *{shop_name}*.", customer.name)
}

/// Status update sent from the job tracker.
///
/// A finished job gets the "ready" wording; anything else reports the percentage.
#[must_use]
pub fn progress_message(shop_name: &str, customer: &Customer, progress: Option<u8>) -> String {
    let status = match progress {
        Some(100) => "*listo y en condiciones impecables*".to_string(),
        other => format!("en un *{}%* de avance", other.unwrap_or(0)),
    };
    format!(
        "¡Hola {}! Te hablamos de *{shop_name}*. 🏁\n\nTe informamos que tu *{}* ya se encuentra {status}. ✨\n\n¡Seguimos trabajando para la perfección!",
        customer.name, customer.vehicle
    )
}

/// Quick update sent from a dashboard card; always reports the percentage.
#[must_use]
pub fn dashboard_message(shop_name: &str, customer: &Customer, progress: Option<u8>) -> String {
    format!(
        "¡Hola {}! Te contactamos de *{shop_name}*. Te informamos que tu *{}* ya lleva un *{}%* de avance en su servicio actual. 🏁",
        customer.name,
        customer.vehicle,
        progress.unwrap_or(0)
    )
}
