//! Shop-wide settings from the `[shop]`, `[scanner]` and `[advisor]` sections.

use serde::Deserialize;
use std::time::Duration;

/// Identity and outward-facing settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShopSettings {
    /// Name used in customer messages
    pub name: String,
    /// Host of the chat deep-link service
    pub messaging_host: String,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            name: "Apex Garage".to_string(),
            messaging_host: "wa.me".to_string(),
        }
    }
}

/// Barcode capture timing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScannerSettings {
    /// Longest gap between keystrokes still attributed to a scanner
    pub keystroke_threshold_ms: u64,
    /// Delay between camera frame samples
    pub camera_interval_ms: u64,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            keystroke_threshold_ms: 50,
            camera_interval_ms: 250,
        }
    }
}

impl ScannerSettings {
    /// Keystroke threshold as a [`Duration`].
    #[must_use]
    pub const fn keystroke_threshold(&self) -> Duration {
        Duration::from_millis(self.keystroke_threshold_ms)
    }

    /// Camera sampling interval as a [`Duration`]; never zero.
    #[must_use]
    pub fn camera_interval(&self) -> Duration {
        Duration::from_millis(self.camera_interval_ms.max(1))
    }
}

/// Text-generation service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AdvisorSettings {
    /// Model identifier
    pub model: String,
    /// API base URL, without the `/models/...` suffix
    pub endpoint: String,
    /// System instruction sent with every request
    pub persona: String,
    /// First advisor message of every transcript
    pub greeting: String,
    /// Request timeout
    pub timeout_secs: u64,
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            model: "gemini-3-flash-preview".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            persona: "Eres un asesor experto de Apex Detailing, un estudio boutique de detallado \
                      automotriz especializado en corrección de pintura, recubrimientos cerámicos y \
                      protección de autos de lujo. Responde en español latino, con un tono \
                      sofisticado, técnico y enfocado en la perfección estética y preservación del \
                      valor del vehículo."
                .to_string(),
            greeting: "Hola, soy tu Asesor Virtual de Apex Garage. ¿En qué puedo ayudarte hoy con tu Porsche?"
                .to_string(),
            timeout_secs: 30,
        }
    }
}

impl AdvisorSettings {
    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
