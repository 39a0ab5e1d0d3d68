//! Barcode capture for the point of sale.
//!
//! Two detectors produce codes: a keyboard-wedge detector that recognises
//! scanner bursts by keystroke timing, and a camera detector that samples
//! frames until a symbol decodes. Both feed
//! [`Shop::add_by_barcode`](crate::store::Shop::add_by_barcode).

/// Camera frame sampling
pub mod camera;
/// Keystroke-timing detection
pub mod keystroke;

pub use camera::{CameraScanner, Frame, SymbolDecoder, VideoSource};
pub use keystroke::{Key, KeystrokeScanner};
