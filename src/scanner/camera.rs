//! Camera barcode detection.
//!
//! Frames are sampled from an acquired video source at a fixed interval and
//! handed to a symbol decoder. Sampling stops on the first decoded symbol or
//! when the cancellation token fires. The source is released on every exit
//! path, including the scan future being dropped.

use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

/// One captured image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Raw pixel data, layout defined by the source
    pub data: Vec<u8>,
}

/// An opened camera (or any other frame producer).
pub trait VideoSource: Send {
    /// Grabs the current frame, or `None` if none is ready yet.
    fn capture(&mut self) -> Option<Frame>;

    /// Stops the stream and frees the device.
    fn release(&mut self);
}

/// Turns a frame into the payload of a barcode or QR code found in it.
pub trait SymbolDecoder: Send + Sync {
    /// Decodes the first symbol in the frame, if any.
    fn decode(&self, frame: &Frame) -> Option<String>;
}

/// Owns a source for the duration of a scan and releases it on drop.
struct ReleaseGuard<S: VideoSource> {
    source: S,
}

impl<S: VideoSource> Drop for ReleaseGuard<S> {
    fn drop(&mut self) {
        self.source.release();
        debug!("Camera source released");
    }
}

/// Interval-driven camera scanner.
#[derive(Debug, Clone, Copy)]
pub struct CameraScanner {
    interval: Duration,
}

impl CameraScanner {
    /// Creates a scanner sampling every `interval`; a zero interval is raised to 1 ms.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
        }
    }

    /// Sampling interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Samples `source` until a symbol is decoded or `cancel` fires.
    ///
    /// Returns the decoded payload, trimmed, or `None` on cancellation.
    pub async fn scan<S, D>(&self, source: S, decoder: &D, cancel: &CancellationToken) -> Option<String>
    where
        S: VideoSource,
        D: SymbolDecoder + ?Sized,
    {
        let mut guard = ReleaseGuard { source };
        let mut ticker = interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        info!(interval = ?self.interval, "Camera scanner started");

        loop {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    info!("Camera scanner cancelled");
                    return None;
                }
                _ = ticker.tick() => {
                    let Some(frame) = guard.source.capture() else {
                        trace!("No frame available");
                        continue;
                    };
                    let Some(code) = decoder.decode(&frame) else {
                        continue;
                    };
                    let code = code.trim();
                    if code.is_empty() {
                        continue;
                    }
                    info!(barcode = %code, "Camera scanner: barcode detected");
                    return Some(code.to_string());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    };
    use tokio::time::Instant;

    const INTERVAL: Duration = Duration::from_millis(250);

    #[derive(Default, Clone)]
    struct Counters {
        captured: Arc<AtomicUsize>,
        released: Arc<AtomicBool>,
    }

    struct FakeCamera {
        counters: Counters,
    }

    impl VideoSource for FakeCamera {
        fn capture(&mut self) -> Option<Frame> {
            let n = self.counters.captured.fetch_add(1, Ordering::SeqCst);
            Some(Frame {
                width: 1,
                height: 1,
                data: vec![u8::try_from(n).unwrap_or(u8::MAX)],
            })
        }

        fn release(&mut self) {
            self.counters.released.store(true, Ordering::SeqCst);
        }
    }

    /// Finds a code only in the frame with the given sequence number.
    struct DecodeAt(u8);

    impl SymbolDecoder for DecodeAt {
        fn decode(&self, frame: &Frame) -> Option<String> {
            (frame.data.first() == Some(&self.0)).then(|| " 78000000001 ".to_string())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_on_first_symbol_and_releases() {
        let counters = Counters::default();
        let camera = FakeCamera { counters: counters.clone() };
        let cancel = CancellationToken::new();
        let started = Instant::now();

        let code = CameraScanner::new(INTERVAL)
            .scan(camera, &DecodeAt(2), &cancel)
            .await;

        assert_eq!(code.as_deref(), Some("78000000001"));
        assert_eq!(counters.captured.load(Ordering::SeqCst), 3);
        assert!(counters.released.load(Ordering::SeqCst));
        assert!(started.elapsed() >= INTERVAL * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_releases_source() {
        let counters = Counters::default();
        let camera = FakeCamera { counters: counters.clone() };
        let cancel = CancellationToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            canceller.cancel();
        });

        let code = CameraScanner::new(INTERVAL)
            .scan(camera, &DecodeAt(u8::MAX), &cancel)
            .await;

        assert_eq!(code, None);
        assert!(counters.released.load(Ordering::SeqCst));
        assert!(counters.captured.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_scan_releases_source() {
        let counters = Counters::default();
        let camera = FakeCamera { counters: counters.clone() };
        let cancel = CancellationToken::new();
        let scanner = CameraScanner::new(INTERVAL);

        let result = tokio::time::timeout(
            Duration::from_millis(600),
            scanner.scan(camera, &DecodeAt(u8::MAX), &cancel),
        )
        .await;

        assert!(result.is_err());
        assert!(counters.released.load(Ordering::SeqCst));
    }

    #[test]
    fn test_zero_interval_is_raised() {
        assert_eq!(CameraScanner::new(Duration::ZERO).interval(), Duration::from_millis(1));
    }
}
