//! Failure reporting seam for the request gateway.
//!
//! The gateway reports every failure exactly once, at the point of
//! detection, before propagating it. The observer is injectable so tests can
//! assert on failure visibility without capturing process-wide stderr.

use crate::client::error::ApiError;

/// Receives one notification per failed API call.
pub trait FailureObserver: Send + Sync {
    /// Called once when a request fails, before the error is returned.
    ///
    /// `url` is the most specific URL known at the point of failure; for
    /// URL-construction failures it is the original path.
    fn on_failure(&self, url: &str, error: &ApiError);
}

/// Default observer: writes one line per failure to stderr.
#[derive(Debug, Default)]
pub struct StderrObserver;

impl FailureObserver for StderrObserver {
    fn on_failure(&self, url: &str, error: &ApiError) {
        eprintln!("[lenjoy-client] API fetch error for {}: {}", url, error);
    }
}

/// Observer that drops all notifications. For callers that surface errors
/// through their own channel and want no stderr noise.
#[derive(Debug, Default)]
pub struct SilentObserver;

impl FailureObserver for SilentObserver {
    fn on_failure(&self, _url: &str, _error: &ApiError) {}
}
