//! Tunable bounds for fetching images.

use std::time::Duration;

/// Default bound on a whole HTTP exchange (connect, request and body).
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Default bound on the size of any fetched image.
pub const DEFAULT_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// Limits applied by the resolver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    pub http_timeout: Duration,
    /// Maximum number of bytes accepted from a URL, a local file or stdin.
    pub max_bytes: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl ResolverConfig {
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }
}
