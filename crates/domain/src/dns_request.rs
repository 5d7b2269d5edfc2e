use super::{DnsQuery, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Everything one lookup needs, built once at the CLI boundary and passed down
/// unchanged.
#[derive(Debug, Clone)]
pub struct DnsRequest {
    pub query: DnsQuery,
    pub server: SocketAddr,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl DnsRequest {
    pub fn new(
        domain: impl Into<Arc<str>>,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Self {
        Self {
            query: DnsQuery::new(domain, record_type),
            server,
            timeout: Duration::from_millis(crate::config::DEFAULT_TIMEOUT_MS),
            max_retries: crate::config::DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Total number of transmissions allowed: the first send plus every retry.
    ///
    /// `max_retries` counts retransmissions, so `max_retries = 3` gives four
    /// sends before `RetriesExhausted { attempts: 4 }`.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }
}
