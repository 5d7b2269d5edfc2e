use async_trait::async_trait;
use dnsq_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// Moves one encoded message to a server and brings back its reply.
///
/// Implementations return `DomainError::QueryTimeout` when no reply arrives
/// within `timeout`; every other failure is reported as a non-retryable error.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
