//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Standard DNS transport. Messages are sent as-is (no framing) and replies
//! are limited to 512 bytes since no EDNS(0) OPT record is advertised.

use async_trait::async_trait;
use dnsq_application::ports::{DnsTransport, TransportResponse};
use dnsq_domain::{DomainError, MalformedResponse};
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS message size without EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 512;

/// TC flag in the third header byte
const TC_BIT: u8 = 0x02;

/// Reject a datagram that does not answer our query.
pub fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    let (Some(q), Some(r)) = (query.get(..2), response.get(..2)) else {
        debug!(server = %server, "Message too short to carry a DNS ID");
        return Err(MalformedResponse::TooShort(response.len()).into());
    };

    let expected = u16::from_be_bytes([q[0], q[1]]);
    let actual = u16::from_be_bytes([r[0], r[1]]);
    if expected != actual {
        return Err(MalformedResponse::IdMismatch { expected, actual }.into());
    }
    Ok(())
}

/// DNS over UDP transport
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }

    fn transport_error(server: SocketAddr, what: &str, e: std::io::Error) -> DomainError {
        DomainError::Transport {
            server,
            reason: format!("{}: {}", what, e),
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if server.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| Self::transport_error(server, "Failed to bind UDP socket", e))?;

        let bytes_sent = socket
            .send_to(message_bytes, server)
            .await
            .map_err(|e| Self::transport_error(server, "Failed to send UDP query", e))?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        let (bytes_received, from_addr) =
            tokio::time::timeout(timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| DomainError::QueryTimeout { server })?
                .map_err(|e| Self::transport_error(server, "Failed to receive UDP response", e))?;

        // Validate response came from expected server
        if from_addr.ip() != server.ip() {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);
        validate_response_id(message_bytes, &recv_buf, server)?;

        if recv_buf.get(2).is_some_and(|flags| flags & TC_BIT != 0) {
            warn!(server = %server, "Response has the TC bit set, records may be missing");
        }

        debug!(
            server = %server,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod udp_test;
