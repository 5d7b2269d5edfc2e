mod dns_codec;
mod dns_transport;

pub use dns_codec::DnsCodec;
pub use dns_transport::{DnsTransport, TransportResponse};

// Re-export for convenience
pub use dnsq_domain::DnsQuery;
