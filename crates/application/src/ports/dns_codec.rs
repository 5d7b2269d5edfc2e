use dnsq_domain::{DecodedMessage, DnsQuery, DomainError};

/// Wire-format encoder and decoder. Both directions are pure functions of
/// their input.
pub trait DnsCodec: Send + Sync {
    fn encode(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError>;

    /// Validates the header, then decodes the records that follow the echoed
    /// question, which ends at `query_len`.
    fn decode(&self, response: &[u8], query_len: usize) -> Result<DecodedMessage, DomainError>;
}
