use super::{MessageBuilder, ResponseParser};
use dnsq_application::ports::DnsCodec;
use dnsq_domain::{DecodedMessage, DnsQuery, DomainError};

/// RFC 1035 wire format for a single-question query and its response.
#[derive(Debug, Default, Clone, Copy)]
pub struct WireCodec;

impl WireCodec {
    pub fn new() -> Self {
        Self
    }
}

impl DnsCodec for WireCodec {
    fn encode(&self, query: &DnsQuery) -> Result<Vec<u8>, DomainError> {
        Ok(MessageBuilder::build_query(&query.domain, &query.record_type)?)
    }

    fn decode(&self, response: &[u8], query_len: usize) -> Result<DecodedMessage, DomainError> {
        ResponseParser::decode(response, query_len)
    }
}
