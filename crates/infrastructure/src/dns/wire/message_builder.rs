//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format: a 12-byte header followed by
//! a single question (QNAME, QTYPE, QCLASS).

use super::name::MAX_NAME_LEN;
use dnsq_domain::{EncodeError, Header, RecordType, CLASS_IN, HEADER_LEN};

/// Longest single label allowed by RFC 1035.
pub const MAX_LABEL_LEN: usize = 63;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a DNS query message and serialize to wire format bytes
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section
    pub fn build_query(domain: &str, record_type: &RecordType) -> Result<Vec<u8>, EncodeError> {
        Self::build_query_with_id(domain, record_type).map(|(_, bytes)| bytes)
    }

    /// Build a query message and return the transaction ID with the bytes
    pub fn build_query_with_id(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), EncodeError> {
        let id = fastrand::u16(..);
        let bytes = Self::build_query_for_id(id, domain, record_type)?;
        Ok((id, bytes))
    }

    /// Build a query with a caller-chosen transaction ID
    pub fn build_query_for_id(
        id: u16,
        domain: &str,
        record_type: &RecordType,
    ) -> Result<Vec<u8>, EncodeError> {
        let mut buf = Vec::with_capacity(HEADER_LEN + domain.len() + 6);
        buf.extend_from_slice(&Header::query(id).to_bytes());
        Self::encode_name(&mut buf, domain)?;
        buf.extend_from_slice(&record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());
        Ok(buf)
    }

    /// Append `domain` as length-prefixed labels ending in the root byte
    pub fn encode_name(buf: &mut Vec<u8>, domain: &str) -> Result<(), EncodeError> {
        if domain.is_empty() {
            return Err(EncodeError::EmptyName);
        }
        if domain.len() > MAX_NAME_LEN {
            return Err(EncodeError::NameTooLong { len: domain.len() });
        }

        for label in domain.split('.') {
            if label.is_empty() {
                return Err(EncodeError::EmptyLabel {
                    name: domain.to_string(),
                });
            }
            if !label.is_ascii() {
                return Err(EncodeError::NonAsciiLabel {
                    label: label.to_string(),
                });
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(EncodeError::LabelTooLong {
                    label: label.to_string(),
                    len: label.len(),
                });
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
        Ok(())
    }
}
