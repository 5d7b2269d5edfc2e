use super::RecordType;
use std::sync::Arc;

/// QCLASS for the Internet. The only class this client speaks.
pub const CLASS_IN: u16 = 1;

/// The single question carried by a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    pub fn class(&self) -> u16 {
        CLASS_IN
    }
}
