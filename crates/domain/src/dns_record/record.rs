use super::RecordType;
use std::fmt;
use std::net::Ipv4Addr;

/// Decoded RDATA of a supported record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Ns(String),
    Cname(String),
    Mx { preference: u16, exchange: String },
}

impl RecordData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RecordData::A(_) => RecordType::A,
            RecordData::Ns(_) => RecordType::NS,
            RecordData::Cname(_) => RecordType::CNAME,
            RecordData::Mx { .. } => RecordType::MX,
        }
    }

    pub fn preference(&self) -> Option<u16> {
        match self {
            RecordData::Mx { preference, .. } => Some(*preference),
            _ => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(addr) => write!(f, "{}", addr),
            RecordData::Ns(name) | RecordData::Cname(name) => f.write_str(name),
            RecordData::Mx { exchange, .. } => f.write_str(exchange),
        }
    }
}

/// One resource record from the answer or additional section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,

    pub ttl: u32,

    pub rdlength: u16,

    pub data: RecordData,
}

impl DnsRecord {
    pub fn new(name: impl Into<String>, ttl: u32, rdlength: u16, data: RecordData) -> Self {
        Self {
            name: name.into(),
            ttl,
            rdlength,
            data,
        }
    }

    pub fn record_type(&self) -> RecordType {
        self.data.record_type()
    }
}
