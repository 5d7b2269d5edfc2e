use crate::RecordType;
use std::net::SocketAddr;
use thiserror::Error;

/// A domain name that cannot be written as a QNAME.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Domain name is empty")]
    EmptyName,

    #[error("Domain name '{name}' contains an empty label")]
    EmptyLabel { name: String },

    #[error("Label '{label}' is {len} bytes long (maximum is 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("Domain name is {len} bytes long (maximum is 255)")]
    NameTooLong { len: usize },

    #[error("Label '{label}' contains non-ASCII characters")]
    NonAsciiLabel { label: String },
}

/// Conditions reported by the server in the response header.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Received response is a query, not a response")]
    NotAResponse,

    #[error("Server does not support recursive queries")]
    NonRecursiveServer,

    #[error("Format error: the name server was unable to interpret the query")]
    FormatError,

    #[error("Server failure: the name server was unable to process this query due to a problem with the name server")]
    ServerFailure,

    #[error("Name error: the domain name referenced in the query does not exist")]
    NameError,

    #[error("Not implemented: the name server does not support the requested kind of query")]
    NotImplemented,

    #[error("Refused: the name server refuses to perform the requested operation for policy reasons")]
    Refused,
}

impl ProtocolError {
    /// Maps an RCODE nibble to its error. Reserved codes (6-15) are not errors.
    pub fn from_rcode(rcode: u8) -> Option<Self> {
        match rcode {
            1 => Some(Self::FormatError),
            2 => Some(Self::ServerFailure),
            3 => Some(Self::NameError),
            4 => Some(Self::NotImplemented),
            5 => Some(Self::Refused),
            _ => None,
        }
    }
}

/// A response that cannot be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedResponse {
    #[error("Response is {0} bytes, shorter than the 12-byte header")]
    TooShort(usize),

    #[error("Response truncated: {needed} bytes needed at offset {offset}, buffer is {len} bytes")]
    Truncated {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("Response ID mismatch: expected {expected:#06x}, got {actual:#06x}")]
    IdMismatch { expected: u16, actual: u16 },

    #[error("Unknown record type {0}, could not process the server response")]
    UnknownRecordType(u16),

    #[error("Unexpected class code {0}, could not process the server response")]
    UnexpectedClassCode(u16),

    #[error("Malformed or looping compressed name at offset {offset}")]
    MalformedName { offset: usize },

    #[error("Invalid RDATA length {rdlength} for {record_type} record")]
    InvalidRdata {
        record_type: RecordType,
        rdlength: u16,
    },

    #[error("Question length {query_len} does not fit a {len}-byte response")]
    QueryLengthOutOfRange { query_len: usize, len: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    Encode(#[from] EncodeError),

    #[error("{0}")]
    Protocol(#[from] ProtocolError),

    #[error("Invalid DNS response: {0}")]
    Malformed(#[from] MalformedResponse),

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: SocketAddr },

    #[error("Transport error talking to {server}: {reason}")]
    Transport { server: SocketAddr, reason: String },

    #[error("Maximum number of retries exceeded: no response from {server} after {attempts} attempts")]
    RetriesExhausted { attempts: u32, server: SocketAddr },

    #[error("Invalid query type: {0}")]
    InvalidQueryType(String),
}

impl DomainError {
    /// Only a timeout is worth resending the same query for.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::QueryTimeout { .. })
    }
}
