//! dnsq domain layer: query, header and record model, error taxonomy and
//! configuration. No I/O happens here.
pub mod config;
pub mod dns_header;
pub mod dns_message;
pub mod dns_query;
pub mod dns_record;
pub mod dns_request;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_header::{Header, HEADER_LEN};
pub use dns_message::{DecodedMessage, Resolution, Sections};
pub use dns_query::{DnsQuery, CLASS_IN};
pub use dns_record::{DnsRecord, RecordData, RecordType};
pub use dns_request::DnsRequest;
pub use errors::{DomainError, EncodeError, MalformedResponse, ProtocolError};
