use super::record_parser::RecordParser;
use dnsq_domain::{
    DecodedMessage, DnsRecord, DomainError, Header, MalformedResponse, ProtocolError, HEADER_LEN,
};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse_header(response_bytes: &[u8]) -> Result<Header, MalformedResponse> {
        let header: &[u8; HEADER_LEN] = response_bytes
            .get(..HEADER_LEN)
            .and_then(|b| b.try_into().ok())
            .ok_or(MalformedResponse::TooShort(response_bytes.len()))?;
        Ok(Header::from_bytes(header))
    }

    /// Check the header flags in order: QR, RA, then RCODE.
    pub fn validate(response_bytes: &[u8]) -> Result<Header, DomainError> {
        let header = Self::parse_header(response_bytes)?;

        if !header.response {
            return Err(ProtocolError::NotAResponse.into());
        }
        if !header.recursion_available {
            return Err(ProtocolError::NonRecursiveServer.into());
        }
        if let Some(err) = ProtocolError::from_rcode(header.rcode) {
            debug!(rcode = Self::rcode_to_status(header.rcode), "Server reported an error");
            return Err(err.into());
        }

        Ok(header)
    }

    /// Validate the response, then decode the answer and additional sections.
    ///
    /// The response echoes the question, so records start at `query_len`.
    /// Authority records are stepped over and not returned.
    pub fn decode(response_bytes: &[u8], query_len: usize) -> Result<DecodedMessage, DomainError> {
        let header = Self::validate(response_bytes)?;

        if query_len < HEADER_LEN || query_len > response_bytes.len() {
            return Err(MalformedResponse::QueryLengthOutOfRange {
                query_len,
                len: response_bytes.len(),
            }
            .into());
        }

        let mut cursor = query_len;
        let answers = Self::parse_section(response_bytes, &mut cursor, header.ancount)?;
        for _ in 0..header.nscount {
            cursor = RecordParser::skip_record(response_bytes, cursor)?;
        }
        let additional = Self::parse_section(response_bytes, &mut cursor, header.arcount)?;

        debug!(
            id = header.id,
            authoritative = header.authoritative,
            truncated = header.truncated,
            answers = answers.len(),
            authority = header.nscount,
            additional = additional.len(),
            "DNS response parsed"
        );

        Ok(DecodedMessage::new(header, answers, additional))
    }

    fn parse_section(
        response_bytes: &[u8],
        cursor: &mut usize,
        count: u16,
    ) -> Result<Vec<DnsRecord>, MalformedResponse> {
        let mut records = Vec::new();
        for _ in 0..count {
            let (record, next) = RecordParser::parse_record(response_bytes, *cursor)?;
            records.push(record);
            *cursor = next;
        }
        Ok(records)
    }

    pub fn rcode_to_status(rcode: u8) -> &'static str {
        match rcode {
            0 => "NOERROR",
            1 => "FORMERR",
            2 => "SERVFAIL",
            3 => "NXDOMAIN",
            4 => "NOTIMP",
            5 => "REFUSED",
            _ => "UNKNOWN",
        }
    }
}
