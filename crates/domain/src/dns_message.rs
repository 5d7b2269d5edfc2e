use super::{DnsRecord, Header};
use std::time::Duration;

/// Decoded record sections of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sections {
    /// Both the answer and the additional section were empty.
    NotFound,
    Found {
        answers: Vec<DnsRecord>,
        additional: Vec<DnsRecord>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMessage {
    pub header: Header,
    pub sections: Sections,
}

impl DecodedMessage {
    pub fn new(header: Header, answers: Vec<DnsRecord>, additional: Vec<DnsRecord>) -> Self {
        let sections = if answers.is_empty() && additional.is_empty() {
            Sections::NotFound
        } else {
            Sections::Found {
                answers,
                additional,
            }
        };
        Self { header, sections }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.sections, Sections::NotFound)
    }

    pub fn answers(&self) -> &[DnsRecord] {
        match &self.sections {
            Sections::Found { answers, .. } => answers,
            Sections::NotFound => &[],
        }
    }

    pub fn additional(&self) -> &[DnsRecord] {
        match &self.sections {
            Sections::Found { additional, .. } => additional,
            Sections::NotFound => &[],
        }
    }

    /// Authority is a message-level flag; every record inherits it for display.
    pub fn is_authoritative(&self) -> bool {
        self.header.authoritative
    }
}

/// Outcome of a completed lookup.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub message: DecodedMessage,
    /// Retransmissions needed after the first send.
    pub retries: u32,
    pub elapsed: Duration,
}
