#![allow(dead_code)]
//! Synthetic response messages built on top of a real encoded query.

pub const QNAME_OFFSET: usize = 12;

pub const TYPE_A: u16 = 1;
pub const TYPE_NS: u16 = 2;
pub const TYPE_CNAME: u16 = 5;
pub const TYPE_SOA: u16 = 6;
pub const TYPE_MX: u16 = 15;
pub const TYPE_AAAA: u16 = 28;
pub const CLASS_IN: u16 = 1;
pub const CLASS_CH: u16 = 3;

/// Length-prefixed labels plus the root byte.
pub fn labels(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Labels with no root byte, to be finished by a pointer.
pub fn labels_then(name: &str, pointer_to: usize) -> Vec<u8> {
    let mut out = labels(name);
    out.pop();
    out.extend_from_slice(&pointer(pointer_to));
    out
}

pub fn pointer(offset: usize) -> [u8; 2] {
    [0xC0 | ((offset >> 8) as u8 & 0x3F), (offset & 0xFF) as u8]
}

/// Encoded resource record.
pub fn rr(name: &[u8], rtype: u16, class: u16, ttl: u32, rdata: &[u8]) -> Vec<u8> {
    let mut out = name.to_vec();
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&class.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

/// Resource record whose RDLENGTH field is set explicitly.
pub fn rr_with_rdlength(
    name: &[u8],
    rtype: u16,
    ttl: u32,
    rdlength: u16,
    rdata: &[u8],
) -> Vec<u8> {
    let mut out = name.to_vec();
    out.extend_from_slice(&rtype.to_be_bytes());
    out.extend_from_slice(&CLASS_IN.to_be_bytes());
    out.extend_from_slice(&ttl.to_be_bytes());
    out.extend_from_slice(&rdlength.to_be_bytes());
    out.extend_from_slice(rdata);
    out
}

pub fn mx_rdata(preference: u16, exchange: &[u8]) -> Vec<u8> {
    let mut out = preference.to_be_bytes().to_vec();
    out.extend_from_slice(exchange);
    out
}

/// Builds a response that echoes `query` and appends records.
pub struct ResponseBuilder {
    query: Vec<u8>,
    flags_hi: u8,
    flags_lo: u8,
    answers: Vec<Vec<u8>>,
    authority: Vec<Vec<u8>>,
    additional: Vec<Vec<u8>>,
}

impl ResponseBuilder {
    /// QR, RD and RA set, RCODE 0.
    pub fn for_query(query: &[u8]) -> Self {
        Self {
            query: query.to_vec(),
            flags_hi: 0x81,
            flags_lo: 0x80,
            answers: vec![],
            authority: vec![],
            additional: vec![],
        }
    }

    pub fn authoritative(mut self) -> Self {
        self.flags_hi |= 0x04;
        self
    }

    pub fn not_a_response(mut self) -> Self {
        self.flags_hi &= !0x80;
        self
    }

    pub fn no_recursion(mut self) -> Self {
        self.flags_lo &= !0x80;
        self
    }

    pub fn rcode(mut self, rcode: u8) -> Self {
        self.flags_lo = (self.flags_lo & 0xF0) | (rcode & 0x0F);
        self
    }

    pub fn answer(mut self, record: Vec<u8>) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: Vec<u8>) -> Self {
        self.authority.push(record);
        self
    }

    pub fn additional(mut self, record: Vec<u8>) -> Self {
        self.additional.push(record);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = self.query;
        out[2] = self.flags_hi;
        out[3] = self.flags_lo;
        out[6..8].copy_from_slice(&(self.answers.len() as u16).to_be_bytes());
        out[8..10].copy_from_slice(&(self.authority.len() as u16).to_be_bytes());
        out[10..12].copy_from_slice(&(self.additional.len() as u16).to_be_bytes());
        for record in self
            .answers
            .iter()
            .chain(&self.authority)
            .chain(&self.additional)
        {
            out.extend_from_slice(record);
        }
        out
    }
}
