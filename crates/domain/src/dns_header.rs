/// Length of the fixed DNS message header.
pub const HEADER_LEN: usize = 12;

/// Decoded 12-byte message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    /// QR: set on responses.
    pub response: bool,
    pub opcode: u8,
    /// AA: the answering server is authoritative for the zone.
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub rcode: u8,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub fn from_bytes(bytes: &[u8; HEADER_LEN]) -> Self {
        let flags_hi = bytes[2];
        let flags_lo = bytes[3];
        Self {
            id: u16::from_be_bytes([bytes[0], bytes[1]]),
            response: flags_hi & 0x80 != 0,
            opcode: (flags_hi >> 3) & 0x0F,
            authoritative: flags_hi & 0x04 != 0,
            truncated: flags_hi & 0x02 != 0,
            recursion_desired: flags_hi & 0x01 != 0,
            recursion_available: flags_lo & 0x80 != 0,
            rcode: flags_lo & 0x0F,
            qdcount: u16::from_be_bytes([bytes[4], bytes[5]]),
            ancount: u16::from_be_bytes([bytes[6], bytes[7]]),
            nscount: u16::from_be_bytes([bytes[8], bytes[9]]),
            arcount: u16::from_be_bytes([bytes[10], bytes[11]]),
        }
    }

    /// Header of a standard recursive query with one question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            recursion_desired: true,
            qdcount: 1,
            ..Self::default()
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut flags_hi = (self.opcode & 0x0F) << 3;
        if self.response {
            flags_hi |= 0x80;
        }
        if self.authoritative {
            flags_hi |= 0x04;
        }
        if self.truncated {
            flags_hi |= 0x02;
        }
        if self.recursion_desired {
            flags_hi |= 0x01;
        }
        let mut flags_lo = self.rcode & 0x0F;
        if self.recursion_available {
            flags_lo |= 0x80;
        }

        let mut out = [0u8; HEADER_LEN];
        out[0..2].copy_from_slice(&self.id.to_be_bytes());
        out[2] = flags_hi;
        out[3] = flags_lo;
        out[4..6].copy_from_slice(&self.qdcount.to_be_bytes());
        out[6..8].copy_from_slice(&self.ancount.to_be_bytes());
        out[8..10].copy_from_slice(&self.nscount.to_be_bytes());
        out[10..12].copy_from_slice(&self.arcount.to_be_bytes());
        out
    }
}
