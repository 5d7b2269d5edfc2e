use super::name::read_name;
use super::reader::{bytes_at, u16_at, u32_at};
use dnsq_domain::{DnsRecord, MalformedResponse, RecordData, RecordType, CLASS_IN};
use std::net::Ipv4Addr;

/// Fixed fields between the owner name and RDATA: TYPE, CLASS, TTL, RDLENGTH.
const FIXED_FIELDS_LEN: usize = 10;

/// Position of a record's fixed fields and RDATA.
struct RecordLayout {
    name: String,
    type_code: u16,
    class: u16,
    ttl: u32,
    rdlength: u16,
    rdata_start: usize,
}

impl RecordLayout {
    fn read(buf: &[u8], cursor: usize) -> Result<Self, MalformedResponse> {
        let (name, name_len) = read_name(buf, cursor)?;
        let fixed = cursor + name_len;
        bytes_at(buf, fixed, FIXED_FIELDS_LEN)?;

        Ok(Self {
            name,
            type_code: u16_at(buf, fixed)?,
            class: u16_at(buf, fixed + 2)?,
            ttl: u32_at(buf, fixed + 4)?,
            rdlength: u16_at(buf, fixed + 8)?,
            rdata_start: fixed + FIXED_FIELDS_LEN,
        })
    }

    /// RDATA must lie inside the message.
    fn check_rdata_bounds(&self, buf: &[u8]) -> Result<(), MalformedResponse> {
        bytes_at(buf, self.rdata_start, usize::from(self.rdlength)).map(|_| ())
    }

    /// The next record always starts RDLENGTH bytes past RDATA, however the
    /// RDATA name was compressed.
    fn next_cursor(&self) -> usize {
        self.rdata_start + usize::from(self.rdlength)
    }
}

pub struct RecordParser;

impl RecordParser {
    /// Decode the resource record at `cursor` and return it with the offset of
    /// the record that follows.
    pub fn parse_record(buf: &[u8], cursor: usize) -> Result<(DnsRecord, usize), MalformedResponse> {
        let layout = RecordLayout::read(buf, cursor)?;

        let record_type = RecordType::from_u16(layout.type_code)
            .ok_or(MalformedResponse::UnknownRecordType(layout.type_code))?;
        if layout.class != CLASS_IN {
            return Err(MalformedResponse::UnexpectedClassCode(layout.class));
        }
        layout.check_rdata_bounds(buf)?;

        let data = Self::parse_rdata(buf, &layout, record_type)?;
        let record = DnsRecord::new(layout.name.clone(), layout.ttl, layout.rdlength, data);
        Ok((record, layout.next_cursor()))
    }

    /// Step over a record without interpreting its type or class.
    pub fn skip_record(buf: &[u8], cursor: usize) -> Result<usize, MalformedResponse> {
        let layout = RecordLayout::read(buf, cursor)?;
        layout.check_rdata_bounds(buf)?;
        Ok(layout.next_cursor())
    }

    fn parse_rdata(
        buf: &[u8],
        layout: &RecordLayout,
        record_type: RecordType,
    ) -> Result<RecordData, MalformedResponse> {
        let invalid = || MalformedResponse::InvalidRdata {
            record_type,
            rdlength: layout.rdlength,
        };
        let start = layout.rdata_start;
        let rdlength = usize::from(layout.rdlength);

        // A name in RDATA must end inside RDLENGTH; trailing bytes are ignored.
        let name_within = |offset: usize| -> Result<String, MalformedResponse> {
            let (name, consumed) = read_name(buf, offset)?;
            if offset - start + consumed > rdlength {
                return Err(invalid());
            }
            Ok(name)
        };

        match record_type {
            RecordType::A => {
                if layout.rdlength != 4 {
                    return Err(invalid());
                }
                let octets = bytes_at(buf, start, 4)?;
                Ok(RecordData::A(Ipv4Addr::new(
                    octets[0], octets[1], octets[2], octets[3],
                )))
            }
            RecordType::NS | RecordType::CNAME if rdlength == 0 => Err(invalid()),
            RecordType::NS => Ok(RecordData::Ns(name_within(start)?)),
            RecordType::CNAME => Ok(RecordData::Cname(name_within(start)?)),
            RecordType::MX => {
                if rdlength < 3 {
                    return Err(invalid());
                }
                let preference = u16_at(buf, start)?;
                let exchange = name_within(start + 2)?;
                Ok(RecordData::Mx {
                    preference,
                    exchange,
                })
            }
        }
    }
}
