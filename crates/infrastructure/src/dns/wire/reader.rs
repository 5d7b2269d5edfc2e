//! Bounds-checked big-endian reads over a received message.

use dnsq_domain::MalformedResponse;

fn truncated(buf: &[u8], offset: usize, needed: usize) -> MalformedResponse {
    MalformedResponse::Truncated {
        offset,
        needed,
        len: buf.len(),
    }
}

pub(crate) fn bytes_at(buf: &[u8], offset: usize, len: usize) -> Result<&[u8], MalformedResponse> {
    offset
        .checked_add(len)
        .and_then(|end| buf.get(offset..end))
        .ok_or_else(|| truncated(buf, offset, len))
}

pub(crate) fn u8_at(buf: &[u8], offset: usize) -> Result<u8, MalformedResponse> {
    buf.get(offset)
        .copied()
        .ok_or_else(|| truncated(buf, offset, 1))
}

pub(crate) fn u16_at(buf: &[u8], offset: usize) -> Result<u16, MalformedResponse> {
    let b = bytes_at(buf, offset, 2)?;
    Ok(u16::from_be_bytes([b[0], b[1]]))
}

pub(crate) fn u32_at(buf: &[u8], offset: usize) -> Result<u32, MalformedResponse> {
    let b = bytes_at(buf, offset, 4)?;
    Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
}
