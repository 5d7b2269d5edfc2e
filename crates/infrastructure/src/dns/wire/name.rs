//! Domain-name decoding with RFC 1035 §4.1.4 compression pointers.

use super::reader::{bytes_at, u8_at};
use dnsq_domain::MalformedResponse;

/// Longest decoded name accepted, in dotted text form.
pub const MAX_NAME_LEN: usize = 255;

const POINTER_MASK: u8 = 0xC0;

/// One element of an encoded name.
enum Segment<'a> {
    Label(&'a [u8]),
    Pointer(usize),
    Root,
}

fn segment_at(buf: &[u8], offset: usize) -> Result<Segment<'_>, MalformedResponse> {
    let len = u8_at(buf, offset)?;
    match len & POINTER_MASK {
        POINTER_MASK => {
            let low = u8_at(buf, offset + 1)?;
            let target = (usize::from(len & !POINTER_MASK) << 8) | usize::from(low);
            Ok(Segment::Pointer(target))
        }
        0x00 if len == 0 => Ok(Segment::Root),
        0x00 => Ok(Segment::Label(bytes_at(buf, offset + 1, usize::from(len))?)),
        // 0x40 and 0x80 prefixes are extended label types, never valid here.
        _ => Err(MalformedResponse::MalformedName { offset }),
    }
}

/// Reads the name starting at `start`.
///
/// Returns the dotted name and the number of bytes the name occupies at
/// `start`: up to and including the root byte for a literal name, or up to
/// and including the first pointer, which always ends a name.
///
/// A pointer must point strictly before itself, and the walk gives up after
/// more hops than the message could hold distinct pointers, so crafted loops
/// end in `MalformedName`.
pub fn read_name(buf: &[u8], start: usize) -> Result<(String, usize), MalformedResponse> {
    let max_hops = buf.len() / 2;
    let mut labels: Vec<String> = Vec::new();
    let mut text_len = 0usize;
    let mut cursor = start;
    let mut consumed: Option<usize> = None;
    let mut hops = 0usize;

    loop {
        match segment_at(buf, cursor)? {
            Segment::Root => {
                // After a pointer the cursor may sit before `start`.
                let consumed = consumed.unwrap_or_else(|| cursor + 1 - start);
                return Ok((labels.join("."), consumed));
            }
            Segment::Label(label) => {
                text_len += label.len() + usize::from(!labels.is_empty());
                if text_len > MAX_NAME_LEN {
                    return Err(MalformedResponse::MalformedName { offset: start });
                }
                labels.push(label.iter().copied().map(char::from).collect());
                cursor += 1 + label.len();
            }
            Segment::Pointer(target) => {
                hops += 1;
                if target >= cursor || hops > max_hops {
                    return Err(MalformedResponse::MalformedName { offset: cursor });
                }
                consumed.get_or_insert(cursor + 2 - start);
                cursor = target;
            }
        }
    }
}
