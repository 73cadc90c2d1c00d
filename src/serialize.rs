//! Bidirectional mapping between [`ScannerState`] and the host's bounded
//! serialization buffer (`spec.md` §4.3).
//!
//! Layout (all multi-byte integers little-endian):
//!
//! ```text
//! byte 0          : verbatim_suffix length L (0..=255)
//! bytes 1..L      : verbatim_suffix bytes (if L>0)
//! bytes L+1..L+3  : serialized_tag_count (u16) — how many tags actually fit
//! bytes L+3..L+5  : total_tag_count (u16)      — logical stack depth
//! then, repeated serialized_tag_count times:
//!     1 byte      : tag variant discriminant
//!     if CUSTOM: 1 byte name length N, then N bytes of name
//! ```
//!
//! Serialization stops writing tags as soon as the next entry would overflow
//! the caller-supplied buffer; deserialization pads the tail back out to
//! `total_tag_count` with [`TagVariant::Html`] placeholders so stack depth
//! survives the round trip even when individual frame identities are lost
//! (`spec.md` §4.3, §9 Open Question 3).

use crate::state::{ScannerState, VerbatimSuffix};
use crate::tag::TagVariant;

/// Writes `state` into `buffer`, returning the number of bytes written.
///
/// Never panics and never writes past `buffer.len()`; if `buffer` is too
/// small to hold even the fixed header, serialization degrades to writing
/// as much of the header as fits and no tags at all — `deserialize` treats
/// any resulting short read as a reason to reset to empty state per
/// `spec.md` §4.3's "any short read aborts to empty state."
pub fn serialize(state: &ScannerState, buffer: &mut [u8]) -> usize {
    let suffix_bytes = state
        .verbatim_suffix()
        .map(VerbatimSuffix::as_bytes)
        .unwrap_or(&[]);
    let l = suffix_bytes.len();

    // byte 0: suffix length, bytes 1..=l: suffix bytes.
    if buffer.is_empty() {
        return 0;
    }
    buffer[0] = l as u8;
    let mut size = 1;
    if size + l > buffer.len() {
        return size.min(buffer.len());
    }
    buffer[size..size + l].copy_from_slice(suffix_bytes);
    size += l;

    // Reserve the two u16 counts; serialized_tag_count is filled in last.
    if size + 4 > buffer.len() {
        return size;
    }
    let counts_at = size;
    size += 4;

    let total_tag_count = state.depth().min(u16::MAX as usize) as u16;
    let mut serialized_tag_count: u16 = 0;

    for tag in state.iter() {
        if serialized_tag_count as usize >= total_tag_count as usize {
            break;
        }
        let needed = match tag {
            TagVariant::Custom(name) => 2 + name.as_bytes().len(),
            _ => 1,
        };
        if size + needed > buffer.len() {
            break;
        }
        buffer[size] = tag.discriminant();
        size += 1;
        if let TagVariant::Custom(name) = tag {
            let bytes = name.as_bytes();
            buffer[size] = bytes.len() as u8;
            size += 1;
            buffer[size..size + bytes.len()].copy_from_slice(bytes);
            size += bytes.len();
        }
        serialized_tag_count += 1;
    }

    buffer[counts_at..counts_at + 2].copy_from_slice(&serialized_tag_count.to_le_bytes());
    buffer[counts_at + 2..counts_at + 4].copy_from_slice(&total_tag_count.to_le_bytes());

    size
}

/// Bytes a full, untruncated serialization of `state` would occupy.
///
/// Used by [`crate::scanner::Scanner::serialize`] to detect truncation and
/// report it as [`crate::error::ScanError::SerializationBufferExceeded`]
/// without needing a scratch buffer.
pub fn required_len(state: &ScannerState) -> usize {
    let suffix_len = state
        .verbatim_suffix()
        .map(VerbatimSuffix::as_bytes)
        .map(<[u8]>::len)
        .unwrap_or(0);
    let mut total = 1 + suffix_len + 4;
    for tag in state.iter() {
        total += match tag {
            TagVariant::Custom(name) => 2 + name.as_bytes().len(),
            _ => 1,
        };
    }
    total
}

/// Rebuilds a [`ScannerState`] from `buffer`. `length` may be `0`, which
/// produces the empty state exactly as [`ScannerState::new`] would.
///
/// Any malformed or truncated header resets to empty state rather than
/// panicking or guessing — `spec.md` §4.3's "defensive bounds checks are
/// mandatory."
pub fn deserialize(buffer: &[u8], length: usize) -> ScannerState {
    let buffer = &buffer[..length.min(buffer.len())];
    deserialize_inner(buffer).unwrap_or_default()
}

fn deserialize_inner(buffer: &[u8]) -> Option<ScannerState> {
    if buffer.is_empty() {
        return Some(ScannerState::new());
    }

    let l = buffer[0] as usize;
    let mut pos = 1;
    let suffix_bytes = buffer.get(pos..pos + l)?;
    pos += l;

    let mut state = ScannerState::new();
    if l > 0 {
        state.set_verbatim_suffix(VerbatimSuffix::new(suffix_bytes)?);
    }

    let serialized_tag_count = u16::from_le_bytes(buffer.get(pos..pos + 2)?.try_into().ok()?);
    pos += 2;
    let total_tag_count = u16::from_le_bytes(buffer.get(pos..pos + 2)?.try_into().ok()?);
    pos += 2;

    let stack = state.stack_mut();
    stack.reserve(total_tag_count as usize);

    for _ in 0..serialized_tag_count {
        let discriminant = *buffer.get(pos)?;
        pos += 1;
        let is_custom = discriminant == TagVariant::Custom(crate::tag::CustomName::new(b"")).discriminant();
        let name = if is_custom {
            let name_len = *buffer.get(pos)? as usize;
            pos += 1;
            let bytes = buffer.get(pos..pos + name_len)?;
            pos += name_len;
            Some(bytes)
        } else {
            None
        };
        let tag = TagVariant::from_discriminant(discriminant, name)?;
        stack.push(tag);
    }

    // Pad the tail with placeholders so logical stack depth survives a
    // truncated serialization (spec.md §4.3, §9 Open Question 3).
    for _ in serialized_tag_count..total_tag_count {
        stack.push(TagVariant::Html);
    }

    Some(state)
}
