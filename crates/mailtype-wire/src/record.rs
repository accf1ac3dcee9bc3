//! Encoding and decoding of address records.

use bytes::BufMut;

use mailtype_core::{Address, MAX_FIELD_LEN};

use crate::error::{Result, WireError};

/// Encode one address as a binary record.
///
/// Addresses parsed under the default limits always fit, but relaxed
/// [`mailtype_core::ParseLimits`] can admit fields wider than the
/// length byte covers; those are rejected here rather than misframed.
pub fn encode_record(addr: &Address) -> Result<Vec<u8>> {
    let local = addr.local().as_bytes();
    let domain = addr.domain().as_bytes();
    for field in [local, domain] {
        if field.len() > MAX_FIELD_LEN {
            return Err(WireError::FieldTooLong(field.len()));
        }
    }

    let mut buf = Vec::with_capacity(2 + local.len() + domain.len());
    buf.put_u8(local.len() as u8);
    buf.put_slice(local);
    buf.put_u8(domain.len() as u8);
    buf.put_slice(domain);
    Ok(buf)
}

/// Encode a sequence of addresses back to back.
///
/// Fails on the first address exceeding the wire bound; nothing of a
/// failed encode is returned.
pub fn encode_records<'a>(addrs: impl IntoIterator<Item = &'a Address>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    for addr in addrs {
        buf.extend_from_slice(&encode_record(addr)?);
    }
    Ok(buf)
}

/// Decode one record from the front of `bytes`.
///
/// Returns the address and the number of bytes consumed, so callers
/// can frame a stream of records. The recovered text is re-validated;
/// a corrupt or hand-forged record surfaces as an error, never as an
/// unchecked [`Address`].
pub fn decode_record(bytes: &[u8]) -> Result<(Address, usize)> {
    let (local, after_local) = take_field(bytes)?;
    let (domain, after_domain) = take_field(after_local)?;

    let addr = Address::parse(&format!("{local}@{domain}"))?;
    Ok((addr, bytes.len() - after_domain.len()))
}

/// Decode a buffer holding zero or more records, consuming it exactly.
pub fn decode_records(mut bytes: &[u8]) -> Result<Vec<Address>> {
    let mut out = Vec::new();
    while !bytes.is_empty() {
        let (addr, consumed) = decode_record(bytes)?;
        out.push(addr);
        bytes = &bytes[consumed..];
    }
    Ok(out)
}

/// Split one length-prefixed field off the front of the buffer.
fn take_field(bytes: &[u8]) -> Result<(&str, &[u8])> {
    let (&len, rest) = bytes.split_first().ok_or(WireError::Truncated {
        needed: 1,
        had: 0,
    })?;
    let len = usize::from(len);
    if len > MAX_FIELD_LEN {
        return Err(WireError::FieldTooLong(len));
    }
    if rest.len() < len {
        return Err(WireError::Truncated {
            needed: len,
            had: rest.len(),
        });
    }
    let (field, rest) = rest.split_at(len);
    let field = std::str::from_utf8(field).map_err(|_| WireError::InvalidUtf8)?;
    Ok((field, rest))
}
