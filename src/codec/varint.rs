//! Base-128 varint encoding, as used by the payload wire format
//!
//! Each byte carries 7 value bits; the high bit marks continuation. Small
//! values take one byte, a full u32 at most five.

use bytes::{Buf, BufMut};

use super::error::CodecError;

/// Append an unsigned integer as a varint
pub fn encode_u64(buf: &mut impl BufMut, mut value: u64) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        if value != 0 {
            byte |= 0x80;
        }

        buf.put_u8(byte);

        if value == 0 {
            break;
        }
    }
}

/// Read one varint, failing on truncated input or a value over 64 bits
pub fn decode_u64(buf: &mut impl Buf) -> Result<u64, CodecError> {
    let mut value: u64 = 0;
    let mut shift = 0;

    loop {
        if !buf.has_remaining() {
            return Err(CodecError::Truncated);
        }
        if shift >= 64 {
            return Err(CodecError::Truncated);
        }

        let byte = buf.get_u8();
        value |= ((byte & 0x7F) as u64) << shift;

        if byte & 0x80 == 0 {
            return Ok(value);
        }

        shift += 7;
    }
}
