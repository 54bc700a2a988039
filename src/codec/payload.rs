//! Wire codec for stored values
//!
//! Values are encoded in protobuf wire format so existing consumers of the
//! store keep reading them:
//!
//! - field 1: latitude, 64-bit double
//! - field 2: longitude, 64-bit double
//! - field 3: installed app ids, repeated (unpacked) uint32 varints

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::error::CodecError;
use super::varint;
use crate::domain::DeviceApps;

// Tag byte = (field number << 3) | wire type. Doubles are wire type 5
// (64-bit), app ids wire type 0 (varint).
const TAG_LAT: u8 = 0x09;
const TAG_LON: u8 = 0x11;
const TAG_APP: u8 = 0x18;

/// Memcached rejects values above 1 MiB; fail at encode time instead
pub const MAX_VALUE_BYTES: usize = 1 << 20;

/// One encoded record, ready to hand to a shard writer
#[derive(Debug, Clone, PartialEq)]
pub struct StoreItem {
    pub key: String,
    pub payload: Bytes,
}

/// Decoded form of a stored value
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    pub lat: f64,
    pub lon: f64,
    pub apps: Vec<u32>,
}

/// Encode a record into its store key and wire payload
///
/// Encoding the same record twice yields byte-identical payloads.
pub fn encode_record(record: &DeviceApps) -> Result<StoreItem, CodecError> {
    let mut buf = BytesMut::with_capacity(2 * 9 + 6 * record.apps.len());

    buf.put_u8(TAG_LAT);
    buf.put_f64_le(record.lat);
    buf.put_u8(TAG_LON);
    buf.put_f64_le(record.lon);
    for app in &record.apps {
        buf.put_u8(TAG_APP);
        varint::encode_u64(&mut buf, *app as u64);
    }

    if buf.len() > MAX_VALUE_BYTES {
        return Err(CodecError::PayloadTooLarge(buf.len()));
    }

    Ok(StoreItem {
        key: record.store_key(),
        payload: buf.freeze(),
    })
}

/// Decode a wire payload back into its fields
///
/// Used by tests and by tooling that audits stored values.
pub fn decode_payload(payload: &[u8]) -> Result<Payload, CodecError> {
    let mut buf = payload;
    let mut decoded = Payload {
        lat: 0.0,
        lon: 0.0,
        apps: Vec::new(),
    };

    while buf.has_remaining() {
        let tag = buf.get_u8();
        match tag {
            TAG_LAT => {
                if buf.remaining() < 8 {
                    return Err(CodecError::Truncated);
                }
                decoded.lat = buf.get_f64_le();
            }
            TAG_LON => {
                if buf.remaining() < 8 {
                    return Err(CodecError::Truncated);
                }
                decoded.lon = buf.get_f64_le();
            }
            TAG_APP => {
                let app = varint::decode_u64(&mut buf)?;
                decoded.apps.push(app as u32);
            }
            other => return Err(CodecError::UnknownField(other)),
        }
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DeviceApps {
        DeviceApps {
            device_type: "idfa".to_string(),
            device_id: "abc123".to_string(),
            lat: 55.55,
            lon: 37.37,
            apps: vec![42, 43, 44],
        }
    }

    #[test]
    fn encode_builds_store_key() {
        let item = encode_record(&sample_record()).unwrap();
        assert_eq!(item.key, "idfa:abc123");
    }

    #[test]
    fn encode_produces_known_bytes() {
        let item = encode_record(&sample_record()).unwrap();

        let mut expected = Vec::new();
        expected.push(0x09);
        expected.extend_from_slice(&55.55f64.to_le_bytes());
        expected.push(0x11);
        expected.extend_from_slice(&37.37f64.to_le_bytes());
        for app in [42u8, 43, 44] {
            expected.push(0x18);
            expected.push(app);
        }

        assert_eq!(&item.payload[..], &expected[..]);
    }

    #[test]
    fn encode_is_deterministic() {
        let record = sample_record();
        let first = encode_record(&record).unwrap();
        let second = encode_record(&record).unwrap();

        assert_eq!(first.payload, second.payload);
    }

    #[test]
    fn decode_inverts_encode() {
        let record = sample_record();
        let item = encode_record(&record).unwrap();
        let payload = decode_payload(&item.payload).unwrap();

        assert_eq!(payload.lat, record.lat);
        assert_eq!(payload.lon, record.lon);
        assert_eq!(payload.apps, record.apps);
    }

    #[test]
    fn decode_handles_empty_app_list() {
        let record = DeviceApps {
            apps: vec![],
            ..sample_record()
        };
        let item = encode_record(&record).unwrap();
        let payload = decode_payload(&item.payload).unwrap();

        assert!(payload.apps.is_empty());
    }

    #[test]
    fn decode_rejects_truncated_double() {
        let bytes = [TAG_LAT, 0x00, 0x01];
        assert!(matches!(
            decode_payload(&bytes),
            Err(CodecError::Truncated)
        ));
    }

    #[test]
    fn decode_rejects_unknown_tag() {
        let bytes = [0x20, 0x01];
        assert!(matches!(
            decode_payload(&bytes),
            Err(CodecError::UnknownField(0x20))
        ));
    }

    #[test]
    fn oversized_payload_is_rejected() {
        let record = DeviceApps {
            // Large app ids take 6 bytes each on the wire, so this payload
            // lands well over MAX_VALUE_BYTES.
            apps: vec![u32::MAX; 200_000],
            ..sample_record()
        };

        assert!(matches!(
            encode_record(&record),
            Err(CodecError::PayloadTooLarge(_))
        ));
    }
}
