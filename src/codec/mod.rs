pub mod error;
pub mod payload;
pub mod varint;

// Re-export commonly used types
pub use error::CodecError;
pub use payload::{MAX_VALUE_BYTES, Payload, StoreItem, decode_payload, encode_record};
