use thiserror::Error;

/// Errors from encoding or decoding store payloads
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("encoded payload is {0} bytes, over the store value limit")]
    PayloadTooLarge(usize),

    #[error("payload truncated")]
    Truncated,

    #[error("unknown field tag {0:#04x} in payload")]
    UnknownField(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            CodecError::PayloadTooLarge(2_000_000).to_string(),
            "encoded payload is 2000000 bytes, over the store value limit"
        );
        assert_eq!(CodecError::Truncated.to_string(), "payload truncated");
        assert_eq!(
            CodecError::UnknownField(0x20).to_string(),
            "unknown field tag 0x20 in payload"
        );
    }
}
