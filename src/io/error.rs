use std::io;
use thiserror::Error;

/// IO-level errors for log-file reading and line decoding
#[derive(Error, Debug)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("expected 5 tab-separated fields, got {0}")]
    FieldCount(usize),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            IoError::FieldCount(3).to_string(),
            "expected 5 tab-separated fields, got 3"
        );
        assert_eq!(
            IoError::MissingField("device_id").to_string(),
            "missing required field: device_id"
        );
        assert_eq!(
            IoError::InvalidCoordinate("north".to_string()).to_string(),
            "invalid coordinate: north"
        );
    }

    #[test]
    fn io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let wrapped = IoError::from(io_err);

        match wrapped {
            IoError::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }
    }
}
