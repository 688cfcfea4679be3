//! Plain-text extraction. UTF-8 decode, nothing else.

use crate::domain::DomainError;

/// Decode file bytes as UTF-8. Round-trip identity for valid input;
/// invalid UTF-8 is an extraction error.
pub fn decode_plain_text(bytes: &[u8]) -> Result<String, DomainError> {
    String::from_utf8(bytes.to_vec())
        .map_err(|e| DomainError::Extract(format!("invalid UTF-8 in text file: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_round_trips_unchanged() {
        let input = "Speaker 1: Привет!\nSpeaker 2: Grüße — naïve café.\n";
        assert_eq!(decode_plain_text(input.as_bytes()).unwrap(), input);
    }

    #[test]
    fn invalid_utf8_is_an_extraction_error() {
        let err = decode_plain_text(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, DomainError::Extract(_)));
    }
}
