//! # Text Codec
//!
//! Converts raw byte sequences supplied by transaction callers into
//! validated UTF-8 strings. There is no lossy path: invalid input is an
//! [`EncodingError`], never a replacement character.

use crate::error::EncodingError;

/// Decode `bytes` as UTF-8.
///
/// # Errors
///
/// Returns [`EncodingError`] with the length of the valid prefix when the
/// input contains an invalid or truncated UTF-8 sequence.
pub fn decode_text(bytes: &[u8]) -> Result<String, EncodingError> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok(s.to_owned()),
        Err(e) => Err(EncodingError {
            field: None,
            valid_up_to: e.valid_up_to(),
            len: bytes.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_decodes() {
        assert_eq!(decode_text(b"My Art").unwrap(), "My Art");
    }

    #[test]
    fn test_empty_decodes() {
        assert_eq!(decode_text(b"").unwrap(), "");
    }

    #[test]
    fn test_multibyte_decodes() {
        let s = "descrição ✓";
        assert_eq!(decode_text(s.as_bytes()).unwrap(), s);
    }

    #[test]
    fn test_invalid_byte_rejected() {
        let err = decode_text(&[b'a', b'b', 0xff, b'c']).unwrap_err();
        assert_eq!(err.valid_up_to, 2);
        assert_eq!(err.len, 4);
        assert_eq!(err.field, None);
    }

    #[test]
    fn test_truncated_sequence_rejected() {
        // First two bytes of a three-byte sequence.
        let err = decode_text(&[0xe2, 0x9c]).unwrap_err();
        assert_eq!(err.valid_up_to, 0);
    }

    #[test]
    fn test_field_name_in_message() {
        let err = decode_text(&[0xc3]).unwrap_err().for_field("titulo");
        assert_eq!(
            err.to_string(),
            "invalid utf-8 in titulo: valid up to byte 0 of 1"
        );
    }
}
