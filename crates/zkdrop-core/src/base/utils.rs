//! Hex helpers for fixed-size byte values.

use thiserror::Error;

/// Error returned when a hex string does not decode into a fixed-size value.
#[derive(Debug, Error, PartialEq)]
pub enum ParseHexError {
    /// The input is not valid hex.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    /// The decoded value has the wrong length.
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Required byte length.
        expected: usize,
        /// Decoded byte length.
        actual: usize,
    },
}

/// Decode a hex string (optionally `0x`-prefixed) into a fixed-size byte array.
///
/// # Errors
/// Returns an error if the input is not hex or does not decode to exactly `N` bytes.
pub fn parse_hex_array<const N: usize>(s: &str) -> Result<[u8; N], ParseHexError> {
    let bytes = hex::decode(s.trim().trim_start_matches("0x"))?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| ParseHexError::InvalidLength {
        expected: N,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_and_plain_hex() {
        assert_eq!(parse_hex_array::<2>("0x0aff"), Ok([0x0a, 0xff]));
        assert_eq!(parse_hex_array::<2>(" 0aff\n"), Ok([0x0a, 0xff]));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            parse_hex_array::<4>("0aff"),
            Err(ParseHexError::InvalidLength {
                expected: 4,
                actual: 2
            })
        );
        assert!(matches!(
            parse_hex_array::<1>("zz"),
            Err(ParseHexError::InvalidHex(_))
        ));
    }
}
