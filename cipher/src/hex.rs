use super::CipherError;

use ::hex::FromHexError;

/// Encodes bytes as lowercase hex, two digits per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Decodes a hex string back into bytes. The length must be even and every
/// character a hex digit.
pub fn from_hex(src: &str) -> Result<Vec<u8>, CipherError> {
    ::hex::decode(src).map_err(|e| match e {
        FromHexError::OddLength => CipherError::InvalidHexLength,
        _ => CipherError::InvalidHexDigit,
    })
}
