use super::constants::KEY_SIZE;
use super::utils::rotl_byte;

/// Folds an arbitrary-length key into the fixed 4-byte key the schedule
/// expects. Byte `i` of the input is XOR-ed into accumulator position
/// `i % 4`, then every accumulator byte is rotated left 3 bits and XOR-ed
/// with the input length (mod 256).
///
/// An empty input yields the all-zero key. The cipher accepts it, but
/// callers should treat it as a degenerate key, not a useful one.
pub fn derive_key(input: &[u8]) -> [u8; KEY_SIZE] {
    let mut key = [0u8; KEY_SIZE];

    if input.is_empty() {
        return key;
    }

    for (i, &byte) in input.iter().enumerate() {
        key[i % KEY_SIZE] ^= byte;
    }

    let length_mix = (input.len() & 0xFF) as u8;
    for byte in key.iter_mut() {
        *byte = rotl_byte(*byte, 3) ^ length_mix;
    }

    key
}
