use super::constants::*;

/// Rotates a byte left by `shift` bit positions (circular). The rotation is
/// computed in a wider integer and truncated back to 8 bits, so no shifted
/// bit ever leaks past position 7.
pub fn rotl_byte(value: u8, shift: u32) -> u8 {
    let tvalue = value as u32;
    (((tvalue << shift) | (tvalue >> (8 - shift))) & 0xFF) as u8
}

/// Rotates a byte right by `shift` bit positions (circular).
pub fn rotr_byte(value: u8, shift: u32) -> u8 {
    let tvalue = value as u32;
    (((tvalue >> shift) | (tvalue << (8 - shift))) & 0xFF) as u8
}

pub fn xor_block(block: &[u8; BLOCK_SIZE], key: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        out[i] = block[i] ^ key[i];
    }
    out
}

pub fn rotl_block(block: &[u8; BLOCK_SIZE], shift: u32) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        out[i] = rotl_byte(block[i], shift);
    }
    out
}

pub fn rotr_block(block: &[u8; BLOCK_SIZE], shift: u32) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        out[i] = rotr_byte(block[i], shift);
    }
    out
}

/// Exchanges bytes 0<->1 and 2<->3. Self-inverse.
pub fn swap_pairs(block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    [block[1], block[0], block[3], block[2]]
}
