use super::constants::*;
use super::utils::{rotl_byte, rotr_byte};

// The nonlinear layer: XOR with a fixed pattern, then a one-bit rotation.
// Both steps are individually invertible, so the inverse applies them the
// other way around.

pub fn sbox_byte(value: u8) -> u8 {
    rotl_byte(value ^ SBOX_MASK, 1)
}

pub fn inv_sbox_byte(value: u8) -> u8 {
    rotr_byte(value, 1) ^ SBOX_MASK
}

pub fn sbox(block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        out[i] = sbox_byte(block[i]);
    }
    out
}

pub fn inv_sbox(block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    for i in 0..BLOCK_SIZE {
        out[i] = inv_sbox_byte(block[i]);
    }
    out
}
