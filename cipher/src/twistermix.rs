use super::constants::*;
use super::sbox::{inv_sbox, sbox};
use super::utils::*;
use super::{CipherBlock, CipherError};

/// TwisterMix block cipher: 8 rounds of XOR-with-subkey, S-box, left
/// rotation by 3 and byte-pair swap over a 4-byte block.
#[derive(Debug)]
pub struct Cipher32 {
    ks: [[u8; BLOCK_SIZE]; NUM_SUBKEYS],
}

impl Cipher32 {
    /// Creates a new TwisterMix cipher. The key argument must be 4 bytes.
    ///
    /// The subkey schedule depends only on the key, so it is computed once
    /// here instead of once per block.
    pub fn new(key: &[u8]) -> Result<Cipher32, CipherError> {
        if key.len() != KEY_SIZE {
            return Err(CipherError::InvalidKeyLength);
        }

        let key: [u8; KEY_SIZE] = key.try_into().expect("Mismatch size in key");

        Ok(Cipher32 {
            ks: gen_subkeys(&key),
        })
    }
}

/// Derives the 8 round subkeys from a 4-byte key. Round `r` XORs each state
/// byte with `r*17 + i*3` and rotates it left `(r % 7) + 1` bits; the
/// working state then byte-rotates left for the next round.
pub(crate) fn gen_subkeys(key: &[u8; KEY_SIZE]) -> [[u8; BLOCK_SIZE]; NUM_SUBKEYS] {
    let mut ks = [[0u8; BLOCK_SIZE]; NUM_SUBKEYS];
    let mut state = *key;

    for (r, subkey) in ks.iter_mut().enumerate() {
        for i in 0..BLOCK_SIZE {
            let mixed = state[i] ^ (r as u8 * SUBKEY_ROUND_STEP + i as u8 * SUBKEY_BYTE_STEP);
            subkey[i] = rotl_byte(mixed, (r % 7) as u32 + 1);
        }
        state = [state[1], state[2], state[3], state[0]];
    }

    ks
}

impl CipherBlock for Cipher32 {
    fn encrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError> {
        if src.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidPlaintextLength);
        }

        if dst.len() < BLOCK_SIZE {
            return Err(CipherError::InvalidCiphertextLength);
        }

        let mut block: [u8; BLOCK_SIZE] = src[..BLOCK_SIZE]
            .try_into()
            .expect("Mismatch size in block");

        for subkey in self.ks.iter() {
            block = xor_block(&block, subkey);
            block = sbox(&block);
            block = rotl_block(&block, ROUND_ROTATION);
            block = swap_pairs(&block);
        }

        dst[..BLOCK_SIZE].copy_from_slice(&block);

        Ok(())
    }

    /// Decrypt runs the rounds in reverse order, each step undone in the
    /// opposite order it was applied.
    fn decrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError> {
        if src.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidCiphertextLength);
        }

        if dst.len() < BLOCK_SIZE {
            return Err(CipherError::InvalidPlaintextLength);
        }

        let mut block: [u8; BLOCK_SIZE] = src[..BLOCK_SIZE]
            .try_into()
            .expect("Mismatch size in block");

        for subkey in self.ks.iter().rev() {
            block = swap_pairs(&block);
            block = rotr_block(&block, ROUND_ROTATION);
            block = inv_sbox(&block);
            block = xor_block(&block, subkey);
        }

        dst[..BLOCK_SIZE].copy_from_slice(&block);

        Ok(())
    }

    fn get_block_size(&self) -> usize {
        BLOCK_SIZE
    }
}
