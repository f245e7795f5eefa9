//! TwisterMix cipher core: an 8-round substitution-permutation network over
//! 4-byte blocks, with key derivation, padding and hex transport encoding.
//!
//! TwisterMix is a toy cipher. Its block size, key size and round count are
//! far too small for any real security guarantee; the crate exists to
//! reproduce the exact transform byte-for-byte.

mod constants;
mod sbox;
mod utils;

pub mod ecb;
pub mod hex;
pub mod key;
pub mod twistermix;

pub trait CipherBlock: Send + Sync {
    fn encrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError>;
    fn decrypt(&self, src: &[u8], dst: &mut [u8]) -> Result<(), CipherError>;
    fn get_block_size(&self) -> usize;
}

pub trait CipherProcessor: Send + Sync {
    fn encrypt_blocks(&self, src: &[u8]) -> Vec<u8>;
    fn decrypt_blocks(&self, src: &[u8]) -> Result<Vec<u8>, CipherError>;
}

#[derive(Debug, PartialEq)]
pub enum CipherError {
    InvalidKeyLength,
    InvalidPlaintextLength,
    InvalidCiphertextLength,
    InvalidHexLength,
    InvalidHexDigit,
}
