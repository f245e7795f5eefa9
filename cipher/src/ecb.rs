use super::constants::BLOCK_SIZE;
use super::{CipherBlock, CipherError, CipherProcessor};

use std::sync::Arc;

/// Appends padding so the buffer length is a positive multiple of the block
/// size. The pad length is always in 1..=4 and every appended byte carries
/// that value; an already-aligned buffer gets a full block of padding.
pub fn pad(data: &mut Vec<u8>) {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    data.resize(data.len() + pad_len, pad_len as u8);
}

/// Strips the padding trailer if a valid one is present and returns whether
/// anything was removed. An empty buffer, a trailer value of 0 or above 4,
/// or mismatched trailer bytes all leave the buffer untouched and return
/// `false`; the bytes are never altered on that path.
pub fn unpad(data: &mut Vec<u8>) -> bool {
    let pad_val = match data.last() {
        Some(&value) => value,
        None => return false,
    };

    if pad_val == 0 || pad_val as usize > BLOCK_SIZE {
        return false;
    }

    let pad_len = pad_val as usize;
    if data.len() < pad_len {
        return false;
    }

    if !data[data.len() - pad_len..].iter().all(|&b| b == pad_val) {
        return false;
    }

    data.truncate(data.len() - pad_len);
    true
}

/// Message-level codec: pads, then runs every 4-byte block through the
/// cipher independently. No chaining and no IV, so identical plaintext
/// blocks produce identical ciphertext blocks.
#[derive(Clone)]
pub struct ECBProcessor {
    block: Arc<dyn CipherBlock>,
    block_size: usize,
}

impl ECBProcessor {
    pub fn new(block: Arc<dyn CipherBlock>) -> ECBProcessor {
        ECBProcessor {
            block_size: block.get_block_size(),
            block,
        }
    }

    /// Same as [`CipherProcessor::decrypt_blocks`], but also reports whether
    /// a valid padding trailer was found and stripped. When the trailer is
    /// malformed the returned bytes are the full decrypted buffer, unchanged
    /// from what the default path yields.
    pub fn decrypt_blocks_checked(&self, src: &[u8]) -> Result<(Vec<u8>, bool), CipherError> {
        if src.len() % self.block_size != 0 {
            return Err(CipherError::InvalidCiphertextLength);
        }

        let mut dst = vec![0u8; src.len()];
        for (src_block, dst_block) in src
            .chunks(self.block_size)
            .zip(dst.chunks_mut(self.block_size))
        {
            self.block.decrypt(src_block, dst_block)?;
        }

        let stripped = unpad(&mut dst);

        Ok((dst, stripped))
    }
}

impl CipherProcessor for ECBProcessor {
    fn encrypt_blocks(&self, src: &[u8]) -> Vec<u8> {
        let mut data = src.to_vec();
        pad(&mut data);

        let mut dst = vec![0u8; data.len()];
        for (src_block, dst_block) in data
            .chunks(self.block_size)
            .zip(dst.chunks_mut(self.block_size))
        {
            self.block.encrypt(src_block, dst_block).unwrap();
        }

        dst
    }

    fn decrypt_blocks(&self, src: &[u8]) -> Result<Vec<u8>, CipherError> {
        let (dst, _) = self.decrypt_blocks_checked(src)?;
        Ok(dst)
    }
}

#[cfg(test)]
mod padding_tests {
    use super::*;

    #[test]
    fn pad_check_lengths() {
        for len in 0..=17usize {
            let mut data: Vec<u8> = (0..len as u8).collect();
            pad(&mut data);

            assert_eq!(data.len() % BLOCK_SIZE, 0, "length of len={} not aligned", len);
            assert!(data.len() > len, "padding of len={} added nothing", len);

            let pad_val = *data.last().unwrap();
            assert!((1..=4).contains(&pad_val), "pad value of len={} out of range", len);
        }
    }

    #[test]
    fn pad_aligned_appends_full_block() {
        let mut data: Vec<u8> = (0..8).collect();
        pad(&mut data);

        assert_eq!(data.len(), 12);
        assert_eq!(&data[8..], &[4, 4, 4, 4]);
    }

    #[test]
    fn pad_empty_appends_full_block() {
        let mut data: Vec<u8> = Vec::new();
        pad(&mut data);

        assert_eq!(data, vec![4, 4, 4, 4]);
    }

    #[test]
    fn unpad_reverses_pad() {
        for len in 0..=17 {
            let original: Vec<u8> = (0..len as u8).map(|b| b.wrapping_add(5)).collect();
            let mut data = original.clone();
            pad(&mut data);

            assert!(unpad(&mut data), "unpad of len={} found no padding", len);
            assert_eq!(data, original);
        }
    }

    #[test]
    fn unpad_empty_is_noop() {
        let mut data: Vec<u8> = Vec::new();
        assert!(!unpad(&mut data));
        assert!(data.is_empty());
    }

    #[test]
    fn unpad_invalid_value_is_noop() {
        let mut data = vec![1, 2, 3, 9];
        assert!(!unpad(&mut data));
        assert_eq!(data, vec![1, 2, 3, 9]);

        let mut data = vec![1, 2, 3, 0];
        assert!(!unpad(&mut data));
        assert_eq!(data, vec![1, 2, 3, 0]);
    }

    #[test]
    fn unpad_mismatched_trailer_is_noop() {
        let mut data = vec![5, 2, 3, 3, 1, 3];
        assert!(!unpad(&mut data));
        assert_eq!(data, vec![5, 2, 3, 3, 1, 3]);
    }

    #[test]
    fn unpad_strips_plausible_trailer() {
        // trailing [2, 2] is indistinguishable from real padding
        let mut data = vec![9, 9, 2, 2];
        assert!(unpad(&mut data));
        assert_eq!(data, vec![9, 9]);
    }
}
