pub const BLOCK_SIZE: usize = 4;
pub const KEY_SIZE: usize = 4;
pub const NUM_ROUNDS: usize = 8;
pub const NUM_SUBKEYS: usize = NUM_ROUNDS;

pub const SBOX_MASK: u8 = 0xAA;
pub const ROUND_ROTATION: u32 = 3;

pub const SUBKEY_ROUND_STEP: u8 = 17;
pub const SUBKEY_BYTE_STEP: u8 = 3;
