//! Data codeword composition: byte-mode header, padding, block split and
//! interleaving
//!
//! The output of [`build_codewords`] is the exact byte sequence the zig-zag
//! placement consumes: data codewords interleaved across blocks, then EC
//! codewords interleaved across blocks.

use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::{ec_block_info, num_data_codewords};
use crate::models::{ECLevel, Version};

/// Mode indicator for 8-bit byte mode
const MODE_BYTE: u32 = 0b0100;

/// Alternating pad codewords from the standard
const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Character count field width in bits for byte mode
pub fn char_count_bits(version: Version) -> usize {
    if version.value() <= 9 { 8 } else { 16 }
}

/// Append-only MSB-first bit buffer
pub struct BitBuffer {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitBuffer {
    /// Create a buffer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            bit_len: 0,
        }
    }

    /// Number of bits appended so far
    pub fn len(&self) -> usize {
        self.bit_len
    }

    /// Whether no bits have been appended
    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Append the low `count` bits of `value`, most significant first
    pub fn append_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 32 && (count == 32 || value >> count == 0));
        for i in (0..count).rev() {
            let byte_index = self.bit_len / 8;
            if byte_index == self.bytes.len() {
                self.bytes.push(0);
            }
            let bit = ((value >> i) & 1) as u8;
            self.bytes[byte_index] |= bit << (7 - self.bit_len % 8);
            self.bit_len += 1;
        }
    }

    /// Consume the buffer; trailing bits of the last byte are zero
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Compose the data codewords for a payload: mode indicator, length field,
/// payload bits, terminator, byte alignment and pad codewords
pub fn compose_data_codewords(payload: &[u8], version: Version) -> Vec<u8> {
    let data_len = num_data_codewords(version, ECLevel::M);
    let capacity_bits = data_len * 8;

    let mut bits = BitBuffer::with_capacity(data_len);
    bits.append_bits(MODE_BYTE, 4);
    bits.append_bits(payload.len() as u32, char_count_bits(version));
    for &byte in payload {
        bits.append_bits(u32::from(byte), 8);
    }
    debug_assert!(bits.len() <= capacity_bits);

    // Terminator of up to four zero bits, clipped at capacity, then
    // zero-fill to the next byte boundary.
    let terminator = (capacity_bits - bits.len()).min(4);
    bits.append_bits(0, terminator);
    let trailing = (8 - bits.len() % 8) % 8;
    bits.append_bits(0, trailing);

    let mut data = bits.into_bytes();
    let mut pad_index = 0;
    while data.len() < data_len {
        data.push(PAD_CODEWORDS[pad_index]);
        pad_index ^= 1;
    }
    data
}

/// Split data codewords into blocks, compute per-block EC codewords and
/// interleave both sequences
///
/// Blocks differ in length by at most one codeword; the shorter blocks come
/// first. Interleaving takes codeword i of every block that has one, then
/// EC codeword i of every block.
pub fn interleave_blocks(data: &[u8], version: Version) -> Vec<u8> {
    let info = ec_block_info(version, ECLevel::M);
    let num_blocks = info.num_blocks;
    let short_len = data.len() / num_blocks;
    let num_short = num_blocks - data.len() % num_blocks;

    let mut blocks: Vec<&[u8]> = Vec::with_capacity(num_blocks);
    let mut offset = 0;
    for i in 0..num_blocks {
        let len = short_len + usize::from(i >= num_short);
        blocks.push(&data[offset..offset + len]);
        offset += len;
    }
    debug_assert_eq!(offset, data.len());

    let rs = ReedSolomonEncoder::new(info.ecc_per_block);
    let ec_blocks: Vec<Vec<u8>> = blocks.iter().map(|block| rs.remainder(block)).collect();

    let long_len = short_len + usize::from(data.len() % num_blocks != 0);
    let mut out = Vec::with_capacity(data.len() + num_blocks * info.ecc_per_block);
    for i in 0..long_len {
        for block in &blocks {
            if i < block.len() {
                out.push(block[i]);
            }
        }
    }
    for i in 0..info.ecc_per_block {
        for ec in &ec_blocks {
            out.push(ec[i]);
        }
    }
    out
}

/// Full codeword stream for a payload at the given version
pub fn build_codewords(payload: &[u8], version: Version) -> Vec<u8> {
    let data = compose_data_codewords(payload, version);
    interleave_blocks(&data, version)
}
