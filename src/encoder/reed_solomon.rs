//! Reed-Solomon error correction codeword generation
//!
//! QR codes protect each data block with the remainder of a polynomial
//! division over GF(256). A compliant reader recomputes syndromes over the
//! concatenated block, so the generator roots here must be exactly
//! alpha^0 .. alpha^(ec_len - 1).

use crate::encoder::galois::{gf_exp, gf_mul};

/// Reed-Solomon encoder for one error-correction codeword length
pub struct ReedSolomonEncoder {
    /// Monic generator polynomial, highest power first
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Build the degree `ec_len` generator polynomial as the product of
    /// (x - alpha^i) for i in 0..ec_len
    pub fn new(ec_len: usize) -> Self {
        assert!((1..=30).contains(&ec_len), "EC length out of range");
        let mut generator = vec![1u8];
        for i in 0..ec_len {
            let root = gf_exp(i);
            let mut next = vec![0u8; generator.len() + 1];
            for (j, &coeff) in generator.iter().enumerate() {
                // (coeff * x^k) * (x + root)
                next[j] ^= coeff;
                next[j + 1] ^= gf_mul(coeff, root);
            }
            generator = next;
        }
        Self { generator }
    }

    /// Number of EC codewords this encoder produces per block
    pub fn ec_len(&self) -> usize {
        self.generator.len() - 1
    }

    /// Compute the EC codewords for one data block
    ///
    /// Long division of `data * x^ec_len` by the generator; the remainder
    /// comes back highest coefficient first, ready to append to the block.
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let ec_len = self.ec_len();
        let mut rem = vec![0u8; ec_len];
        for &byte in data {
            let factor = byte ^ rem[0];
            rem.copy_within(1.., 0);
            rem[ec_len - 1] = 0;
            for (r, &g) in rem.iter_mut().zip(&self.generator[1..]) {
                *r ^= gf_mul(g, factor);
            }
        }
        rem
    }
}
