//! QR specification tables (ECC codewords/blocks) and codeword counts

use crate::models::{ECLevel, Version};

/// Block structure for one version and EC level
pub struct EcBlockInfo {
    /// Number of Reed-Solomon blocks the data codewords split into
    pub num_blocks: usize,
    /// EC codewords appended to every block
    pub ecc_per_block: usize,
}

// Tables from the QR Code specification (Model 2).
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Look up the block structure for a version and EC level
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let idx = ec_level_index(ec_level);
    let v = version.value() as usize;
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
    }
}

/// Modules available for codeword bits once function patterns and metadata
/// zones are excluded
pub fn num_raw_data_modules(version: Version) -> usize {
    let v = version.value() as usize;
    let mut result = (16 * v + 128) * v + 64;
    if v >= 2 {
        let num_align = v / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if v >= 7 {
            result -= 36;
        }
    }
    result
}

/// Total codeword capacity of the symbol (data plus EC)
pub fn num_total_codewords(version: Version) -> usize {
    num_raw_data_modules(version) / 8
}

/// Data codeword capacity at the given EC level
pub fn num_data_codewords(version: Version, ec_level: ECLevel) -> usize {
    let info = ec_block_info(version, ec_level);
    num_total_codewords(version) - info.ecc_per_block * info.num_blocks
}

fn ec_level_index(ec_level: ECLevel) -> usize {
    match ec_level {
        ECLevel::L => 0,
        ECLevel::M => 1,
        ECLevel::Q => 2,
        ECLevel::H => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_codewords() {
        assert_eq!(num_total_codewords(Version::new(1)), 26);
        assert_eq!(num_total_codewords(Version::new(2)), 44);
        assert_eq!(num_total_codewords(Version::new(7)), 196);
        assert_eq!(num_total_codewords(Version::new(40)), 3706);
    }

    #[test]
    fn test_data_codewords_level_m() {
        assert_eq!(num_data_codewords(Version::new(1), ECLevel::M), 16);
        assert_eq!(num_data_codewords(Version::new(5), ECLevel::M), 86);
        assert_eq!(num_data_codewords(Version::new(40), ECLevel::M), 2334);
    }

    #[test]
    fn test_block_info_level_m() {
        let info = ec_block_info(Version::new(1), ECLevel::M);
        assert_eq!(info.num_blocks, 1);
        assert_eq!(info.ecc_per_block, 10);

        let info = ec_block_info(Version::new(8), ECLevel::M);
        assert_eq!(info.num_blocks, 4);
        assert_eq!(info.ecc_per_block, 22);

        let info = ec_block_info(Version::new(40), ECLevel::M);
        assert_eq!(info.num_blocks, 49);
        assert_eq!(info.ecc_per_block, 28);
    }

    #[test]
    fn test_ec_codewords_never_exceed_total() {
        for v in 1..=40u8 {
            let version = Version::new(v);
            for level in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
                let info = ec_block_info(version, level);
                assert!(info.ecc_per_block * info.num_blocks < num_total_codewords(version));
            }
        }
    }
}
