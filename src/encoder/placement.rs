//! Zig-zag placement of the interleaved codeword stream into the module grid

use crate::models::BitMatrix;

/// Place codeword bits MSB-first along the standard traversal
///
/// Columns are walked right to left in pairs, skipping column 6 entirely,
/// with the vertical direction alternating every pair. Only non-reserved
/// cells are written; cells left over once the stream runs out stay light
/// (the remainder bits). Returns the number of data cells visited.
pub fn place_codewords(modules: &mut BitMatrix, reserved: &BitMatrix, codewords: &[u8]) -> usize {
    let size = modules.size();
    let total_bits = codewords.len() * 8;
    let mut bit_idx = 0usize;
    let mut upward = true;
    let mut col = size as i32 - 1;

    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }

        let mut place_cell = |row: usize, c: i32| {
            if c < 0 {
                return;
            }
            let x = c as usize;
            if reserved.get(x, row) {
                return;
            }
            let dark = bit_idx < total_bits
                && (codewords[bit_idx >> 3] >> (7 - (bit_idx & 7))) & 1 != 0;
            modules.set(x, row, dark);
            bit_idx += 1;
        };

        if upward {
            for row in (0..size).rev() {
                place_cell(row, col);
                place_cell(row, col - 1);
            }
        } else {
            for row in 0..size {
                place_cell(row, col);
                place_cell(row, col - 1);
            }
        }

        upward = !upward;
        col -= 2;
    }

    bit_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_patterns::SymbolCanvas;
    use crate::encoder::tables::{num_raw_data_modules, num_total_codewords};
    use crate::models::Version;

    #[test]
    fn test_every_free_cell_is_visited() {
        for v in [1u8, 2, 7, 14, 32, 40] {
            let version = Version::new(v);
            let codewords = vec![0u8; num_total_codewords(version)];
            let (mut modules, reserved) = SymbolCanvas::new(version).into_parts();
            let visited = place_codewords(&mut modules, &reserved, &codewords);
            assert_eq!(visited, num_raw_data_modules(version), "version {}", v);
            // Remainder bits past the codeword stream are 0, 3, 4 or 7.
            let remainder = visited - codewords.len() * 8;
            assert!(matches!(remainder, 0 | 3 | 4 | 7), "version {}", v);
        }
    }

    #[test]
    fn test_traversal_starts_bottom_right_upward() {
        let version = Version::new(1);
        let size = version.size();
        let mut codewords = vec![0u8; num_total_codewords(version)];
        codewords[0] = 0b1010_0000;
        let (mut modules, reserved) = SymbolCanvas::new(version).into_parts();
        place_codewords(&mut modules, &reserved, &codewords);

        // First pair of bits lands in the bottom-right corner cells, then
        // the scan moves one row up.
        assert!(modules.get(size - 1, size - 1));
        assert!(!modules.get(size - 2, size - 1));
        assert!(modules.get(size - 1, size - 2));
        assert!(!modules.get(size - 2, size - 2));
    }

    #[test]
    fn test_reserved_cells_untouched() {
        let version = Version::new(1);
        let (mut modules, reserved) = SymbolCanvas::new(version).into_parts();
        let before = modules.clone();
        let codewords = vec![0xFFu8; num_total_codewords(version)];
        place_codewords(&mut modules, &reserved, &codewords);
        for y in 0..version.size() {
            for x in 0..version.size() {
                if reserved.get(x, y) {
                    assert_eq!(modules.get(x, y), before.get(x, y));
                } else {
                    assert!(modules.get(x, y));
                }
            }
        }
    }
}
