//! Mask application, penalty scoring and mask selection
//!
//! Every candidate mask is applied to a scratch copy of the matrix and
//! scored with the four penalty rules from the specification; the cheapest
//! mask wins. Reserved cells are never flipped.

use crate::models::{BitMatrix, MaskPattern};

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// The 1:1:3:1:1 dark/light core of a finder pattern
const FINDER_CORE: [bool; 7] = [true, false, true, true, true, false, true];

/// XOR `mask` over every non-reserved cell
///
/// Masking is an involution, so the same call also removes a mask.
pub fn apply_mask(modules: &mut BitMatrix, reserved: &BitMatrix, mask: MaskPattern) {
    let size = modules.size();
    for y in 0..size {
        for x in 0..size {
            if !reserved.get(x, y) && mask.is_masked(y, x) {
                modules.toggle(x, y);
            }
        }
    }
}

/// Try all eight masks on scratch copies and commit the cheapest
///
/// Evaluation runs in ascending id order with a strict comparison, so ties
/// resolve to the lowest id.
pub fn select_mask(modules: &BitMatrix, reserved: &BitMatrix) -> MaskPattern {
    let mut best = MaskPattern::Pattern0;
    let mut best_score = u32::MAX;
    for mask in MaskPattern::ALL {
        let mut trial = modules.clone();
        apply_mask(&mut trial, reserved, mask);
        let score = penalty_score(&trial);
        if score < best_score {
            best_score = score;
            best = mask;
        }
    }
    #[cfg(debug_assertions)]
    eprintln!("MASK: selected pattern {} (penalty {})", best.id(), best_score);
    best
}

/// Total penalty over the four scoring rules
pub fn penalty_score(modules: &BitMatrix) -> u32 {
    let size = modules.size();
    let mut score = 0u32;

    // Rule 1: runs of five or more same-colored modules per row/column.
    // Rule 3: finder-like 1:1:3:1:1 runs flanked by four light modules.
    for i in 0..size {
        score += run_penalty(size, |j| modules.get(j, i));
        score += run_penalty(size, |j| modules.get(i, j));
        score += finder_penalty(size, |j| modules.get(j, i));
        score += finder_penalty(size, |j| modules.get(i, j));
    }

    // Rule 2: 2x2 blocks of a single color.
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            let color = modules.get(x, y);
            if color == modules.get(x + 1, y)
                && color == modules.get(x, y + 1)
                && color == modules.get(x + 1, y + 1)
            {
                score += PENALTY_N2;
            }
        }
    }

    // Rule 4: dark-module balance, 10 points per 5% deviation from 50%.
    let dark = modules.count_dark();
    let total = size * size;
    let steps = ((dark * 2).abs_diff(total) * 10 / total) as u32;
    score += steps * PENALTY_N4;

    score
}

/// Rule 1 score for a single line
fn run_penalty(size: usize, line: impl Fn(usize) -> bool) -> u32 {
    let mut score = 0;
    let mut run_color = line(0);
    let mut run_len = 1u32;
    for j in 1..size {
        if line(j) == run_color {
            run_len += 1;
        } else {
            if run_len >= 5 {
                score += PENALTY_N1 + (run_len - 5);
            }
            run_color = line(j);
            run_len = 1;
        }
    }
    if run_len >= 5 {
        score += PENALTY_N1 + (run_len - 5);
    }
    score
}

/// Rule 3 score for a single line: each finder-like core with at least four
/// light modules on either side
fn finder_penalty(size: usize, line: impl Fn(usize) -> bool) -> u32 {
    if size < FINDER_CORE.len() {
        return 0;
    }
    let mut score = 0;
    for start in 0..=size - FINDER_CORE.len() {
        if (0..FINDER_CORE.len()).any(|k| line(start + k) != FINDER_CORE[k]) {
            continue;
        }
        let light_before = start >= 4 && (start - 4..start).all(|j| !line(j));
        let light_after = start + 11 <= size && (start + 7..start + 11).all(|j| !line(j));
        if light_before || light_after {
            score += PENALTY_N3;
        }
    }
    score
}
