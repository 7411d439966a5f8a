//! GF(256) field arithmetic for Reed-Solomon coding
//!
//! QR codes use the field generated by x^8 + x^4 + x^3 + x^2 + 1 (0x11D).

use std::sync::OnceLock;

/// Exponent/logarithm lookup tables, built once and read-only afterwards.
///
/// `exp` carries two periods of alpha^i so `gf_mul` can index by the plain
/// sum of two logarithms without a reduction step.
struct GfTables {
    exp: [u8; 510],
    log: [u8; 256],
}

static GF_TABLES: OnceLock<GfTables> = OnceLock::new();

fn tables() -> &'static GfTables {
    GF_TABLES.get_or_init(|| {
        let mut exp = [0u8; 510];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            exp[i + 255] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= 0x11D;
            }
        }
        GfTables { exp, log }
    })
}

/// Multiply two field elements; zero annihilates
pub fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let t = tables();
    t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
}

/// alpha^i for the field generator alpha = 2
pub fn gf_exp(i: usize) -> u8 {
    tables().exp[i % 255]
}
