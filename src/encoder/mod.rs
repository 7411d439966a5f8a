//! QR code encoding modules
//!
//! This module contains all the logic for building a symbol from a byte
//! payload:
//! - Galois field arithmetic and Reed-Solomon error correction
//! - Codeword composition (mode header, padding, block interleave)
//! - Function pattern layout and zig-zag data placement
//! - Mask selection by penalty scoring
//! - Format and version information placement

/// Data codeword composition and block interleaving
pub mod bitstream;
/// Format information placement (EC level + mask, BCH-protected)
pub mod format;
/// Function pattern layout (finder/timing/alignment/dark module) and
/// metadata zone reservation
pub mod function_patterns;
/// GF(256) field arithmetic
pub mod galois;
/// Mask application and penalty scoring
pub mod mask;
/// Zig-zag codeword placement
pub mod placement;
/// Main QR encoder that orchestrates the encoding pipeline
pub mod qr_encoder;
/// Reed-Solomon error correction codeword generation
pub mod reed_solomon;
/// QR specification tables (ECC codewords/blocks)
pub mod tables;
/// Version selection and version information (versions 7-40)
pub mod version;
