//! qr_gen - QR code symbol encoder
//!
//! A pure Rust QR Code (Model 2) encoder: byte-mode payloads at error
//! correction level M, automatic selection of the smallest fitting version
//! (1-40) and mask optimization over the standard penalty rules.
//!
//! The encoder produces a plain boolean module matrix; rendering to a
//! terminal, SVG or raster image lives in [`utils::render`] and any other
//! consumer can paint the matrix directly.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (codewords, matrix layout, masking, metadata)
pub mod encoder;
/// Core data structures (QrSymbol, BitMatrix, Version, MaskPattern)
pub mod models;
/// Rendering utilities (console art, SVG, raster images)
pub mod utils;

pub use encoder::qr_encoder::{EncodeError, QrEncoder};
pub use models::{BitMatrix, ECLevel, MaskPattern, QrSymbol, Version};

/// Encode a byte payload into a QR symbol
///
/// Uses byte mode at EC level M and the smallest version that fits. The
/// only failure is a payload past the version 40 capacity of 2331 bytes.
///
/// # Example
/// ```
/// let symbol = qr_gen::encode(b"HELLO").unwrap();
/// assert_eq!(symbol.size(), 21);
/// ```
pub fn encode(payload: &[u8]) -> Result<QrSymbol, EncodeError> {
    QrEncoder::new().encode(payload)
}

/// Encode UTF-8 text into a QR symbol
pub fn encode_text(text: &str) -> Result<QrSymbol, EncodeError> {
    encode(text.as_bytes())
}

use rayon::prelude::*;

/// Encode many payloads in parallel
///
/// Each symbol is still encoded by the same single-threaded pipeline;
/// parallelism is purely across payloads, so results match [`encode`]
/// call for call and come back in input order.
pub fn encode_batch<T: AsRef<[u8]> + Sync>(payloads: &[T]) -> Vec<Result<QrSymbol, EncodeError>> {
    payloads
        .par_iter()
        .map(|payload| encode(payload.as_ref()))
        .collect()
}
