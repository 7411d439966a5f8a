//! Main QR encoder - wires everything together

use crate::encoder::bitstream::build_codewords;
use crate::encoder::format::place_format_info;
use crate::encoder::function_patterns::SymbolCanvas;
use crate::encoder::mask::{apply_mask, select_mask};
use crate::encoder::placement::place_codewords;
use crate::encoder::version::{choose_version, place_version_info};
use crate::models::{ECLevel, MaskPattern, QrSymbol};
use std::fmt;

/// Encoding failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Payload length exceeds the version 40 byte-mode capacity at level M
    DataTooLong {
        /// Offending payload length in bytes
        len: usize,
        /// Largest encodable payload length
        max: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::DataTooLong { len, max } => {
                write!(f, "payload of {} bytes exceeds the {} byte capacity", len, max)
            }
        }
    }
}

impl std::error::Error for EncodeError {}

/// QR symbol encoder
///
/// Encodes byte payloads at EC level M into the smallest fitting version.
/// The mask is chosen by penalty scoring unless a fixed pattern was
/// requested.
pub struct QrEncoder {
    /// Fixed mask override; `None` selects by penalty score
    forced_mask: Option<MaskPattern>,
}

impl QrEncoder {
    /// Create an encoder with automatic mask selection
    pub fn new() -> Self {
        Self { forced_mask: None }
    }

    /// Create an encoder that always applies the given mask
    ///
    /// Skips penalty scoring; the pattern is still recorded in the format
    /// information, so the symbol stays readable.
    pub fn with_mask(mask: MaskPattern) -> Self {
        Self {
            forced_mask: Some(mask),
        }
    }

    /// Encode `payload` in byte mode at EC level M
    ///
    /// Picks the smallest version that fits, composes and interleaves the
    /// codewords, lays out the matrix, masks it and writes the metadata.
    pub fn encode(&self, payload: &[u8]) -> Result<QrSymbol, EncodeError> {
        let version = choose_version(payload.len())?;
        let codewords = build_codewords(payload, version);

        let canvas = SymbolCanvas::new(version);
        let (mut modules, reserved) = canvas.into_parts();
        place_codewords(&mut modules, &reserved, &codewords);

        let mask = match self.forced_mask {
            Some(mask) => mask,
            None => select_mask(&modules, &reserved),
        };
        apply_mask(&mut modules, &reserved, mask);

        // Metadata goes in last and is never masked.
        place_format_info(&mut modules, mask);
        if version.value() >= 7 {
            place_version_info(&mut modules, version);
        }

        #[cfg(debug_assertions)]
        eprintln!(
            "ENCODE: {} bytes -> version {}, mask {}",
            payload.len(),
            version.value(),
            mask.id()
        );

        Ok(QrSymbol::new(version, ECLevel::M, mask, modules))
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
