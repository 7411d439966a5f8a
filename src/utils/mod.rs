//! Utility functions for consuming encoded symbols
//!
//! This module provides rendering helpers for the matrix the encoder
//! produces:
//! - Console text art
//! - SVG path output
//! - Grayscale raster images (in-memory or saved to disk)

pub mod render;
