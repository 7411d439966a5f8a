//! Rendering consumers for encoded symbols
//!
//! The encoder itself only produces a module matrix; these helpers turn it
//! into console art, an SVG path or a raster image. The quiet zone the
//! standard requires around a symbol is expressed as a `border` measured in
//! modules.

use crate::models::QrSymbol;
use image::{GrayImage, Luma};
use std::path::Path;

/// Render as text art, two characters per module, with a quiet zone
pub fn to_ascii(symbol: &QrSymbol, border: u32) -> String {
    let border = border as i32;
    let size = symbol.size() as i32;
    let mut out = String::new();
    for y in -border..size + border {
        for x in -border..size + border {
            out.push_str(if symbol.module(x, y) { "██" } else { "  " });
        }
        out.push('\n');
    }
    out
}

/// SVG document with one path unit per module and a quiet zone
pub fn to_svg_string(symbol: &QrSymbol, border: u32) -> String {
    let size = symbol.size() as i32;
    let dimension = size + 2 * border as i32;
    let mut result = String::new();
    result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
    result += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 {0} {0}\" stroke=\"none\">\n",
        dimension
    );
    result += "\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n";
    result += "\t<path d=\"";
    let mut first = true;
    for y in 0..size {
        for x in 0..size {
            if symbol.module(x, y) {
                if !first {
                    result += " ";
                }
                first = false;
                result += &format!("M{},{}h1v1h-1z", x + border as i32, y + border as i32);
            }
        }
    }
    result += "\" fill=\"#000000\"/>\n";
    result += "</svg>\n";
    result
}

/// Rasterize to a grayscale image, `scale` pixels per module plus a
/// `border`-module quiet zone on every side
pub fn to_image(symbol: &QrSymbol, scale: u32, border: u32) -> GrayImage {
    assert!(scale > 0, "Scale must be positive");
    let size = symbol.size() as u32;
    let dimension = (size + 2 * border) * scale;
    let mut img = GrayImage::from_pixel(dimension, dimension, Luma([255u8]));
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let mx = (x / scale) as i32 - border as i32;
        let my = (y / scale) as i32 - border as i32;
        if symbol.module(mx, my) {
            *pixel = Luma([0u8]);
        }
    }
    img
}

/// Rasterize and save to a file; the format follows the extension
pub fn save_image<P: AsRef<Path>>(
    symbol: &QrSymbol,
    path: P,
    scale: u32,
    border: u32,
) -> Result<(), image::ImageError> {
    to_image(symbol, scale, border).save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::qr_encoder::QrEncoder;

    #[test]
    fn test_ascii_dimensions() {
        let symbol = QrEncoder::new().encode(b"HELLO").unwrap();
        let art = to_ascii(&symbol, 4);
        let lines: Vec<&str> = art.lines().collect();
        assert_eq!(lines.len(), 21 + 8);
        for line in lines {
            assert_eq!(line.chars().count(), 2 * (21 + 8));
        }
    }

    #[test]
    fn test_image_round_trip() {
        let symbol = QrEncoder::new().encode(b"HELLO").unwrap();
        let scale = 4u32;
        let border = 4u32;
        let img = to_image(&symbol, scale, border);
        assert_eq!(img.width(), (21 + 8) * scale);

        // Sample the center pixel of every module and compare colors.
        for y in 0..symbol.size() as u32 {
            for x in 0..symbol.size() as u32 {
                let px = (x + border) * scale + scale / 2;
                let py = (y + border) * scale + scale / 2;
                let dark = img.get_pixel(px, py).0[0] == 0;
                assert_eq!(dark, symbol.module(x as i32, y as i32), "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_quiet_zone_is_light() {
        let symbol = QrEncoder::new().encode(b"HELLO").unwrap();
        let img = to_image(&symbol, 2, 4);
        for i in 0..img.width() {
            assert_eq!(img.get_pixel(i, 0).0[0], 255);
            assert_eq!(img.get_pixel(0, i).0[0], 255);
        }
    }

    #[test]
    fn test_svg_contains_finder_corner() {
        let symbol = QrEncoder::new().encode(b"HELLO").unwrap();
        let svg = to_svg_string(&symbol, 4);
        assert!(svg.starts_with("<?xml"));
        // Top-left finder corner module, offset by the border.
        assert!(svg.contains("M4,4h1v1h-1z"));
    }
}
