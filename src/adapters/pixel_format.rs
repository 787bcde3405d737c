//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::colour::Colour;

/// Bytes per pixel in an RGBA8 framebuffer.
pub const RGBA_BYTES_PER_PIXEL: usize = 4;

/// Bytes per pixel in a packed RGB8 image.
pub const RGB_BYTES_PER_PIXEL: usize = 3;

/// Writes `src` into an RGBA8 framebuffer, setting alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not exactly `src.len() * 4`.
pub fn copy_colours_to_rgba(src: &[Colour], dst: &mut [u8]) {
    let expected_dst_len = src.len() * RGBA_BYTES_PER_PIXEL;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (colour, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL)) {
        let [r, g, b] = colour.to_rgb8();
        dst_pixel[0] = r;
        dst_pixel[1] = g;
        dst_pixel[2] = b;
        dst_pixel[3] = 255;
    }
}

/// Packs `src` into tightly packed RGB8 bytes.
#[must_use]
pub fn colours_to_rgb8(src: &[Colour]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(src.len() * RGB_BYTES_PER_PIXEL);

    for colour in src {
        bytes.extend_from_slice(&colour.to_rgb8());
    }

    bytes
}

/// Fills an RGBA8 framebuffer with opaque black.
pub fn fill_rgba_black(dst: &mut [u8]) {
    for pixel in dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL) {
        pixel.copy_from_slice(&[0, 0, 0, 255]);
    }
}
