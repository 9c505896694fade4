//! Blocky downscale/upscale over an RGBA8 buffer
//!
//! Reference implementation of [`super::Canvas::pixelate`] for backends that
//! rasterize on the CPU. Both passes use nearest-neighbour sampling.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PixelateError {
    #[error("buffer holds {actual} bytes, a {width}x{height} RGBA image needs {expected}")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// Pixelate `pixels` (row-major RGBA8) in place
///
/// A factor of 0 or 1 leaves the image unchanged.
pub fn pixelate_rgba(
    pixels: &mut [u8],
    width: usize,
    height: usize,
    factor: u32,
) -> Result<(), PixelateError> {
    let expected = width * height * 4;
    if pixels.len() != expected {
        return Err(PixelateError::BufferSize {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }
    let factor = factor as usize;
    if factor <= 1 || width == 0 || height == 0 {
        return Ok(());
    }

    let small_w = (width / factor).max(1);
    let small_h = (height / factor).max(1);

    let mut small = vec![0u8; small_w * small_h * 4];
    for sy in 0..small_h {
        let y = sy * height / small_h;
        for sx in 0..small_w {
            let x = sx * width / small_w;
            let src = (y * width + x) * 4;
            let dst = (sy * small_w + sx) * 4;
            small[dst..dst + 4].copy_from_slice(&pixels[src..src + 4]);
        }
    }

    for y in 0..height {
        let sy = y * small_h / height;
        for x in 0..width {
            let sx = x * small_w / width;
            let src = (sy * small_w + sx) * 4;
            let dst = (y * width + x) * 4;
            pixels[dst..dst + 4].copy_from_slice(&small[src..src + 4]);
        }
    }

    Ok(())
}
