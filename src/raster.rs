//! RGBA input raster supplied by an external decoder.
//!
//! Any decoder (image loader, video frame grabber, webcam capture) must
//! produce exactly this shape: width, height, and an interleaved RGBA byte
//! buffer in row-major order. The raster is the pipeline's source of truth
//! and is never mutated.

use thiserror::Error;

/// Errors raised when constructing a raster from decoded bytes.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Buffer length does not match width × height × 4.
    #[error("RGBA buffer has {actual} bytes, expected {expected} for {width}x{height}")]
    SizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Decoded RGBA raster, row-major, 4 bytes per pixel.
#[derive(Debug, Clone)]
pub struct Raster {
    /// Interleaved R,G,B,A bytes.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Raster {
    /// Create a zeroed raster of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; width as usize * height as usize * 4],
            width,
            height,
        }
    }

    /// Build a raster from decoded RGBA bytes, validating the buffer size.
    ///
    /// A mismatched buffer is a caller contract violation and is rejected
    /// here so the pipeline itself never has to guard against it.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(RasterError::SizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Width / height ratio of the source.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Access pixel (x, y) as (r, g, b, a).
    ///
    /// # Panics
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 4) as usize;
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }
}

impl From<image::RgbaImage> for Raster {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            data: img.into_raw(),
            width,
            height,
        }
    }
}
