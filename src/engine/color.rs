//! Saturation adjustment of the color buffer.
//!
//! Operates only on the color path; the tone buffer is never touched here.

use super::resample::CellColor;

/// Scale each cell's saturation around its own luma.
///
/// For every cell: `luma = 0.299R + 0.587G + 0.114B`, then each channel
/// becomes `clamp(luma + (channel - luma) * saturation, 0, 255)`. A factor
/// of 1.0 is a no-op and skips the pass entirely; 0.0 collapses to
/// grayscale, values above 1.0 push channels away from gray.
pub fn adjust_saturation(colors: &mut [CellColor], saturation: f32) {
    if saturation == 1.0 {
        return;
    }
    for cell in colors.iter_mut() {
        let r = cell.r as f32;
        let g = cell.g as f32;
        let b = cell.b as f32;
        let luma = 0.299 * r + 0.587 * g + 0.114 * b;
        cell.r = (luma + (r - luma) * saturation).clamp(0.0, 255.0).round() as u8;
        cell.g = (luma + (g - luma) * saturation).clamp(0.0, 255.0).round() as u8;
        cell.b = (luma + (b - luma) * saturation).clamp(0.0, 255.0).round() as u8;
    }
}
