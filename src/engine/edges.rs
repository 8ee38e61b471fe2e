//! Sobel edge detection over the cell-resolution tone buffer.

/// Replace tone with gradient magnitude using the Sobel 3×3 operator.
///
/// The kernels are:
/// ```text
/// Gx:          Gy:
/// [-1  0  1]   [-1 -2 -1]
/// [-2  0  2]   [ 0  0  0]
/// [-1  0  1]   [ 1  2  1]
/// ```
///
/// Interior cells become `min(255, sqrt(gx² + gy²))`. Border cells (first
/// and last row/column) are left at 0 since no full 3×3 neighborhood
/// exists there. Grids narrower than 3 cells in either dimension come back
/// all zero for the same reason.
///
/// When this pass is enabled, its output replaces the tone buffer entirely:
/// edge strength becomes the tone fed to dithering and glyph mapping. The
/// color buffer is never involved.
///
/// # Arguments
/// * `tone` - Tone values, row-major, `width * height` entries
/// * `width` - Grid width in cells
/// * `height` - Grid height in cells
pub fn sobel(tone: &[f32], width: u32, height: u32) -> Vec<f32> {
    let mut out = vec![0.0f32; tone.len()];
    if width < 3 || height < 3 || tone.len() < (width * height) as usize {
        return out;
    }

    let w = width as usize;
    for y in 1..(height as usize - 1) {
        for x in 1..(w - 1) {
            let tl = tone[(y - 1) * w + (x - 1)];
            let tc = tone[(y - 1) * w + x];
            let tr = tone[(y - 1) * w + (x + 1)];
            let ml = tone[y * w + (x - 1)];
            let mr = tone[y * w + (x + 1)];
            let bl = tone[(y + 1) * w + (x - 1)];
            let bc = tone[(y + 1) * w + x];
            let br = tone[(y + 1) * w + (x + 1)];

            let gx = -tl + tr - 2.0 * ml + 2.0 * mr - bl + br;
            let gy = -tl - 2.0 * tc - tr + bl + 2.0 * bc + br;

            out[y * w + x] = (gx * gx + gy * gy).sqrt().min(255.0);
        }
    }

    out
}
