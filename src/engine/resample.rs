//! Area-average resampling from source pixels to the character grid.

use crate::raster::Raster;

/// RGB color for one output cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Source pixel range covered by output cell index `i` at ratio `ratio`.
///
/// The region is `[floor(i*ratio), ceil((i+1)*ratio))` clamped to `limit`,
/// so adjacent cells tile the source without gaps regardless of how the
/// dimensions divide.
#[inline]
fn cell_span(i: u32, ratio: f32, limit: u32) -> (u32, u32) {
    let start = (i as f32 * ratio).floor() as u32;
    let end = (((i + 1) as f32 * ratio).ceil() as u32).min(limit);
    (start, end)
}

/// Downscale a raster to a per-cell luminance grid by box-filter averaging.
///
/// For each output cell, every source pixel whose area falls within the
/// cell's proportional region contributes its BT.601 weighted luminance
/// (`0.299R + 0.587G + 0.114B`); the cell value is the plain average.
/// Cells whose region is empty get 0.
///
/// # Arguments
/// * `raster` - Source RGBA raster
/// * `out_w` - Output width in cells
/// * `out_h` - Output height in cells
///
/// # Returns
/// A row-major `Vec<f32>` of length `out_w * out_h`, values in [0, 255].
pub fn luminance_grid(raster: &Raster, out_w: u32, out_h: u32) -> Vec<f32> {
    if out_w == 0 || out_h == 0 {
        return Vec::new();
    }

    let src_w = raster.width;
    let src_h = raster.height;
    let x_ratio = src_w as f32 / out_w as f32;
    let y_ratio = src_h as f32 / out_h as f32;

    let mut grid = Vec::with_capacity(out_w as usize * out_h as usize);

    for y in 0..out_h {
        let (sy_start, sy_end) = cell_span(y, y_ratio, src_h);
        for x in 0..out_w {
            let (sx_start, sx_end) = cell_span(x, x_ratio, src_w);

            let mut sum = 0.0f32;
            let mut count = 0u32;
            for sy in sy_start..sy_end {
                for sx in sx_start..sx_end {
                    let idx = ((sy * src_w + sx) * 4) as usize;
                    let r = raster.data[idx] as f32;
                    let g = raster.data[idx + 1] as f32;
                    let b = raster.data[idx + 2] as f32;
                    sum += 0.299 * r + 0.587 * g + 0.114 * b;
                    count += 1;
                }
            }

            grid.push(if count > 0 { sum / count as f32 } else { 0.0 });
        }
    }

    grid
}

/// Downscale a raster to per-cell average colors over the same regions as
/// [`luminance_grid`].
///
/// Each channel is averaged independently and clamped to [0, 255]. Cells
/// with an empty region are black.
pub fn color_grid(raster: &Raster, out_w: u32, out_h: u32) -> Vec<CellColor> {
    if out_w == 0 || out_h == 0 {
        return Vec::new();
    }

    let src_w = raster.width;
    let src_h = raster.height;
    let x_ratio = src_w as f32 / out_w as f32;
    let y_ratio = src_h as f32 / out_h as f32;

    let mut grid = Vec::with_capacity(out_w as usize * out_h as usize);

    for y in 0..out_h {
        let (sy_start, sy_end) = cell_span(y, y_ratio, src_h);
        for x in 0..out_w {
            let (sx_start, sx_end) = cell_span(x, x_ratio, src_w);

            let mut r_sum = 0u64;
            let mut g_sum = 0u64;
            let mut b_sum = 0u64;
            let mut count = 0u64;
            for sy in sy_start..sy_end {
                for sx in sx_start..sx_end {
                    let idx = ((sy * src_w + sx) * 4) as usize;
                    r_sum += raster.data[idx] as u64;
                    g_sum += raster.data[idx + 1] as u64;
                    b_sum += raster.data[idx + 2] as u64;
                    count += 1;
                }
            }

            grid.push(if count > 0 {
                CellColor {
                    r: (r_sum / count).min(255) as u8,
                    g: (g_sum / count).min(255) as u8,
                    b: (b_sum / count).min(255) as u8,
                }
            } else {
                CellColor::default()
            });
        }
    }

    grid
}
