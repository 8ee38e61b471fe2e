//! Quantization strategies: ordered Bayer and error-diffusion dithering.
//!
//! Every strategy walks the tone buffer in one left-to-right, top-to-bottom
//! scan and mutates it in place. Error diffusion pushes each cell's
//! quantization error onto cells the scan has not visited yet, so the scan
//! order is load-bearing and the pass must not be split across rows.

use serde::{Deserialize, Serialize};

/// 4×4 Bayer threshold matrix, values 0-15, tiled across the grid.
#[rustfmt::skip]
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [ 0,  8,  2, 10],
    [12,  4, 14,  6],
    [ 3, 11,  1,  9],
    [15,  7, 13,  5],
];

/// Error-diffusion kernel: (dx, dy, weight) taps relative to the current
/// cell. Taps only reach unvisited cells (dx > 0 on the current row, any dx
/// on later rows) and every kernel's weights sum to exactly 1.0 so a full
/// pass conserves tone energy up to boundary loss.
pub type Kernel = &'static [(i32, i32, f32)];

/// Floyd–Steinberg: the classic compact 4-tap spread.
pub const FLOYD_STEINBERG: Kernel = &[
    (1, 0, 7.0 / 16.0),
    (-1, 1, 3.0 / 16.0),
    (0, 1, 5.0 / 16.0),
    (1, 1, 1.0 / 16.0),
];

/// Atkinson: 6 even taps over two rows. The historical kernel uses 1/8 per
/// tap and drops a quarter of the error; these taps are 1/6 so the sum is 1.
pub const ATKINSON: Kernel = &[
    (1, 0, 1.0 / 6.0),
    (2, 0, 1.0 / 6.0),
    (-1, 1, 1.0 / 6.0),
    (0, 1, 1.0 / 6.0),
    (1, 1, 1.0 / 6.0),
    (0, 2, 1.0 / 6.0),
];

/// Stucki: wide 12-tap spread across two following rows.
pub const STUCKI: Kernel = &[
    (1, 0, 8.0 / 42.0),
    (2, 0, 4.0 / 42.0),
    (-2, 1, 2.0 / 42.0),
    (-1, 1, 4.0 / 42.0),
    (0, 1, 8.0 / 42.0),
    (1, 1, 4.0 / 42.0),
    (2, 1, 2.0 / 42.0),
    (-2, 2, 1.0 / 42.0),
    (-1, 2, 2.0 / 42.0),
    (0, 2, 4.0 / 42.0),
    (1, 2, 2.0 / 42.0),
    (2, 2, 1.0 / 42.0),
];

/// Sierra: 10-tap spread across two following rows.
pub const SIERRA: Kernel = &[
    (1, 0, 5.0 / 32.0),
    (2, 0, 3.0 / 32.0),
    (-2, 1, 2.0 / 32.0),
    (-1, 1, 4.0 / 32.0),
    (0, 1, 5.0 / 32.0),
    (1, 1, 4.0 / 32.0),
    (2, 1, 2.0 / 32.0),
    (-1, 2, 2.0 / 32.0),
    (0, 2, 3.0 / 32.0),
    (1, 2, 2.0 / 32.0),
];

/// Dithering strategy selector.
///
/// A closed enum: `None` passes tone through untouched (quantization then
/// happens implicitly at glyph-mapping time), `Ordered` tiles the Bayer
/// matrix, and the remaining variants are error diffusion distinguished only
/// by their kernel table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DitherMode {
    #[default]
    None,
    Ordered,
    Floyd,
    Atkinson,
    Stucki,
    Sierra,
}

impl DitherMode {
    /// Resolve a selector name, case-insensitively.
    ///
    /// Unknown names are never fatal; they degrade to `None`.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "ordered" | "bayer" => DitherMode::Ordered,
            "floyd" | "floyd-steinberg" => DitherMode::Floyd,
            "atkinson" => DitherMode::Atkinson,
            "stucki" => DitherMode::Stucki,
            "sierra" => DitherMode::Sierra,
            _ => DitherMode::None,
        }
    }

    /// Selector name for display and config round-trips.
    pub fn name(&self) -> &'static str {
        match self {
            DitherMode::None => "none",
            DitherMode::Ordered => "ordered",
            DitherMode::Floyd => "floyd",
            DitherMode::Atkinson => "atkinson",
            DitherMode::Stucki => "stucki",
            DitherMode::Sierra => "sierra",
        }
    }

    /// The diffusion kernel for this mode, if it is an error-diffusion
    /// variant.
    pub fn kernel(&self) -> Option<Kernel> {
        match self {
            DitherMode::Floyd => Some(FLOYD_STEINBERG),
            DitherMode::Atkinson => Some(ATKINSON),
            DitherMode::Stucki => Some(STUCKI),
            DitherMode::Sierra => Some(SIERRA),
            DitherMode::None | DitherMode::Ordered => None,
        }
    }

    /// All error-diffusion kernels with their names, for table-driven tests.
    pub fn diffusion_kernels() -> &'static [(&'static str, Kernel)] {
        &[
            ("floyd", FLOYD_STEINBERG),
            ("atkinson", ATKINSON),
            ("stucki", STUCKI),
            ("sierra", SIERRA),
        ]
    }

    /// Apply this strategy to a tone buffer in place.
    ///
    /// `levels` is the character-set cardinality. Fewer than 2 levels leaves
    /// the buffer untouched: a single glyph has nothing to quantize toward
    /// and the level spacing denominator would be zero.
    pub fn apply(&self, tone: &mut [f32], width: u32, height: u32, levels: usize) {
        if levels < 2 || tone.len() < (width * height) as usize {
            return;
        }
        match self {
            DitherMode::None => {}
            DitherMode::Ordered => ordered(tone, width, height, levels),
            DitherMode::Floyd => error_diffusion(tone, width, height, levels, FLOYD_STEINBERG),
            DitherMode::Atkinson => error_diffusion(tone, width, height, levels, ATKINSON),
            DitherMode::Stucki => error_diffusion(tone, width, height, levels, STUCKI),
            DitherMode::Sierra => error_diffusion(tone, width, height, levels, SIERRA),
        }
    }
}

/// Ordered (Bayer) dithering: nudge each cell by a tiled threshold offset.
///
/// The offset `(matrix/16 - 0.5) * (255/(levels-1))` spans exactly one
/// quantization step, then the cell clamps back to [0, 255]. No error is
/// carried between cells.
fn ordered(tone: &mut [f32], width: u32, height: u32, levels: usize) {
    let step = 255.0 / (levels as f32 - 1.0);
    let w = width as usize;
    for y in 0..height as usize {
        for x in 0..w {
            let idx = y * w + x;
            let m = BAYER_4X4[y % 4][x % 4] as f32;
            let correction = (m / 16.0 - 0.5) * step;
            tone[idx] = (tone[idx] + correction).clamp(0.0, 255.0);
        }
    }
}

/// Generic error diffusion over a `(dx, dy, weight)` kernel.
///
/// Each cell quantizes to the nearest of `levels` equally spaced steps in
/// [0, 255]; the residual is distributed to in-bounds kernel taps. Error
/// pushed past the grid edge is dropped, not wrapped.
fn error_diffusion(tone: &mut [f32], width: u32, height: u32, levels: usize, kernel: Kernel) {
    let w = width as i32;
    let h = height as i32;
    let max_level = (levels - 1) as f32;

    for y in 0..h {
        for x in 0..w {
            let idx = (y * w + x) as usize;
            let old = tone[idx];
            let quantized = (old / 255.0 * max_level).round();
            let new = quantized / max_level * 255.0;
            let err = old - new;
            tone[idx] = new;

            for &(dx, dy, weight) in kernel {
                let nx = x + dx;
                let ny = y + dy;
                if nx >= 0 && nx < w && ny >= 0 && ny < h {
                    tone[(ny * w + nx) as usize] += err * weight;
                }
            }
        }
    }
}
