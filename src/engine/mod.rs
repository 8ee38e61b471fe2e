//! ASCII conversion engine.
//!
//! Turns a decoded RGBA raster into a character grid whose glyph density
//! follows the source's luminance, optionally with per-run color markup.
//! The pipeline runs fixed stages over buffers owned by a single call:
//!
//! 1. **Resample**: area-average the raster down to one tone value per
//!    output cell (and, in color mode, one average color per cell)
//! 2. **Tone adjust**: brightness / contrast / gamma / inversion
//! 3. **Edges** (optional): Sobel magnitude replaces the tone buffer
//! 4. **Dither**: ordered or error-diffusion quantization toward the
//!    charset cardinality
//! 5. **Glyph map**: tone to character, rows joined with newlines; color
//!    mode additionally emits run-length color markup
//!
//! Each `convert` call is synchronous, single-threaded and stateless; no
//! buffer survives the call. Concurrency lives at the caller boundary
//! (see [`crate::worker`]).

pub mod charset;
pub mod color;
pub mod dither;
pub mod edges;
pub mod glyph;
pub mod resample;
pub mod tone;

use serde::{Deserialize, Serialize};

pub use dither::DitherMode;
pub use resample::CellColor;

/// Vertical correction for monospace glyphs being roughly twice as tall as
/// wide (≈8px advance vs ~4.8px line height in the reference rendering).
/// Halves the row count relative to naive aspect preservation. Not
/// configurable.
pub const CELL_ASPECT: f32 = 0.5;

/// Options for one conversion. Immutable once passed to [`convert`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Output width in character cells.
    pub columns: u32,
    /// Resolved glyph string, densest first. May be empty, which yields an
    /// empty result. See [`charset::resolve`].
    pub charset: String,
    /// Quantization strategy.
    pub dither: DitherMode,
    /// Invert tone (for light-on-dark vs dark-on-light output).
    pub invert: bool,
    /// Brightness scalar, 1.0 neutral.
    pub brightness: f32,
    /// Contrast scalar, 1.0 neutral.
    pub contrast: f32,
    /// Gamma, 1.0 neutral.
    pub gamma: f32,
    /// Saturation scalar for color mode, 1.0 neutral.
    pub saturation: f32,
    /// Replace tone with Sobel edge magnitude before dithering.
    pub edges: bool,
    /// Emit per-run color markup alongside the text grid.
    pub color: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            columns: 120,
            charset: charset::STANDARD.to_string(),
            dither: DitherMode::None,
            invert: false,
            brightness: 1.0,
            contrast: 1.0,
            gamma: 1.0,
            saturation: 1.0,
            edges: false,
            color: false,
        }
    }
}

/// Result of one conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Plain text grid, rows newline-terminated.
    Text(String),
    /// Color mode: the text grid plus a markup grid with run-length color
    /// spans.
    Color { text: String, markup: String },
}

impl Rendered {
    /// The plain text grid, regardless of mode.
    pub fn text(&self) -> &str {
        match self {
            Rendered::Text(text) => text,
            Rendered::Color { text, .. } => text,
        }
    }

    /// The markup grid, when produced in color mode.
    pub fn markup(&self) -> Option<&str> {
        match self {
            Rendered::Text(_) => None,
            Rendered::Color { markup, .. } => Some(markup),
        }
    }
}

/// Output row count for a source aspect ratio and column count.
///
/// `max(1, floor(columns / aspect * CELL_ASPECT))`, never zero, so even
/// extreme panoramas produce one row.
pub fn grid_rows(src_width: u32, src_height: u32, columns: u32) -> u32 {
    let aspect = if src_height == 0 {
        1.0
    } else {
        src_width as f32 / src_height as f32
    };
    ((columns as f32 / aspect * CELL_ASPECT).floor() as u32).max(1)
}

/// Convert a raster to text art.
///
/// An empty charset yields an empty result rather than an error. The call
/// never fails for well-typed numeric input; structurally invalid rasters
/// are rejected at [`crate::raster::Raster::from_rgba`].
pub fn convert(raster: &crate::raster::Raster, options: &ConvertOptions) -> Rendered {
    let glyphs: Vec<char> = options.charset.chars().collect();
    if glyphs.is_empty() {
        return if options.color {
            Rendered::Color {
                text: String::new(),
                markup: String::new(),
            }
        } else {
            Rendered::Text(String::new())
        };
    }

    let columns = options.columns.max(1);
    let rows = grid_rows(raster.width, raster.height, columns);

    let mut tone = resample::luminance_grid(raster, columns, rows);

    // Color path is independent of the tone pipeline: resample then
    // saturation only. Edge detection never touches it.
    let colors = options.color.then(|| {
        let mut grid = resample::color_grid(raster, columns, rows);
        color::adjust_saturation(&mut grid, options.saturation);
        grid
    });

    tone::adjust_buffer(
        &mut tone,
        options.brightness,
        options.contrast,
        options.gamma,
        options.invert,
    );

    if options.edges {
        tone = edges::sobel(&tone, columns, rows);
    }

    options.dither.apply(&mut tone, columns, rows, glyphs.len());

    match colors {
        Some(colors) => {
            let (text, markup) = glyph::render_color(&tone, &colors, columns, rows, &glyphs);
            Rendered::Color { text, markup }
        }
        None => Rendered::Text(glyph::render_text(&tone, columns, rows, &glyphs)),
    }
}
