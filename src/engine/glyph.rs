//! Final tone-to-character mapping and grid assembly.

use super::resample::CellColor;

/// Margin subtracted from the charset length so tone 255 lands on index 0
/// and tone 0 stays inside the last index.
const INDEX_EPSILON: f32 = 0.01;

/// Map a clamped tone value to a charset index.
///
/// Brightness 255 (white) maps to index 0, conventionally the densest
/// glyph, and 0 (black) to the last index, conventionally space.
///
/// # Example
/// ```
/// use asciiframe::engine::glyph::glyph_index;
/// assert_eq!(glyph_index(255.0, 10), 0);
/// assert_eq!(glyph_index(0.0, 10), 9);
/// ```
#[inline]
pub fn glyph_index(tone: f32, len: usize) -> usize {
    let v = tone.clamp(0.0, 255.0);
    (((255.0 - v) / 255.0) * (len as f32 - INDEX_EPSILON)) as usize
}

/// Render the tone buffer as a plain text grid.
///
/// One character per cell, rows terminated by `\n`. An empty glyph slice
/// yields an empty string.
pub fn render_text(tone: &[f32], width: u32, height: u32, glyphs: &[char]) -> String {
    if glyphs.is_empty() {
        return String::new();
    }

    let w = width as usize;
    let mut text = String::with_capacity((w + 1) * height as usize);
    for y in 0..height as usize {
        for x in 0..w {
            text.push(glyphs[glyph_index(tone[y * w + x], glyphs.len())]);
        }
        text.push('\n');
    }
    text
}

/// Render both the plain text grid and a color markup grid.
///
/// The markup groups each row into maximal same-color runs: a new
/// `<span style="color:rgb(r,g,b)">` opens whenever the cell color differs
/// from the previous cell and closes at the end of the run. The reserved
/// characters `<`, `>` and `&` are escaped inside run text. Rows end with
/// `\n` in both grids.
pub fn render_color(
    tone: &[f32],
    colors: &[CellColor],
    width: u32,
    height: u32,
    glyphs: &[char],
) -> (String, String) {
    if glyphs.is_empty() {
        return (String::new(), String::new());
    }

    let w = width as usize;
    let mut text = String::with_capacity((w + 1) * height as usize);
    let mut markup = String::new();

    for y in 0..height as usize {
        let mut last: Option<CellColor> = None;
        for x in 0..w {
            let idx = y * w + x;
            let ch = glyphs[glyph_index(tone[idx], glyphs.len())];
            text.push(ch);

            let color = colors[idx];
            if last != Some(color) {
                if last.is_some() {
                    markup.push_str("</span>");
                }
                markup.push_str(&format!(
                    "<span style=\"color:rgb({},{},{})\">",
                    color.r, color.g, color.b
                ));
                last = Some(color);
            }
            push_escaped(&mut markup, ch);
        }
        if last.is_some() {
            markup.push_str("</span>");
        }
        text.push('\n');
        markup.push('\n');
    }

    (text, markup)
}

/// Append a character, escaping the three HTML-reserved ones.
fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        _ => out.push(ch),
    }
}
