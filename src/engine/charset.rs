//! Built-in character sets and name resolution.
//!
//! Sets are ordered densest-first: the glyph mapper sends bright tone to
//! index 0, so '@' leads and space trails.

/// Standard 10-glyph density ramp.
pub const STANDARD: &str = "@%#*+=-:. ";

/// Short 5-glyph ramp for a clean look.
pub const SIMPLE: &str = "#+-. ";

/// Unicode block glyphs, pseudo-pixels.
pub const BLOCKS: &str = "█▓▒░ ";

/// Two digits and space.
pub const BINARY: &str = "01 ";

/// Hex digits, all similar density; a stylistic set, not a ramp.
pub const MATRIX: &str = "0123456789abcdef";

/// Line-drawing glyphs, pairs well with edge detection.
pub const EDGES: &str = "/|\\- ";

/// Name → glyph-string table of the built-in sets.
pub const NAMED_SETS: &[(&str, &str)] = &[
    ("standard", STANDARD),
    ("simple", SIMPLE),
    ("blocks", BLOCKS),
    ("binary", BINARY),
    ("matrix", MATRIX),
    ("edges", EDGES),
];

/// Resolve a charset name to its glyph string.
///
/// Built-in names match case-insensitively; anything else passes through
/// unchanged as a literal custom glyph string, so `--charset "01"` and
/// `--charset blocks` both work.
///
/// # Example
/// ```
/// use asciiframe::engine::charset::resolve;
/// assert_eq!(resolve("Standard"), "@%#*+=-:. ");
/// assert_eq!(resolve(".oO"), ".oO");
/// ```
pub fn resolve(name: &str) -> &str {
    for (set_name, glyphs) in NAMED_SETS {
        if set_name.eq_ignore_ascii_case(name) {
            return glyphs;
        }
    }
    name
}
