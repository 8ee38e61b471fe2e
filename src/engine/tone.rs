//! Per-cell tonal adjustment: brightness, contrast, gamma, inversion.

/// Adjust one luminance value.
///
/// The steps apply in a fixed order:
/// 1. contrast scales around the 128 midpoint, brightness offsets
///    (`1.0` is neutral for both)
/// 2. clamp to [0, 255]
/// 3. gamma correction `255 * (v/255)^(1/gamma)`, skipped when gamma is
///    exactly 1.0 so the neutral setting stays bit-identical
/// 4. inversion
///
/// Pure per-cell function with no dependency on neighbors; runs before any
/// dithering.
///
/// # Example
/// ```
/// use asciiframe::engine::tone::adjust;
/// // Neutral parameters are the identity
/// assert_eq!(adjust(100.0, 1.0, 1.0, 1.0, false), 100.0);
/// assert_eq!(adjust(100.0, 1.0, 1.0, 1.0, true), 155.0);
/// ```
pub fn adjust(gray: f32, brightness: f32, contrast: f32, gamma: f32, invert: bool) -> f32 {
    let mut v = (gray - 128.0) * contrast + 128.0 + (brightness - 1.0) * 255.0;
    v = v.clamp(0.0, 255.0);
    if gamma != 1.0 {
        v = 255.0 * (v / 255.0).powf(1.0 / gamma);
    }
    if invert {
        v = 255.0 - v;
    }
    v
}

/// Adjust every value of a tone buffer in place.
pub fn adjust_buffer(tone: &mut [f32], brightness: f32, contrast: f32, gamma: f32, invert: bool) {
    for v in tone.iter_mut() {
        *v = adjust(*v, brightness, contrast, gamma, invert);
    }
}
