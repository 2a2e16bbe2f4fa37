//! Pure dimension math for fitting a source image onto a fixed-size canvas.
//!
//! All functions here are pure and testable without any I/O or pixel data.

/// Largest dimensions that fit inside `target` while preserving the source
/// aspect ratio.
///
/// The relatively longer source edge pins to the corresponding target edge;
/// the other is computed in f64 and rounded to the nearest pixel. Both results
/// are clamped to at least 1px so extreme aspect ratios (a 10000×1 banner into
/// an 18×240 spine) still produce an encodable sliver instead of a zero-size
/// image.
///
/// Guarantees `fit.0 <= target.0 && fit.1 <= target.1`.
pub fn fit_within(source: (u32, u32), target: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;

    let source_ratio = src_w as f64 / src_h as f64;
    let target_ratio = tgt_w as f64 / tgt_h as f64;

    if source_ratio > target_ratio {
        // Source is relatively wider: width pins to the target
        let h = (tgt_w as f64 / source_ratio).round() as u32;
        (tgt_w.max(1), h.clamp(1, tgt_h))
    } else {
        // Source is relatively taller (or the ratios match): height pins
        let w = (tgt_h as f64 * source_ratio).round() as u32;
        (w.clamp(1, tgt_w), tgt_h.max(1))
    }
}

/// Top-left placement that centers `inner` on `outer`.
///
/// Floor division, so the extra pixel of an odd margin always lands on the
/// bottom/right edge and repeated runs place the image identically.
/// Expects `inner <= outer` on both axes (as [`fit_within`] guarantees).
pub fn center_offsets(inner: (u32, u32), outer: (u32, u32)) -> (u32, u32) {
    (
        outer.0.saturating_sub(inner.0) / 2,
        outer.1.saturating_sub(inner.1) / 2,
    )
}
