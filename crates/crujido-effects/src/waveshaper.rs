//! Soft-knee waveshaping transfer function.
//!
//! The curve has three regions around the clipping threshold `t`, bounded
//! by `a = t(1 − knee)` and `b = t(1 + knee)`:
//!
//! - **Linear** (`|x| ≤ a`): identity, the signal passes unshaped.
//! - **Knee** (`a < |x| < b`): blend between the unshaped magnitude and
//!   the hard ceiling, weighted by the quintic
//!   [`smootherstep`](crujido_core::smootherstep) so the curve joins both
//!   neighbouring regions with continuous first and second derivatives.
//! - **Saturation** (`|x| ≥ b`): hard ceiling at `sign(x) · t`.
//!
//! Everything operates on `|x|` and is re-signed at the end, which makes
//! the function odd by construction. With `knee = 0` the knee region
//! vanishes and the curve degenerates to a plain hard clip at ±t.
//!
//! Because the knee is a weighted average of `|x|` and `t`, the curve is
//! not monotone across the whole knee: past the threshold it rises a
//! little above `t`, peaks, and eases back down to land exactly on `t`
//! at `b`. The output magnitude never leaves `[min(|x|, t), max(|x|, t)]`.

use crujido_core::smootherstep;

/// Shape one sample against a soft-knee clipping curve.
///
/// Pure and stateless; real-time safe; no failure modes. `threshold` is
/// clamped to `[0.01, 1.0]` and `knee` to `[0.0, 0.8]` — callers clamp
/// too, but the function defends itself so no parameter combination can
/// produce a division by zero (`b > a` whenever `knee > 0`, and the
/// `knee == 0` case never reaches the division).
///
/// Guarantees, for clamped `t` and `knee`:
///
/// - odd: `waveshape(-x, ..) == -waveshape(x, ..)`
/// - continuous; monotone non-decreasing for `|x| ≤ t`, then a small
///   overshoot above `t` that decays back onto the ceiling by `|x| = b`
/// - `|y|` lies between `min(|x|, t)` and `max(|x|, t)`
/// - exact at the region boundaries: `|x| = a` maps to `a`,
///   `|x| = b` maps to `t`
///
/// # Example
///
/// ```rust
/// use crujido_effects::waveshape;
///
/// // Below the knee the signal is untouched...
/// assert_eq!(waveshape(0.3, 0.7, 0.1), 0.3);
/// // ...far above it, hard-clipped to the threshold.
/// assert_eq!(waveshape(2.0, 0.7, 0.1), 0.7);
/// assert_eq!(waveshape(-2.0, 0.7, 0.1), -0.7);
/// ```
#[inline]
pub fn waveshape(x: f32, threshold: f32, knee: f32) -> f32 {
    let t = threshold.clamp(0.01, 1.0);
    let knee = knee.clamp(0.0, 0.8);

    let a = t * (1.0 - knee); // knee start
    let b = t * (1.0 + knee); // knee end

    let ax = x.abs();
    if ax <= a {
        return x;
    }

    let sign = if x >= 0.0 { 1.0 } else { -1.0 };
    if ax >= b {
        return sign * t;
    }

    // Map ax in (a, b) to u in (0, 1), then blend toward the hard ceiling.
    let u = (ax - a) / (b - a);
    let s = smootherstep(u);
    sign * ((1.0 - s) * ax + s * t)
}
