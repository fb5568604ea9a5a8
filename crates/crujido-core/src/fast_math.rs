//! Fast mathematical approximations for coefficient computation.
//!
//! These trade full IEEE 754 precision for speed where the input range is
//! bounded and the result feeds a filter coefficient rather than the audio
//! signal itself. Audio-rate waveshaping keeps using `libm` for full
//! precision.

/// Fast tangent via Padé approximation.
///
/// `tan(x) ≈ x(15 − x²) / (15 − 6x²)`, accurate to < 0.1% for
/// `x ∈ [0, π/4]` — the range produced by cutoff frequencies below a
/// quarter of the sample rate. Used by
/// [`StateVariableFilter`](crate::StateVariableFilter) for cutoffs below
/// 10 kHz, with a `libm::tanf` fallback above.
///
/// # Examples
///
/// ```
/// use crujido_core::fast_math::fast_tan;
///
/// let exact = libm::tanf(0.3);
/// assert!((fast_tan(0.3) - exact).abs() / exact < 0.001);
/// ```
#[inline]
pub fn fast_tan(x: f32) -> f32 {
    let x2 = x * x;
    x * (15.0 - x2) / (15.0 - 6.0 * x2)
}
