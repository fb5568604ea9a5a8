//! Mathematical utility functions for DSP.
//!
//! Allocation-free helpers suitable for `no_std` and the real-time path.
//!
//! - [`db_to_linear`] / [`linear_to_db`] - convert between dB and linear gain
//! - [`wet_dry_mix`] - dry/wet crossfade in the cheap 3-operation form
//! - [`smootherstep`] - quintic C² interpolation weight for soft-knee blending
//! - [`flush_denormal`] - subnormal flushing for filter feedback paths

use libm::{expf, logf};

/// Convert decibels to linear gain.
///
/// # Example
/// ```rust
/// use crujido_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 0.001);
/// assert!((db_to_linear(-6.02) - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
///
/// Inputs at or below zero are floored to avoid `-inf`.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

/// Crossfade between dry and wet signals.
///
/// Equivalent to `dry * (1 - mix) + wet * mix` but uses one fewer multiply:
/// `dry + (wet - dry) * mix`.
///
/// # Arguments
///
/// * `dry` - Unprocessed signal
/// * `wet` - Processed signal
/// * `mix` - Blend factor in \[0.0, 1.0\]: 0.0 = all dry, 1.0 = all wet
#[inline]
pub fn wet_dry_mix(dry: f32, wet: f32, mix: f32) -> f32 {
    dry + (wet - dry) * mix
}

/// Quintic smootherstep interpolation weight.
///
/// `s(u) = u³(u(6u − 15) + 10)` for `u ∈ [0, 1]`, clamped outside.
/// Zero first and second derivative at both endpoints, so curves blended
/// with this weight join their neighbours C²-continuously — the knee of a
/// waveshaper shows no derivative kink at either region boundary.
///
/// The cubic smoothstep `u²(3 − 2u)` is only C¹; the two are not
/// numerically interchangeable near the endpoints, and this crate commits
/// to the quintic form.
#[inline]
pub fn smootherstep(u: f32) -> f32 {
    let u = u.clamp(0.0, 1.0);
    u * u * u * (u * (u * 6.0 - 15.0) + 10.0)
}

/// Flush subnormal (denormalized) floats to zero.
///
/// Subnormal floats cause severe CPU performance degradation on most
/// architectures. This replaces values below 1e-20 with zero, providing
/// margin before the IEEE 754 subnormal range begins. Use in filter
/// feedback paths where signal decays indefinitely toward zero.
#[allow(clippy::inline_always)]
#[inline(always)]
pub fn flush_denormal(x: f32) -> f32 {
    if x.abs() < 1e-20 { 0.0 } else { x }
}
