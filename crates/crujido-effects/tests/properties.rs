//! Property-based tests for the waveshaper and the distortion pipeline.
//!
//! Uses proptest to verify the algebraic guarantees of the shaping curve
//! and the end-to-end invariants of the block pipeline across randomized
//! parameters and input.

use proptest::prelude::*;

use crujido_core::{AudioBlock, BlockEffect};
use crujido_effects::{Distortion, DistortionParams, waveshape};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// The shaping curve is odd for every valid parameter combination.
    #[test]
    fn waveshape_odd(
        x in -2.0f32..=2.0f32,
        threshold in 0.01f32..=1.0f32,
        knee in 0.0f32..=0.8f32,
    ) {
        let sum = waveshape(x, threshold, knee) + waveshape(-x, threshold, knee);
        prop_assert!(
            sum.abs() < 1e-7,
            "waveshape not odd at x={x}, t={threshold}, k={knee}: residual {sum}"
        );
    }

    /// Output magnitude never exceeds max(|x|, threshold) and never drops
    /// below min(|x|, threshold) — the curve only ever pulls the signal
    /// toward the ceiling, it cannot overshoot in either direction.
    #[test]
    fn waveshape_bounded(
        x in -4.0f32..=4.0f32,
        threshold in 0.01f32..=1.0f32,
        knee in 0.0f32..=0.8f32,
    ) {
        let y = waveshape(x, threshold, knee);
        let ax = x.abs();
        let lo = ax.min(threshold) - 1e-6;
        let hi = ax.max(threshold) + 1e-6;
        prop_assert!(
            (lo..=hi).contains(&y.abs()),
            "|y|={} outside [{lo}, {hi}] for x={x}, t={threshold}, k={knee}",
            y.abs()
        );
    }

    /// Even wildly out-of-range parameters only get clamped, never produce
    /// NaN or infinity.
    #[test]
    fn waveshape_survives_garbage_params(
        x in -10.0f32..=10.0f32,
        threshold in -5.0f32..=5.0f32,
        knee in -5.0f32..=5.0f32,
    ) {
        prop_assert!(waveshape(x, threshold, knee).is_finite());
    }

    /// The full pipeline produces finite output for any valid parameter
    /// snapshot and bounded input.
    #[test]
    fn distortion_finite_output(
        input in prop::array::uniform32(-1.0f32..=1.0f32),
        drive_db in -24.0f32..=48.0f32,
        threshold in 0.01f32..=1.0f32,
        knee in 0.0f32..=0.8f32,
        bias in -0.5f32..=0.5f32,
        mix in 0.0f32..=1.0f32,
        output_db in -24.0f32..=24.0f32,
    ) {
        let mut dist = Distortion::with_params(DistortionParams {
            drive_db,
            threshold,
            knee,
            bias,
            mix,
            output_db,
            ..DistortionParams::default()
        });
        dist.prepare(48000.0, 32, 2);

        let mut data = input;
        let mut block = AudioBlock::new(&mut data, 2);
        dist.process(&mut block);

        for (i, &s) in data.iter().enumerate() {
            prop_assert!(
                s.is_finite(),
                "non-finite sample {s} at {i} (drive={drive_db}, t={threshold}, k={knee})"
            );
        }
    }

    /// Silence maps to silence for any drive/shape/bias at full wet mix:
    /// the DC injected by the bias is exactly cancelled.
    #[test]
    fn distortion_silence_invariant(
        drive_db in -24.0f32..=48.0f32,
        threshold in 0.01f32..=1.0f32,
        knee in 0.0f32..=0.8f32,
        bias in -0.5f32..=0.5f32,
    ) {
        let mut dist = Distortion::with_params(DistortionParams {
            drive_db,
            threshold,
            knee,
            bias,
            mix: 1.0,
            ..DistortionParams::default()
        });
        dist.prepare(48000.0, 64, 2);

        let mut data = [0.0f32; 128];
        let mut block = AudioBlock::new(&mut data, 2);
        dist.process(&mut block);

        for &s in &data {
            prop_assert!(
                s.abs() < 1e-8,
                "silence leaked to {s} (bias={bias}, t={threshold}, k={knee})"
            );
        }
    }
}
