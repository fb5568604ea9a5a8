//! Property-based tests for crujido-core primitives.
//!
//! Verifies filter stability across the whole valid parameter space and
//! the bit-exactness of the atomic parameter cell.

use proptest::prelude::*;

use crujido_core::{AtomicF32, AudioBlock, FilterMode, StateVariableFilter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// For any valid cutoff (20-20000 Hz) and Q, both SVF modes produce
    /// finite output for random finite input.
    #[test]
    fn svf_stability(
        freq in 20.0f32..20000.0f32,
        q in 0.5f32..10.0f32,
        highpass in any::<bool>(),
        input in prop::array::uniform32(-1.0f32..=1.0f32),
    ) {
        let mut svf = StateVariableFilter::new(48000.0);
        svf.configure(48000.0, 32, 1);
        svf.set_cutoff(freq);
        svf.set_resonance(q);
        svf.set_mode(if highpass { FilterMode::Highpass } else { FilterMode::Lowpass });

        let mut data = input;
        let mut block = AudioBlock::new(&mut data, 1);
        svf.process_block(&mut block);

        for (i, &out) in data.iter().enumerate() {
            prop_assert!(
                out.is_finite(),
                "SVF (freq={freq}, q={q}, hp={highpass}) produced non-finite {out} at {i}"
            );
        }
    }

    /// Block processing equals repeated single-frame processing: filter
    /// state carries across block boundaries transparently.
    #[test]
    fn svf_block_split_invariance(
        freq in 40.0f32..18000.0f32,
        input in prop::collection::vec(-1.0f32..=1.0f32, 16..=64),
        split in 1usize..=15,
    ) {
        let split = split.min(input.len() - 1);

        let mut whole = StateVariableFilter::new(48000.0);
        whole.configure(48000.0, 64, 1);
        whole.set_cutoff(freq);

        let mut halves = whole.clone();

        let mut a = input.clone();
        let mut block = AudioBlock::new(&mut a, 1);
        whole.process_block(&mut block);

        let mut b = input;
        let (first, second) = b.split_at_mut(split);
        let mut block = AudioBlock::new(first, 1);
        halves.process_block(&mut block);
        let mut block = AudioBlock::new(second, 1);
        halves.process_block(&mut block);

        for i in 0..a.len() {
            prop_assert!(
                (a[i] - b[i]).abs() < 1e-6,
                "split at {split} diverged at sample {i}: {} vs {}",
                a[i],
                b[i]
            );
        }
    }

    /// The atomic cell stores and returns f32 values bit-exactly.
    #[test]
    fn atomic_f32_roundtrip(value in any::<f32>()) {
        let cell = AtomicF32::new(0.0);
        cell.store(value);
        let loaded = cell.load();
        prop_assert_eq!(loaded.to_bits(), value.to_bits());
    }
}
