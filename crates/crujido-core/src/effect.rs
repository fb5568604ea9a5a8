//! Core block-effect trait.
//!
//! [`BlockEffect`] is the capability interface every effect in the engine
//! implements, and the entire surface the host integration layer consumes.
//! It mirrors the classic real-time audio contract: a non-real-time
//! `prepare`, a real-time `reset`, and a real-time in-place `process`.
//!
//! ## Design Decisions
//!
//! - **Block-based, multi-channel**: effects receive a whole
//!   [`AudioBlock`] rather than single samples, because stateful stages
//!   (filters) and per-block parameter snapshots both want block
//!   granularity.
//!
//! - **Object-safe**: the trait supports `dyn BlockEffect`, so a chain can
//!   hold heterogeneous effects behind non-owning references.
//!
//! - **No failure modes**: `process` returns nothing. Out-of-range
//!   parameters are clamped at point of use and empty blocks are no-ops,
//!   so there is nothing left to report.

use crate::AudioBlock;

/// Capability trait for block-based audio effects.
///
/// # Real-time contract
///
/// `reset` and `process` must never allocate, lock, or panic; they run on
/// the audio thread with a hard per-block deadline. `prepare` is exempt —
/// the host guarantees no `process` call is in flight while it runs.
///
/// # Example
///
/// ```rust
/// use crujido_core::{AudioBlock, BlockEffect};
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl BlockEffect for Gain {
///     fn prepare(&mut self, _sample_rate: f32, _max_block_size: usize, _num_channels: usize) {}
///
///     fn reset(&mut self) {}
///
///     fn process(&mut self, block: &mut AudioBlock) {
///         for sample in block.samples_mut() {
///             *sample *= self.gain;
///         }
///     }
/// }
/// ```
pub trait BlockEffect {
    /// Configure the effect for an operating configuration.
    ///
    /// Must be called once before the first `process` call and again
    /// whenever sample rate, maximum block size, or channel count change.
    /// Resets internal state. Channel counts below 1 are floored to 1.
    ///
    /// Not real-time safe: implementations may allocate here.
    fn prepare(&mut self, sample_rate: f32, max_block_size: usize, num_channels: usize);

    /// Clear internal state (filter history, etc.) without touching
    /// parameters or configuration. Real-time safe.
    fn reset(&mut self);

    /// Process one block in place. Real-time safe.
    ///
    /// A block with zero channels or zero frames is a valid no-op.
    fn process(&mut self, block: &mut AudioBlock);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gain(f32);

    impl BlockEffect for Gain {
        fn prepare(&mut self, _: f32, _: usize, _: usize) {}
        fn reset(&mut self) {}
        fn process(&mut self, block: &mut AudioBlock) {
            for sample in block.samples_mut() {
                *sample *= self.0;
            }
        }
    }

    #[test]
    fn processes_in_place() {
        let mut gain = Gain(2.0);
        let mut data = [1.0, -0.5, 0.25, 0.0];
        let mut block = AudioBlock::new(&mut data, 2);
        gain.process(&mut block);
        assert_eq!(data, [2.0, -1.0, 0.5, 0.0]);
    }

    #[test]
    fn object_safe() {
        let mut gain = Gain(3.0);
        let effect: &mut dyn BlockEffect = &mut gain;
        let mut data = [1.0];
        let mut block = AudioBlock::new(&mut data, 1);
        effect.process(&mut block);
        assert_eq!(data, [3.0]);
    }
}
