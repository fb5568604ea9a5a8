//! Bounded, ordered effect chain.
//!
//! [`EffectChain`] sequences up to [`MAX_EFFECTS`] effects and fans out
//! lifecycle and per-block calls in registration order. It holds plain
//! `&mut` borrows — ownership of the effects stays with whoever built
//! them, and the chain can neither free nor outlive them. A `&mut` can
//! never be null, so the only registration failure left is running out
//! of capacity, reported as `false` from [`push`](EffectChain::push).
//!
//! `process` composes the members as a pipeline: the block is processed
//! in place by each effect in turn, so each effect's output buffer is the
//! next one's input buffer.

use crujido_core::{AudioBlock, BlockEffect};

/// Maximum number of effects a chain can hold.
pub const MAX_EFFECTS: usize = 8;

/// Fixed-capacity ordered sequence of borrowed effects.
///
/// # Example
///
/// ```rust
/// use crujido_core::AudioBlock;
/// use crujido_effects::{Distortion, EffectChain};
///
/// let mut dist = Distortion::new();
/// let mut chain = EffectChain::new();
/// assert!(chain.push(&mut dist));
///
/// chain.prepare(48000.0, 512, 2);
/// let mut samples = [0.25f32; 64];
/// let mut block = AudioBlock::new(&mut samples, 2);
/// chain.process(&mut block);
/// ```
pub struct EffectChain<'a> {
    effects: [Option<&'a mut dyn BlockEffect>; MAX_EFFECTS],
    count: usize,
}

impl<'a> EffectChain<'a> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self {
            effects: core::array::from_fn(|_| None),
            count: 0,
        }
    }

    /// Drop every registered effect borrow.
    ///
    /// Not real-time safe by contract: use only off the audio thread or
    /// before activation.
    pub fn clear(&mut self) {
        for slot in &mut self.effects {
            *slot = None;
        }
        self.count = 0;
    }

    /// Append an effect. Returns `false` (with no mutation) if the chain
    /// is already at capacity.
    pub fn push(&mut self, effect: &'a mut dyn BlockEffect) -> bool {
        if self.count >= MAX_EFFECTS {
            return false;
        }
        self.effects[self.count] = Some(effect);
        self.count += 1;
        true
    }

    /// Number of registered effects.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the chain holds no effects.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Fixed capacity of the chain.
    pub fn capacity(&self) -> usize {
        MAX_EFFECTS
    }

    /// Prepare every member, in registration order.
    pub fn prepare(&mut self, sample_rate: f32, max_block_size: usize, num_channels: usize) {
        for effect in self.members_mut() {
            effect.prepare(sample_rate, max_block_size, num_channels);
        }
    }

    /// Reset every member, in registration order. Real-time safe.
    pub fn reset(&mut self) {
        for effect in self.members_mut() {
            effect.reset();
        }
    }

    /// Process the block through every member, in registration order.
    /// Real-time safe.
    pub fn process(&mut self, block: &mut AudioBlock) {
        for effect in self.members_mut() {
            effect.process(block);
        }
    }

    fn members_mut(&mut self) -> impl Iterator<Item = &mut (dyn BlockEffect + 'a)> {
        self.effects[..self.count]
            .iter_mut()
            .filter_map(|slot| slot.as_deref_mut())
    }
}

impl Default for EffectChain<'_> {
    fn default() -> Self {
        Self::new()
    }
}
