//! Lock-free parameter cells for cross-thread hand-off.
//!
//! Control-surface code writes parameter values; the audio thread reads
//! them at the top of every block. Neither side may block, so values live
//! in [`AtomicF32`] cells — an `f32` bit-cast into an `AtomicU32`.
//!
//! Each parameter field is its own independent cell. A reader that
//! snapshots several fields mid-update may observe a mix of old and new
//! values; this is a deliberate, bounded transient (worth at most one
//! block of audibly odd settings), never a data race. Do not "upgrade"
//! this to a locked or transactionally-swapped snapshot.

use core::sync::atomic::{AtomicU32, Ordering};

/// An `f32` with atomic load/store semantics.
///
/// # Example
///
/// ```rust
/// use crujido_core::AtomicF32;
///
/// let cell = AtomicF32::new(0.7);
/// cell.store(0.25);
/// assert_eq!(cell.load(), 0.25);
/// ```
#[derive(Debug)]
pub struct AtomicF32 {
    bits: AtomicU32,
}

impl AtomicF32 {
    /// Create a cell holding `value`.
    pub const fn new(value: f32) -> Self {
        Self {
            bits: AtomicU32::new(value.to_bits()),
        }
    }

    /// Read the current value (Acquire ordering).
    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    /// Write a new value (Release ordering).
    #[inline]
    pub fn store(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Release);
    }
}

impl Default for AtomicF32 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f32> for AtomicF32 {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}
