//! Crujido Effects - soft-knee distortion and effect chaining
//!
//! This crate implements the signal path of the crujido distortion engine
//! on top of the primitives in `crujido-core`:
//!
//! - [`waveshape`] - pure soft-knee clipping curve (quintic smootherstep knee)
//! - [`Distortion`] - pre-HPF → drive → biased shaping with DC correction →
//!   output gain → dry/wet mix → post-LPF, per block
//! - [`EffectChain`] - bounded ordered sequence of borrowed effects
//!
//! ## Example
//!
//! ```rust
//! use crujido_core::AudioBlock;
//! use crujido_effects::{Distortion, DistortionParams, EffectChain};
//!
//! let mut dist = Distortion::new();
//! let controls = dist.controller();
//!
//! let mut chain = EffectChain::new();
//! chain.push(&mut dist);
//! chain.prepare(48000.0, 512, 2);
//!
//! controls.set(DistortionParams {
//!     drive_db: 24.0,
//!     ..DistortionParams::default()
//! });
//!
//! let mut samples = [0.0f32; 1024];
//! let mut block = AudioBlock::new(&mut samples, 2);
//! chain.process(&mut block);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod chain;
pub mod distortion;
pub mod waveshaper;

// Re-export main types at crate root
pub use chain::{EffectChain, MAX_EFFECTS};
pub use distortion::{Distortion, DistortionParams, ParamsHandle};
pub use waveshaper::waveshape;
