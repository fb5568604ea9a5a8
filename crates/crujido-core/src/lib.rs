//! Crujido Core - DSP primitives for the crujido distortion engine
//!
//! This crate provides the foundational building blocks for real-time audio
//! processing with zero allocation in the audio path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`BlockEffect`] - Object-safe trait for block-based, multi-channel effects
//! - [`AudioBlock`] - Borrowed view over an interleaved multi-channel buffer
//!
//! ## Filters
//!
//! - [`StateVariableFilter`] - TPT SVF, selectable lowpass/highpass, one
//!   persistent state pair per channel
//!
//! ## Parameters
//!
//! - [`AtomicF32`] - Lock-free f32 cell for control-thread → audio-thread
//!   parameter hand-off. Each parameter field is one independent cell; no
//!   cross-field transaction is made.
//!
//! ## Utilities
//!
//! - Math functions: [`db_to_linear`], [`wet_dry_mix`], [`smootherstep`], etc.
//! - [`fast_tan`] - Padé approximation for filter coefficient computation
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible for embedded audio applications.
//! Disable the default `std` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! crujido-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: `reset` and `process` never allocate, lock, or panic
//! - **No dependencies on std**: pure `no_std` with `libm` for math
//! - **Defensive clamping**: out-of-range parameters are sanitized at point
//!   of use, never rejected

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod block;
pub mod effect;
pub mod fast_math;
pub mod math;
pub mod param;
pub mod svf;

// Re-export main types at crate root
pub use block::AudioBlock;
pub use effect::BlockEffect;
pub use fast_math::fast_tan;
pub use math::{db_to_linear, flush_denormal, linear_to_db, smootherstep, wet_dry_mix};
pub use param::AtomicF32;
pub use svf::{FilterMode, StateVariableFilter};
