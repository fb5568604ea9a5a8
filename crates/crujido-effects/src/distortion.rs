//! Soft-knee distortion effect.
//!
//! Per-block pipeline: pre highpass → drive → biased waveshaping with DC
//! correction → output gain → dry/wet mix → post lowpass. The waveshaper
//! itself lives in [`waveshape`]; this module owns the filters and the
//! parameter hand-off.
//!
//! ## Parameter hand-off
//!
//! Parameters are published through per-field [`AtomicF32`] cells shared
//! between the audio thread (which owns the [`Distortion`]) and any number
//! of control-thread [`ParamsHandle`]s. Each field is independently
//! atomic; there is no cross-field transaction, so a snapshot taken while
//! a writer is mid-update may mix old and new fields. That transient is
//! bounded to one block and is an accepted artifact — never a race.

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use crujido_core::{
    AtomicF32, AudioBlock, BlockEffect, FilterMode, StateVariableFilter, db_to_linear, wet_dry_mix,
};

use crate::waveshaper::waveshape;

/// One full parameter snapshot for [`Distortion`].
///
/// Values are used as supplied; every field that could destabilise the
/// algorithm is clamped at point of use (threshold, knee, bias, filter
/// cutoffs, mix), so storing an out-of-range value is harmless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionParams {
    /// Pre-gain in dB, applied before shaping.
    pub drive_db: f32,
    /// Pre-shaping highpass cutoff in Hz, clamped to \[20, 20000\] at use.
    pub pre_filter_hz: f32,
    /// Amplitude at which hard clipping is reached, clamped to \[0.01, 1.0\].
    pub threshold: f32,
    /// Fractional knee width relative to threshold, clamped to \[0.0, 0.8\].
    pub knee: f32,
    /// DC offset injected before shaping for asymmetry, clamped to \[-0.5, 0.5\].
    pub bias: f32,
    /// Post-shaping lowpass cutoff in Hz, clamped to \[20, 20000\] at use.
    pub post_filter_hz: f32,
    /// Dry/wet blend, clamped to \[0.0, 1.0\] at use.
    pub mix: f32,
    /// Output gain in dB, applied after shaping.
    pub output_db: f32,
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            drive_db: 18.0,
            pre_filter_hz: 80.0,
            threshold: 0.7,
            knee: 0.12,
            bias: 0.08,
            post_filter_hz: 12000.0,
            mix: 1.0,
            output_db: -1.0,
        }
    }
}

/// The shared atomic cells behind a parameter set.
#[derive(Debug)]
struct SharedParams {
    drive_db: AtomicF32,
    pre_filter_hz: AtomicF32,
    threshold: AtomicF32,
    knee: AtomicF32,
    bias: AtomicF32,
    post_filter_hz: AtomicF32,
    mix: AtomicF32,
    output_db: AtomicF32,
}

impl SharedParams {
    fn new(p: DistortionParams) -> Self {
        Self {
            drive_db: AtomicF32::new(p.drive_db),
            pre_filter_hz: AtomicF32::new(p.pre_filter_hz),
            threshold: AtomicF32::new(p.threshold),
            knee: AtomicF32::new(p.knee),
            bias: AtomicF32::new(p.bias),
            post_filter_hz: AtomicF32::new(p.post_filter_hz),
            mix: AtomicF32::new(p.mix),
            output_db: AtomicF32::new(p.output_db),
        }
    }

    fn store(&self, p: DistortionParams) {
        self.drive_db.store(p.drive_db);
        self.pre_filter_hz.store(p.pre_filter_hz);
        self.threshold.store(p.threshold);
        self.knee.store(p.knee);
        self.bias.store(p.bias);
        self.post_filter_hz.store(p.post_filter_hz);
        self.mix.store(p.mix);
        self.output_db.store(p.output_db);
    }

    fn load(&self) -> DistortionParams {
        DistortionParams {
            drive_db: self.drive_db.load(),
            pre_filter_hz: self.pre_filter_hz.load(),
            threshold: self.threshold.load(),
            knee: self.knee.load(),
            bias: self.bias.load(),
            post_filter_hz: self.post_filter_hz.load(),
            mix: self.mix.load(),
            output_db: self.output_db.load(),
        }
    }
}

/// Clonable control-thread handle to a [`Distortion`]'s parameters.
///
/// Obtained from [`Distortion::controller`]. `set` and `get` are
/// non-blocking and may run concurrently with the audio thread's
/// `process`; changes take effect from the next block.
#[derive(Debug, Clone)]
pub struct ParamsHandle {
    shared: Arc<SharedParams>,
}

impl ParamsHandle {
    /// Publish a full parameter snapshot, field by field.
    pub fn set(&self, params: DistortionParams) {
        self.shared.store(params);
    }

    /// Snapshot the current parameter values.
    pub fn get(&self) -> DistortionParams {
        self.shared.load()
    }
}

/// Soft-knee waveshaping distortion with pre/post filtering.
///
/// # Example
///
/// ```rust
/// use crujido_core::{AudioBlock, BlockEffect};
/// use crujido_effects::{Distortion, DistortionParams};
///
/// let mut dist = Distortion::new();
/// dist.set_params(DistortionParams {
///     drive_db: 24.0,
///     mix: 0.8,
///     ..DistortionParams::default()
/// });
/// dist.prepare(48000.0, 512, 2);
///
/// let mut samples = [0.1f32; 1024];
/// let mut block = AudioBlock::new(&mut samples, 2);
/// dist.process(&mut block);
/// ```
pub struct Distortion {
    params: Arc<SharedParams>,
    pre_filter: StateVariableFilter,
    post_filter: StateVariableFilter,
}

impl Distortion {
    /// Create a distortion with default parameters.
    ///
    /// [`BlockEffect::prepare`] must be called before processing.
    pub fn new() -> Self {
        Self::with_params(DistortionParams::default())
    }

    /// Create a distortion with an initial parameter snapshot.
    pub fn with_params(params: DistortionParams) -> Self {
        let mut pre_filter = StateVariableFilter::new(48000.0);
        pre_filter.set_mode(FilterMode::Highpass);

        let mut post_filter = StateVariableFilter::new(48000.0);
        post_filter.set_mode(FilterMode::Lowpass);

        Self {
            params: Arc::new(SharedParams::new(params)),
            pre_filter,
            post_filter,
        }
    }

    /// Replace the full parameter snapshot. Real-time safe, non-blocking.
    ///
    /// Takes effect starting with the next `process` call. Fields are
    /// stored one by one; see the module docs for the (deliberately
    /// relaxed) consistency model.
    pub fn set_params(&self, params: DistortionParams) {
        self.params.store(params);
    }

    /// Snapshot the current parameter values.
    pub fn params(&self) -> DistortionParams {
        self.params.load()
    }

    /// Hand out a control-thread handle to this effect's parameters.
    pub fn controller(&self) -> ParamsHandle {
        ParamsHandle {
            shared: Arc::clone(&self.params),
        }
    }
}

impl Default for Distortion {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockEffect for Distortion {
    fn prepare(&mut self, sample_rate: f32, max_block_size: usize, num_channels: usize) {
        let channels = num_channels.max(1);

        self.pre_filter.configure(sample_rate, max_block_size, channels);
        self.post_filter.configure(sample_rate, max_block_size, channels);

        let p = self.params.load();
        self.pre_filter.set_cutoff(p.pre_filter_hz.clamp(20.0, 20000.0));
        self.post_filter.set_cutoff(p.post_filter_hz.clamp(20.0, 20000.0));
    }

    fn reset(&mut self) {
        self.pre_filter.reset();
        self.post_filter.reset();
    }

    fn process(&mut self, block: &mut AudioBlock) {
        if block.is_empty() {
            return;
        }

        // One snapshot per block; later writes land in the next block.
        let p = self.params.load();

        let drive = db_to_linear(p.drive_db);
        let out_gain = db_to_linear(p.output_db);
        let mix = p.mix.clamp(0.0, 1.0);

        self.pre_filter.set_cutoff(p.pre_filter_hz.clamp(20.0, 20000.0));
        self.post_filter.set_cutoff(p.post_filter_hz.clamp(20.0, 20000.0));

        self.pre_filter.process_block(block);

        // Bias shifts the shaper input to generate even harmonics, but
        // also injects a DC offset of waveshape(bias). Subtracting that
        // constant keeps silence at zero for any bias setting.
        let bias = p.bias.clamp(-0.5, 0.5);
        let y0 = waveshape(bias, p.threshold, p.knee);

        // Shaping is per-sample and channel-independent, so the whole
        // interleaved buffer is one flat loop.
        for sample in block.samples_mut() {
            let dry = *sample;
            let x = dry * drive;

            let y = (waveshape(x + bias, p.threshold, p.knee) - y0) * out_gain;

            *sample = wet_dry_mix(dry, y, mix);
        }

        self.post_filter.process_block(block);
    }
}
