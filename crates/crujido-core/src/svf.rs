//! State Variable Filter primitive.
//!
//! Topology-Preserving Transform (TPT) SVF after Zavalishin, "The Art of
//! VA Filter Design" (2012), Chapter 3. The trapezoidal integrator
//! discretization preserves the analog prototype's frequency response and
//! stays stable when the cutoff is swept per block, which is exactly how
//! the distortion pipeline drives it.
//!
//! This filter holds one persistent integrator state pair per channel and
//! processes an [`AudioBlock`] in place, so a single instance serves a
//! whole multi-channel stream. Only the lowpass and highpass outputs are
//! exposed — the two modes the effect pipeline consumes.
//!
//! # Performance
//!
//! [`set_cutoff`](StateVariableFilter::set_cutoff) uses
//! [`fast_tan`] for cutoff frequencies below 10 kHz, falling back to
//! [`libm::tanf`] above 10 kHz where the Padé approximation loses
//! accuracy.

use core::f32::consts::PI;
use libm::tanf;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::AudioBlock;
use crate::fast_math::fast_tan;
use crate::flush_denormal;

/// Filter response selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Low-pass output — passes frequencies below the cutoff.
    #[default]
    Lowpass,
    /// High-pass output — passes frequencies above the cutoff.
    Highpass,
}

/// Per-channel integrator state.
#[derive(Clone, Copy, Debug, Default)]
struct ChannelState {
    ic1eq: f32,
    ic2eq: f32,
}

/// State Variable Filter (2-pole, 12 dB/oct) with per-channel state.
///
/// ## Parameters
///
/// - `cutoff`: cutoff frequency in Hz (20.0 to sr×0.49, default 1000.0)
/// - `resonance`: Q factor (0.5 to 20.0, default 0.707 = Butterworth)
/// - `mode`: [`FilterMode::Lowpass`] or [`FilterMode::Highpass`]
///
/// ## Lifecycle
///
/// [`configure`](Self::configure) allocates channel state and is not
/// real-time safe; [`reset`](Self::reset) and
/// [`process_block`](Self::process_block) are.
///
/// # Example
///
/// ```rust
/// use crujido_core::{AudioBlock, FilterMode, StateVariableFilter};
///
/// let mut svf = StateVariableFilter::new(48000.0);
/// svf.configure(48000.0, 512, 2);
/// svf.set_mode(FilterMode::Highpass);
/// svf.set_cutoff(80.0);
///
/// let mut samples = [0.5f32; 8];
/// let mut block = AudioBlock::new(&mut samples, 2);
/// svf.process_block(&mut block);
/// ```
#[derive(Debug, Clone)]
pub struct StateVariableFilter {
    // Per-channel filter state
    states: Vec<ChannelState>,

    // Coefficients
    g: f32,
    k: f32,

    // Parameters
    sample_rate: f32,
    cutoff: f32,
    resonance: f32,
    mode: FilterMode,
}

impl Default for StateVariableFilter {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl StateVariableFilter {
    /// Create a new SVF with the given sample rate.
    ///
    /// Initialises with cutoff = 1000 Hz, Q = 0.707 (Butterworth), lowpass
    /// mode, and state for a single channel. Call
    /// [`configure`](Self::configure) before processing multi-channel
    /// blocks.
    pub fn new(sample_rate: f32) -> Self {
        let mut svf = Self {
            states: Vec::new(),
            g: 0.0,
            k: 0.0,
            sample_rate: sample_rate.max(1.0),
            cutoff: 1000.0,
            resonance: 0.707,
            mode: FilterMode::Lowpass,
        };
        svf.states.push(ChannelState::default());
        svf.update_coefficients();
        svf
    }

    /// Configure for an operating configuration.
    ///
    /// Allocates one state pair per channel (floored to 1) and resets
    /// them. Mode, cutoff, and resonance settings survive; the cutoff is
    /// re-clamped against the new Nyquist limit. Not real-time safe.
    pub fn configure(&mut self, sample_rate: f32, _max_block_size: usize, num_channels: usize) {
        let channels = num_channels.max(1);
        self.sample_rate = sample_rate.max(1.0);
        self.states.clear();
        self.states.resize(channels, ChannelState::default());
        self.set_cutoff(self.cutoff);

        #[cfg(feature = "tracing")]
        tracing::trace!(sample_rate, channels, "svf configured");
    }

    /// Set cutoff frequency in Hz.
    ///
    /// Range: 20.0 to `sample_rate × 0.49`. Values are clamped.
    pub fn set_cutoff(&mut self, freq: f32) {
        self.cutoff = freq.clamp(20.0, self.sample_rate * 0.49);
        self.update_coefficients();
    }

    /// Get current cutoff frequency in Hz.
    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    /// Set resonance (Q factor).
    ///
    /// Range: 0.5 to 20.0. Values are clamped. Q = 0.707 gives a
    /// Butterworth (maximally flat) response.
    pub fn set_resonance(&mut self, q: f32) {
        self.resonance = q.clamp(0.5, 20.0);
        self.update_coefficients();
    }

    /// Get current resonance (Q factor).
    pub fn resonance(&self) -> f32 {
        self.resonance
    }

    /// Select the lowpass or highpass output.
    pub fn set_mode(&mut self, mode: FilterMode) {
        self.mode = mode;
    }

    /// Get the current mode.
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Number of channels the filter currently holds state for.
    pub fn num_channels(&self) -> usize {
        self.states.len()
    }

    /// Clear all channel states to silence. Real-time safe.
    pub fn reset(&mut self) {
        for state in &mut self.states {
            *state = ChannelState::default();
        }
    }

    /// Recompute filter coefficients from cutoff and resonance.
    fn update_coefficients(&mut self) {
        let arg = PI * self.cutoff / self.sample_rate;
        self.g = if self.cutoff < 10_000.0 {
            fast_tan(arg)
        } else {
            tanf(arg)
        };
        self.k = 1.0 / self.resonance;
    }

    /// Filter a block in place, all channels. Real-time safe.
    ///
    /// Channels beyond the configured count pass through untouched — no
    /// state exists for them, and inventing it here would allocate on the
    /// audio thread.
    pub fn process_block(&mut self, block: &mut AudioBlock) {
        if block.is_empty() {
            return;
        }

        let g = self.g;
        let k = self.k;
        let d = 1.0 / (1.0 + g * (g + k));
        let mode = self.mode;

        let channels = block.num_channels().min(self.states.len());
        for ch in 0..channels {
            let mut state = self.states[ch];

            for sample in block.channel_iter_mut(ch) {
                let input = *sample;

                let v3 = input - state.ic2eq;
                let v1 = (g * v3 + state.ic1eq) * d;
                let v2 = state.ic2eq + g * v1;

                state.ic1eq = flush_denormal(2.0 * v1 - state.ic1eq);
                state.ic2eq = flush_denormal(2.0 * v2 - state.ic2eq);

                *sample = match mode {
                    FilterMode::Lowpass => v2,
                    FilterMode::Highpass => input - k * v1 - v2,
                };
            }

            self.states[ch] = state;
        }
    }
}
