//! Borrowed view over an interleaved multi-channel audio buffer.
//!
//! [`AudioBlock`] is the unit of work handed to
//! [`BlockEffect::process`](crate::BlockEffect::process). It wraps a mutable
//! slice of interleaved
//! samples (`L R L R …` for stereo) plus the channel count, and provides
//! per-frame and per-channel iteration without copying or allocating.
//!
//! A block with zero channels or zero frames is valid and represents
//! silence of zero length; effects treat it as a no-op.

/// Mutable view over interleaved multi-channel f32 samples.
///
/// The slice length should be a multiple of the channel count; any trailing
/// partial frame is ignored by [`frames_mut`](Self::frames_mut).
///
/// # Example
///
/// ```rust
/// use crujido_core::AudioBlock;
///
/// let mut samples = [0.1, 0.2, 0.3, 0.4]; // two stereo frames
/// let mut block = AudioBlock::new(&mut samples, 2);
/// assert_eq!(block.num_frames(), 2);
///
/// for sample in block.channel_iter_mut(0) {
///     *sample *= 0.5; // attenuate the left channel
/// }
/// ```
#[derive(Debug)]
pub struct AudioBlock<'a> {
    data: &'a mut [f32],
    channels: usize,
}

impl<'a> AudioBlock<'a> {
    /// Wrap an interleaved sample buffer.
    ///
    /// `channels` may be zero; the resulting block is empty and every
    /// operation on it is a no-op.
    pub fn new(data: &'a mut [f32], channels: usize) -> Self {
        debug_assert!(
            channels == 0 || data.len() % channels == 0,
            "buffer length {} is not a multiple of channel count {}",
            data.len(),
            channels
        );
        Self { data, channels }
    }

    /// Number of channels in the block.
    #[inline]
    pub fn num_channels(&self) -> usize {
        self.channels
    }

    /// Number of complete frames (samples per channel).
    #[inline]
    pub fn num_frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.data.len() / self.channels
        }
    }

    /// Whether the block carries no audio (zero channels or zero frames).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.channels == 0 || self.data.is_empty()
    }

    /// Iterate over complete frames, each a `&mut [f32]` of `channels` samples.
    pub fn frames_mut(&mut self) -> impl Iterator<Item = &mut [f32]> {
        self.data.chunks_exact_mut(self.channels.max(1))
    }

    /// Iterate over every sample of one channel, in frame order.
    ///
    /// Returns an empty iterator for out-of-range channel indices.
    pub fn channel_iter_mut(&mut self, channel: usize) -> impl Iterator<Item = &mut f32> {
        let stride = self.channels.max(1);
        self.data.iter_mut().skip(channel).step_by(stride)
    }

    /// The raw interleaved samples.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        self.data
    }

    /// The raw interleaved samples, mutable.
    ///
    /// Useful for channel-independent per-sample processing (waveshaping,
    /// gain) where frame boundaries do not matter.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f32] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_and_channel_counts() {
        let mut data = [0.0f32; 8];
        let block = AudioBlock::new(&mut data, 2);
        assert_eq!(block.num_channels(), 2);
        assert_eq!(block.num_frames(), 4);
        assert!(!block.is_empty());
    }

    #[test]
    fn zero_channels_is_empty() {
        let mut data = [1.0f32; 4];
        let block = AudioBlock::new(&mut data, 0);
        assert_eq!(block.num_frames(), 0);
        assert!(block.is_empty());
    }

    #[test]
    fn zero_samples_is_empty() {
        let mut data: [f32; 0] = [];
        let block = AudioBlock::new(&mut data, 2);
        assert!(block.is_empty());
        assert_eq!(block.num_frames(), 0);
    }

    #[test]
    fn channel_iteration_deinterleaves() {
        let mut data = [1.0, 10.0, 2.0, 20.0, 3.0, 30.0];
        let mut block = AudioBlock::new(&mut data, 2);

        let left: [f32; 3] = {
            let mut it = block.channel_iter_mut(0);
            [*it.next().unwrap(), *it.next().unwrap(), *it.next().unwrap()]
        };
        assert_eq!(left, [1.0, 2.0, 3.0]);

        for sample in block.channel_iter_mut(1) {
            *sample *= 0.1;
        }
        assert_eq!(data, [1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
    }

    #[test]
    fn frames_iterate_in_order() {
        let mut data = [1.0, 10.0, 2.0, 20.0];
        let mut block = AudioBlock::new(&mut data, 2);
        let mut frames = block.frames_mut();
        assert_eq!(frames.next().unwrap(), &[1.0, 10.0]);
        assert_eq!(frames.next().unwrap(), &[2.0, 20.0]);
        assert!(frames.next().is_none());
    }
}
