//! Fixed-length delay line used for filter history.

/// A ring buffer holding the most recent `len` samples.
///
/// Allocation happens once in [`DelayLine::new`]; pushing and reading wrap an
/// index and never allocate.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct DelayLine {
    buffer: Vec<f64>,
    // Slot the next sample is written to, which also holds the oldest sample
    write_pos: usize,
}

impl DelayLine {
    /// Creates a zeroed delay line of `len` samples.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            buffer: vec![0.0; len],
            write_pos: 0,
        }
    }

    /// Returns the sample pushed `delay` steps ago, where `delay == 1` is the
    /// most recent one.
    ///
    /// # Panics
    ///
    /// Panics if `delay` is zero or greater than the line's length.
    #[inline]
    pub(crate) fn tap(&self, delay: usize) -> f64 {
        let len = self.buffer.len();
        assert!((1..=len).contains(&delay), "tap {delay} outside 1..={len}");
        self.buffer[(self.write_pos + len - delay) % len]
    }

    /// Pushes a sample, dropping the oldest one.
    #[inline]
    pub(crate) fn push(&mut self, sample: f64) {
        let len = self.buffer.len();
        if len == 0 {
            return;
        }
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % len;
    }

    /// Zeroes every sample.
    pub(crate) fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }

    /// Iterates from the most recent sample to the oldest.
    pub(crate) fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.buffer.len()).map(|delay| self.tap(delay))
    }
}
