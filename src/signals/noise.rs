//! White noise generator, used as a broadband test source.

use rand::Rng;

use super::Signal;

/// A white noise generator.
///
/// Each sample is uniformly distributed between -1.0 and 1.0, so the signal
/// has equal power across all frequencies.
pub struct WhiteNoise<R: Rng = rand::rngs::ThreadRng> {
    rng: R,
}

impl WhiteNoise<rand::rngs::ThreadRng> {
    /// Creates a white noise generator backed by the thread-local RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use warble::signals::{Signal, WhiteNoise};
    ///
    /// let mut noise = WhiteNoise::new();
    /// let sample = noise.next_sample();
    /// assert!((-1.0..=1.0).contains(&sample));
    /// ```
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for WhiteNoise<rand::rngs::ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> WhiteNoise<R> {
    /// Creates a white noise generator with a custom (e.g. seeded) RNG.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use warble::signals::WhiteNoise;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let noise = WhiteNoise::with_rng(rng);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Signal for WhiteNoise<R> {
    fn next_sample(&mut self) -> f64 {
        self.rng.gen_range(-1.0..=1.0)
    }
}
