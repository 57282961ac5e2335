//! Core signal trait and simple test sources.

/// Common interface for anything that produces a stream of samples.
///
/// Sources (oscillators, noise, impulses) and processors wrapping a source
/// (such as [`Filtered`](super::Filtered)) all implement it.
pub trait Signal {
    /// Generates the next sample from the signal.
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

impl<S: Signal + ?Sized> Signal for Box<S> {
    fn next_sample(&mut self) -> f64 {
        (**self).next_sample()
    }
}

/// A constant signal that always returns the same value.
///
/// # Examples
///
/// ```
/// use warble::signals::{ConstantSignal, Signal};
///
/// let mut dc = ConstantSignal(0.5);
/// assert_eq!(dc.next_sample(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSignal(pub f64);

impl Signal for ConstantSignal {
    fn next_sample(&mut self) -> f64 {
        self.0
    }

    fn process(&mut self, buffer: &mut [f64]) {
        buffer.fill(self.0);
    }
}

impl From<f64> for ConstantSignal {
    fn from(value: f64) -> Self {
        ConstantSignal(value)
    }
}

/// A unit impulse: `amplitude` on the first sample, zero afterwards.
///
/// Running it through a filter yields the filter's impulse response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impulse {
    amplitude: f64,
    fired: bool,
}

impl Impulse {
    pub fn new() -> Self {
        Self::with_amplitude(1.0)
    }

    pub fn with_amplitude(amplitude: f64) -> Self {
        Self {
            amplitude,
            fired: false,
        }
    }

    /// Re-arms the impulse so the next sample fires again.
    pub fn reset(&mut self) {
        self.fired = false;
    }
}

impl Default for Impulse {
    fn default() -> Self {
        Self::new()
    }
}

impl Signal for Impulse {
    fn next_sample(&mut self) -> f64 {
        if self.fired {
            0.0
        } else {
            self.fired = true;
            self.amplitude
        }
    }
}
