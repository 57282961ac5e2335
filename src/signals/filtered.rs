//! Adapter running a signal through a recursive filter.

use super::Signal;
use crate::{FilterError, RecursiveFilter, Result};

/// A signal source followed by a [`RecursiveFilter`].
///
/// The filter must be ready when the adapter is built, so pulling samples
/// can never fail.
///
/// # Examples
///
/// ```
/// use warble::signals::{Signal, SignalExt, SineOscillator};
/// use warble::{FilterSpec, FilterType, RecursiveFilter, design};
///
/// let coefs = design(FilterType::LowPass, &FilterSpec::new(1000.0, 44100.0)).unwrap();
/// let filter = RecursiveFilter::from_coefficients(&coefs).unwrap();
///
/// let mut filtered = SineOscillator::new(440.0, 44100.0).filtered(filter).unwrap();
/// let sample = filtered.next_sample();
/// ```
#[derive(Debug, Clone)]
pub struct Filtered<S: Signal> {
    source: S,
    filter: RecursiveFilter,
}

impl<S: Signal> Filtered<S> {
    /// Wraps `source` with `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::NotConfigured`] if the filter has no coefficients.
    pub fn new(source: S, filter: RecursiveFilter) -> Result<Self> {
        if !filter.is_ready() {
            return Err(FilterError::NotConfigured);
        }
        Ok(Self { source, filter })
    }

    pub fn filter(&self) -> &RecursiveFilter {
        &self.filter
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the source and filter.
    pub fn into_parts(self) -> (S, RecursiveFilter) {
        (self.source, self.filter)
    }
}

impl<S: Signal> Signal for Filtered<S> {
    fn next_sample(&mut self) -> f64 {
        let x = self.source.next_sample();
        self.filter.tick(x)
    }
}

/// Extension methods available on every [`Signal`].
pub trait SignalExt: Signal + Sized {
    /// Runs this signal through `filter`.
    fn filtered(self, filter: RecursiveFilter) -> Result<Filtered<Self>> {
        Filtered::new(self, filter)
    }

    /// Collects the next `len` samples into a vector.
    fn take_samples(&mut self, len: usize) -> Vec<f64> {
        let mut buffer = vec![0.0; len];
        self.process(&mut buffer);
        buffer
    }
}

impl<S: Signal> SignalExt for S {}
