//! Generic recursive (IIR) filter engine.

use super::DelayLine;
use crate::{CoefficientSet, FilterError, Result};

/// Lifecycle of a [`RecursiveFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// No order has been set.
    #[default]
    Uninitialized,
    /// History is allocated but no coefficients are loaded.
    Configured,
    /// Coefficients are loaded; samples can be processed.
    Ready,
}

/// A recursive filter of arbitrary order `N >= 1`, evaluating
///
/// `y[n] = b0·x[n] + Σ b[i]·x[n-i] - Σ a[i]·y[n-i]`  for `i = 1..=N`
///
/// after normalizing all coefficients by `a0`.
///
/// Each instance owns its input and output history and is meant to be driven
/// by a single audio channel. [`process`](Self::process) does not allocate,
/// so it can run inside a real-time callback.
///
/// # Examples
///
/// ```
/// use warble::{design, FilterSpec, FilterType, RecursiveFilter};
///
/// let coefs = design(FilterType::LowPass, &FilterSpec::new(1000.0, 48000.0)).unwrap();
///
/// let mut filter = RecursiveFilter::new(2).unwrap();
/// filter.set_coefficients(&coefs.feedback, &coefs.feedforward).unwrap();
///
/// let first = filter.process(1.0).unwrap();
/// assert!(first > 0.0 && first < 1.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecursiveFilter {
    order: usize,
    state: EngineState,

    // Normalized so that feedback[0] == 1
    feedback: Vec<f64>,
    feedforward: Vec<f64>,

    inputs: DelayLine,
    outputs: DelayLine,
}

impl RecursiveFilter {
    /// Creates a configured engine of the given order.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidOrder`] if `order` is zero.
    pub fn new(order: usize) -> Result<Self> {
        let mut filter = Self::default();
        filter.configure(order)?;
        Ok(filter)
    }

    /// Creates a ready second-order engine from a designed coefficient set.
    pub fn from_coefficients(coefficients: &CoefficientSet) -> Result<Self> {
        let mut filter = Self::new(2)?;
        filter.set_coefficient_set(coefficients)?;
        Ok(filter)
    }

    /// Allocates zeroed history for `order` past inputs and outputs.
    ///
    /// Any loaded coefficients are discarded, so the engine must be given new
    /// ones before it can process again.
    pub fn configure(&mut self, order: usize) -> Result<()> {
        if order == 0 {
            return Err(FilterError::InvalidOrder(order));
        }

        self.order = order;
        self.feedback = vec![0.0; order + 1];
        self.feedforward = vec![0.0; order + 1];
        self.inputs = DelayLine::new(order);
        self.outputs = DelayLine::new(order);
        self.state = EngineState::Configured;
        Ok(())
    }

    /// Loads new coefficients, normalizing them by `feedback[0]` and clearing
    /// the history.
    ///
    /// Both slices must hold `order + 1` taps. On error the engine is left
    /// exactly as it was.
    ///
    /// # Errors
    ///
    /// * [`FilterError::NotConfigured`] if no order has been set
    /// * [`FilterError::CoefficientShapeMismatch`] if either slice has the wrong length
    /// * [`FilterError::DegenerateFilter`] if `feedback[0]` is zero or not finite
    pub fn set_coefficients(&mut self, feedback: &[f64], feedforward: &[f64]) -> Result<()> {
        if self.state == EngineState::Uninitialized {
            return Err(FilterError::NotConfigured);
        }

        let expected = self.order + 1;
        if feedback.len() != expected || feedforward.len() != expected {
            return Err(FilterError::CoefficientShapeMismatch {
                expected,
                feedback: feedback.len(),
                feedforward: feedforward.len(),
            });
        }

        let a0 = feedback[0];
        if a0 == 0.0 || !a0.is_finite() {
            return Err(FilterError::DegenerateFilter(a0));
        }

        for (dst, &a) in self.feedback.iter_mut().zip(feedback) {
            *dst = a / a0;
        }
        for (dst, &b) in self.feedforward.iter_mut().zip(feedforward) {
            *dst = b / a0;
        }

        self.reset();
        self.state = EngineState::Ready;
        Ok(())
    }

    /// Loads a designed second-order coefficient set.
    pub fn set_coefficient_set(&mut self, coefficients: &CoefficientSet) -> Result<()> {
        self.set_coefficients(&coefficients.feedback, &coefficients.feedforward)
    }

    /// Filters one sample and returns the output.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::NotConfigured`] until coefficients are loaded.
    #[inline]
    pub fn process(&mut self, sample: f64) -> Result<f64> {
        if self.state != EngineState::Ready {
            return Err(FilterError::NotConfigured);
        }
        Ok(self.tick(sample))
    }

    /// Filters a block of samples in place.
    pub fn process_buffer(&mut self, buffer: &mut [f64]) -> Result<()> {
        if self.state != EngineState::Ready {
            return Err(FilterError::NotConfigured);
        }
        for sample in buffer.iter_mut() {
            *sample = self.tick(*sample);
        }
        Ok(())
    }

    /// Runs the difference equation. Callers must have checked the engine
    /// is ready.
    #[inline]
    pub(crate) fn tick(&mut self, sample: f64) -> f64 {
        let mut acc = self.feedforward[0] * sample;
        for (delay, b) in self.feedforward.iter().enumerate().skip(1) {
            acc += b * self.inputs.tap(delay);
        }
        for (delay, a) in self.feedback.iter().enumerate().skip(1) {
            acc -= a * self.outputs.tap(delay);
        }

        self.inputs.push(sample);
        self.outputs.push(acc);
        acc
    }

    /// Zeroes the history, keeping the coefficients.
    pub fn reset(&mut self) {
        self.inputs.clear();
        self.outputs.clear();
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == EngineState::Ready
    }

    /// Filter order; zero while uninitialized.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Normalized feedback coefficients, `feedback()[0] == 1` once ready.
    pub fn feedback(&self) -> &[f64] {
        &self.feedback
    }

    /// Normalized feedforward coefficients.
    pub fn feedforward(&self) -> &[f64] {
        &self.feedforward
    }

    /// Past inputs, most recent first.
    pub fn input_history(&self) -> impl Iterator<Item = f64> + '_ {
        self.inputs.iter()
    }

    /// Past outputs, most recent first.
    pub fn output_history(&self) -> impl Iterator<Item = f64> + '_ {
        self.outputs.iter()
    }
}
