//! Sine oscillator used as a pure-tone test source.

use std::f64::consts::TAU;

use super::Signal;

/// A sine wave oscillator with phase continuity across samples.
///
/// # Examples
///
/// ```
/// use warble::signals::{Signal, SineOscillator};
///
/// let mut osc = SineOscillator::new(440.0, 44100.0);
/// assert_eq!(osc.next_sample(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineOscillator {
    /// Current phase (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency / sample_rate)
    phase_increment: f64,
    sample_rate: f64,
}

impl SineOscillator {
    pub fn new(frequency: f64, sample_rate: f64) -> Self {
        Self {
            phase: 0.0,
            phase_increment: frequency / sample_rate,
            sample_rate,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.phase_increment * self.sample_rate
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        self.phase_increment = frequency / self.sample_rate;
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

impl Signal for SineOscillator {
    fn next_sample(&mut self) -> f64 {
        let sample = (self.phase * TAU).sin();

        self.phase += self.phase_increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_accessors() {
        let mut osc = SineOscillator::new(440.0, 44100.0);
        assert!((osc.frequency() - 440.0).abs() < 1e-9);
        osc.set_frequency(880.0);
        assert!((osc.frequency() - 880.0).abs() < 1e-9);
    }

    #[test]
    fn test_quarter_period() {
        // 1 kHz at 4 kHz: samples land on 0, 1, 0, -1
        let mut osc = SineOscillator::new(1000.0, 4000.0);
        let expected = [0.0, 1.0, 0.0, -1.0];
        for e in expected {
            assert!((osc.next_sample() - e).abs() < 1e-12);
        }
    }

    #[test]
    fn test_amplitude_bounded() {
        let mut osc = SineOscillator::new(1234.5, 48000.0);
        for _ in 0..10000 {
            assert!(osc.next_sample().abs() <= 1.0);
        }
    }
}
