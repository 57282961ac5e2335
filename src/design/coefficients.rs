//! Second-order coefficient sets and their frequency response.

use num_complex::Complex64;
use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{FilterError, Result};

/// Three feedback (`a`) and three feedforward (`b`) coefficients of a
/// second-order recurrence:
///
/// `a0·y[n] = b0·x[n] + b1·x[n-1] + b2·x[n-2] - a1·y[n-1] - a2·y[n-2]`
///
/// Sets produced by [`design`](crate::design()) are unnormalized; the engine
/// divides through by `a0` when it takes them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CoefficientSet {
    /// `[a0, a1, a2]`
    pub feedback: [f64; 3],
    /// `[b0, b1, b2]`
    pub feedforward: [f64; 3],
}

impl CoefficientSet {
    pub fn new(feedback: [f64; 3], feedforward: [f64; 3]) -> Self {
        Self {
            feedback,
            feedforward,
        }
    }

    /// Returns a copy scaled so that `a0 == 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use warble::CoefficientSet;
    ///
    /// let set = CoefficientSet::new([2.0, 1.0, 0.5], [1.0, 2.0, 1.0]);
    /// let norm = set.normalized().unwrap();
    /// assert_eq!(norm.feedback, [1.0, 0.5, 0.25]);
    /// assert_eq!(norm.feedforward, [0.5, 1.0, 0.5]);
    /// ```
    pub fn normalized(&self) -> Result<Self> {
        let a0 = self.feedback[0];
        if a0 == 0.0 || !a0.is_finite() {
            return Err(FilterError::DegenerateFilter(a0));
        }
        Ok(Self {
            feedback: self.feedback.map(|a| a / a0),
            feedforward: self.feedforward.map(|b| b / a0),
        })
    }

    /// Evaluates the transfer function `H(z)` at `z = e^{jw}` for the given
    /// frequency.
    pub fn response_at(&self, frequency: f64, sample_rate: f64) -> Complex64 {
        let w = TAU * frequency / sample_rate;
        let (numerator, denominator) = self
            .feedforward
            .iter()
            .zip(self.feedback.iter())
            .enumerate()
            .fold(
                (Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)),
                |(num, den), (k, (&b, &a))| {
                    let z_k = Complex64::from_polar(1.0, -w * k as f64);
                    (num + z_k * b, den + z_k * a)
                },
            );
        numerator / denominator
    }

    /// Linear magnitude of the response at `frequency`.
    pub fn magnitude_at(&self, frequency: f64, sample_rate: f64) -> f64 {
        self.response_at(frequency, sample_rate).norm()
    }

    /// Magnitude of the response at `frequency`, in dB.
    pub fn magnitude_db_at(&self, frequency: f64, sample_rate: f64) -> f64 {
        20.0 * self.magnitude_at(frequency, sample_rate).log10()
    }

    /// Phase of the response at `frequency`, in radians within `(-π, π]`.
    pub fn phase_at(&self, frequency: f64, sample_rate: f64) -> f64 {
        self.response_at(frequency, sample_rate).arg()
    }

    /// Gain at 0 Hz: `(b0 + b1 + b2) / (a0 + a1 + a2)`.
    pub fn dc_gain(&self) -> f64 {
        self.feedforward.iter().sum::<f64>() / self.feedback.iter().sum::<f64>()
    }

    /// Whether both poles lie strictly inside the unit circle.
    ///
    /// Uses the stability triangle for a normalized second-order denominator:
    /// `|a2| < 1` and `|a1| < 1 + a2`.
    pub fn is_stable(&self) -> bool {
        match self.normalized() {
            Ok(norm) => {
                let [_, a1, a2] = norm.feedback;
                a2.abs() < 1.0 && a1.abs() < 1.0 + a2
            }
            Err(_) => false,
        }
    }
}
