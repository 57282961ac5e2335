//! Second-order coefficient design.
//!
//! Every shape is the bilinear transform of the same analog prototype, so
//! they share one denominator structure and one set of intermediate terms
//! (`w0`, `sin(w0)`, `cos(w0)`, `alpha`). Only the zero placement changes per
//! shape. The formulas are Robert Bristow-Johnson's Audio EQ Cookbook.

use std::f64::consts::TAU;

use super::{CoefficientSet, FilterSpec, FilterType};
use crate::Result;

/// Terms shared by every response shape.
#[derive(Debug, Clone, Copy)]
struct Preamble {
    sin0: f64,
    cos0: f64,
    alpha: f64,
    /// Amplitude `A = 10^(gain_db / 40)`; only the gain-bearing shapes read it.
    big_a: f64,
}

impl Preamble {
    fn new(spec: &FilterSpec) -> Self {
        let w0 = TAU * spec.frequency / spec.sample_rate;
        let sin0 = w0.sin();
        let cos0 = w0.cos();
        Self {
            sin0,
            cos0,
            alpha: sin0 / (2.0 * spec.quality_factor),
            big_a: 10f64.powf(spec.gain_db() / 40.0),
        }
    }

    /// Denominator shared by the pass and all-pass shapes.
    fn pole_pair(&self) -> [f64; 3] {
        [1.0 + self.alpha, -2.0 * self.cos0, 1.0 - self.alpha]
    }
}

/// Designs a coefficient set for `filter_type` from `spec`.
///
/// The result is unnormalized (`a0` is generally not 1). `gain_db` is ignored
/// by shapes that do not use it.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`](crate::FilterError::InvalidParameter)
/// if the frequency, sample rate or quality factor is not positive, or if a
/// peaking or shelving design is given a non-finite `gain_db`.
///
/// # Examples
///
/// ```
/// use warble::{design, FilterSpec, FilterType};
///
/// let spec = FilterSpec::new(1000.0, 48000.0);
/// let coefs = design(FilterType::LowPass, &spec).unwrap();
/// assert!((coefs.dc_gain() - 1.0).abs() < 1e-12);
/// ```
pub fn design(filter_type: FilterType, spec: &FilterSpec) -> Result<CoefficientSet> {
    spec.validate_for(filter_type)?;

    let pre = Preamble::new(spec);
    let Preamble {
        sin0,
        cos0,
        alpha,
        big_a,
    } = pre;

    let (feedback, feedforward) = match filter_type {
        FilterType::LowPass => {
            let b0 = (1.0 - cos0) / 2.0;
            (pre.pole_pair(), [b0, 1.0 - cos0, b0])
        }

        FilterType::HighPass => {
            let b0 = (1.0 + cos0) / 2.0;
            (pre.pole_pair(), [b0, -(1.0 + cos0), b0])
        }

        FilterType::BandPass => {
            // Constant skirt gain, peak gain = Q
            let b0 = sin0 / 2.0;
            (pre.pole_pair(), [b0, 0.0, -b0])
        }

        FilterType::AllPass => {
            let feedback = pre.pole_pair();
            let mut feedforward = feedback;
            feedforward.reverse();
            (feedback, feedforward)
        }

        FilterType::Peak => (
            [1.0 + alpha / big_a, -2.0 * cos0, 1.0 - alpha / big_a],
            [1.0 + alpha * big_a, -2.0 * cos0, 1.0 - alpha * big_a],
        ),

        FilterType::LowShelf => {
            let t = ShelfTerms::new(big_a, cos0, alpha);
            (
                [t.ppmc + t.aa2, -2.0 * t.pmpc, t.ppmc - t.aa2],
                [
                    big_a * (t.pmc + t.aa2),
                    2.0 * big_a * t.mpc,
                    big_a * (t.pmc - t.aa2),
                ],
            )
        }

        FilterType::HighShelf => {
            let t = ShelfTerms::new(big_a, cos0, alpha);
            (
                [t.pmc + t.aa2, 2.0 * t.mpc, t.pmc - t.aa2],
                [
                    big_a * (t.ppmc + t.aa2),
                    -2.0 * big_a * t.pmpc,
                    big_a * (t.ppmc - t.aa2),
                ],
            )
        }
    };

    Ok(CoefficientSet::new(feedback, feedforward))
}

/// Intermediate terms of the shelving designs.
struct ShelfTerms {
    /// `(A+1) - (A-1)cos0`
    pmc: f64,
    /// `(A+1) + (A-1)cos0`
    ppmc: f64,
    /// `(A-1) - (A+1)cos0`
    mpc: f64,
    /// `(A-1) + (A+1)cos0`
    pmpc: f64,
    /// `2·sqrt(A)·alpha`
    aa2: f64,
}

impl ShelfTerms {
    fn new(big_a: f64, cos0: f64, alpha: f64) -> Self {
        Self {
            pmc: (big_a + 1.0) - (big_a - 1.0) * cos0,
            ppmc: (big_a + 1.0) + (big_a - 1.0) * cos0,
            mpc: (big_a - 1.0) - (big_a + 1.0) * cos0,
            pmpc: (big_a - 1.0) + (big_a + 1.0) * cos0,
            aa2: 2.0 * big_a.sqrt() * alpha,
        }
    }
}

/// Creates a low-pass coefficient set.
///
/// # Arguments
///
/// * `frequency` - Cutoff frequency in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `q` - Q factor; [`BUTTERWORTH_Q`](super::BUTTERWORTH_Q) gives a flat passband
pub fn lowpass(frequency: f64, sample_rate: f64, q: f64) -> Result<CoefficientSet> {
    design(
        FilterType::LowPass,
        &FilterSpec::new(frequency, sample_rate).with_q(q),
    )
}

/// Creates a high-pass coefficient set.
pub fn highpass(frequency: f64, sample_rate: f64, q: f64) -> Result<CoefficientSet> {
    design(
        FilterType::HighPass,
        &FilterSpec::new(frequency, sample_rate).with_q(q),
    )
}

/// Creates a band-pass coefficient set centered on `frequency`.
pub fn bandpass(frequency: f64, sample_rate: f64, q: f64) -> Result<CoefficientSet> {
    design(
        FilterType::BandPass,
        &FilterSpec::new(frequency, sample_rate).with_q(q),
    )
}

/// Creates an all-pass coefficient set. Its feedforward taps are the
/// feedback taps in reverse order.
pub fn allpass(frequency: f64, sample_rate: f64, q: f64) -> Result<CoefficientSet> {
    design(
        FilterType::AllPass,
        &FilterSpec::new(frequency, sample_rate).with_q(q),
    )
}

/// Creates a peaking coefficient set.
///
/// # Arguments
///
/// * `frequency` - Center frequency in Hz
/// * `sample_rate` - Sample rate in Hz
/// * `gain_db` - Boost (positive) or cut (negative) at the center, in dB
/// * `q` - Q factor; higher values give a narrower band
pub fn peak(frequency: f64, sample_rate: f64, gain_db: f64, q: f64) -> Result<CoefficientSet> {
    design(
        FilterType::Peak,
        &FilterSpec::new(frequency, sample_rate)
            .with_q(q)
            .with_gain_db(gain_db),
    )
}

/// Creates a low-shelf coefficient set.
pub fn lowshelf(frequency: f64, sample_rate: f64, gain_db: f64, q: f64) -> Result<CoefficientSet> {
    design(
        FilterType::LowShelf,
        &FilterSpec::new(frequency, sample_rate)
            .with_q(q)
            .with_gain_db(gain_db),
    )
}

/// Creates a high-shelf coefficient set.
pub fn highshelf(frequency: f64, sample_rate: f64, gain_db: f64, q: f64) -> Result<CoefficientSet> {
    design(
        FilterType::HighShelf,
        &FilterSpec::new(frequency, sample_rate)
            .with_q(q)
            .with_gain_db(gain_db),
    )
}
