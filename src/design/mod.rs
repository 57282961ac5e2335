//! Coefficient design for second-order recursive filters.
//!
//! This module turns a response shape plus a [`FilterSpec`] into a
//! [`CoefficientSet`] using the bilinear-transform cookbook equations:
//! low-pass, high-pass, band-pass, all-pass, peaking, low-shelf and
//! high-shelf. All functions here are pure and safe to call from any thread.
//!
//! The result feeds a [`RecursiveFilter`](crate::RecursiveFilter), which is
//! agnostic to how the coefficients were produced.

mod coefficients;
mod cookbook;
mod spec;

pub use coefficients::CoefficientSet;
pub use cookbook::{allpass, bandpass, design, highpass, highshelf, lowpass, lowshelf, peak};
pub use spec::{BUTTERWORTH_Q, FilterSpec, FilterType, ParseFilterTypeError};
