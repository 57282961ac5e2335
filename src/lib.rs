//! Warble - recursive audio filter design and processing
//!
//! This library designs second-order IIR filters from a frequency/Q/gain
//! description and runs any recursive filter sample by sample:
//! - [`design`] computes a [`CoefficientSet`] for low-pass, high-pass,
//!   band-pass, all-pass, peaking, low-shelf and high-shelf responses
//! - [`RecursiveFilter`] holds per-channel history and evaluates the
//!   normalized difference equation, for coefficients of any order
//!
//! ```
//! use warble::{FilterSpec, FilterType, RecursiveFilter, design};
//!
//! let spec = FilterSpec::new(12000.0, 48000.0);
//! let coefs = design(FilterType::LowPass, &spec)?;
//!
//! let mut filter = RecursiveFilter::from_coefficients(&coefs)?;
//! let mut block = [1.0, 0.0, 0.0, 0.0];
//! filter.process_buffer(&mut block)?;
//! assert!((block[0] - 0.292_893_22).abs() < 1e-6);
//! # Ok::<(), warble::FilterError>(())
//! ```

pub mod design;
pub mod engine;
mod error;
#[cfg(feature = "signals")]
pub mod signals;

// Re-export commonly used types at the crate root
pub use design::{CoefficientSet, FilterSpec, FilterType, design};
pub use engine::{EngineState, RecursiveFilter};
pub use error::{FilterError, Result};
