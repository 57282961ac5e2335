//! Signal sources and filter plumbing.
//!
//! This module provides a small pull-based signal abstraction for driving
//! filters without an audio host:
//! - `Signal` trait for anything that produces samples
//! - `ConstantSignal`, `Impulse`, `SineOscillator` and `WhiteNoise` test sources
//! - `Filtered` adapter and `SignalExt::filtered` for running a source
//!   through a [`RecursiveFilter`](crate::RecursiveFilter)

mod filtered;
mod noise;
mod oscillator;
mod signal;

pub use filtered::{Filtered, SignalExt};
pub use noise::WhiteNoise;
pub use oscillator::SineOscillator;
pub use signal::{ConstantSignal, Impulse, Signal};
