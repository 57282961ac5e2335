//! Runtime engine for recursive filters.
//!
//! [`RecursiveFilter`] applies a normalized linear recurrence of any order to
//! a stream of samples, holding its own input and output history in
//! fixed-length ring buffers. The buffers are internal; history is read
//! through [`RecursiveFilter::input_history`] and
//! [`RecursiveFilter::output_history`].
//!
//! ```compile_fail
//! use warble::engine::DelayLine;
//! ```

mod delay_line;
mod recursive;

pub(crate) use delay_line::DelayLine;
pub use recursive::{EngineState, RecursiveFilter};
