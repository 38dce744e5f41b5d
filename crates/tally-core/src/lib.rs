//! Numeric kernels for the Tally embeddable native core.
//!
//! This is the leaf crate with zero dependencies. It implements the
//! arithmetic and reduction operations exposed through `tally-ffi`, plus
//! the error types they report. Everything here is plain safe Rust over
//! borrowed slices: no allocation on the caller's behalf, no retained
//! state, no synchronization — every function is reentrant and safe to
//! call from any number of threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arith;
pub mod error;
pub mod reduce;

pub use arith::{add_checked, add_wrapping};
pub use error::{ArithError, ReduceError};
pub use reduce::{mean, median, std_dev, sum_f32, sum_f64};
