//! C-compatible status codes shared by every fallible entry point.
//!
//! [`TallyStatus`] is a `repr(i32)` enum covering all failure kinds in the
//! library. Conversions from the `tally-core` error types are provided so
//! the error-to-status mapping lives in one place.

use tally_core::error::{ArithError, ReduceError};

/// C-compatible status code returned by all fallible FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable: once released
/// they are never renumbered or reused with a different meaning. On any
/// nonzero status the operation's out-parameter is untouched.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TallyStatus {
    /// Success.
    Ok = 0,
    /// An argument is null where data was required, or otherwise invalid.
    InvalidArgument = -1,
    /// The operation is undefined on a zero-length input.
    EmptyInput = -2,
    /// Checked arithmetic detected overflow.
    Overflow = -3,
    /// Internal error (unexpected/unreachable condition).
    InternalError = -4,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&ArithError> for TallyStatus {
    fn from(e: &ArithError) -> Self {
        match e {
            ArithError::Overflow => TallyStatus::Overflow,
        }
    }
}

impl From<&ReduceError> for TallyStatus {
    fn from(e: &ReduceError) -> Self {
        match e {
            ReduceError::EmptyInput => TallyStatus::EmptyInput,
        }
    }
}
