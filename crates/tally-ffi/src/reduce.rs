//! Reduction FFI: summation and summary statistics over caller buffers.
//!
//! All entry points share one signature shape, `(values, len, out)`, with
//! the buffer rules of [`crate::view`] and the result written through `out`
//! only on success.

use crate::status::TallyStatus;
use crate::view;
use tally_core::error::ReduceError;
use tally_core::reduce;

/// Shared body for the reduction entry points: guard, borrow, reduce,
/// write out.
#[allow(unsafe_code)]
fn run_reduction<T>(
    values: *const T,
    len: usize,
    out: *mut T,
    op: fn(&[T]) -> Result<T, ReduceError>,
) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TallyStatus::InvalidArgument as i32;
        }
        // SAFETY: values/len form a caller-owned view per the boundary
        // contract.
        let xs = match unsafe { view::borrow(values, len) } {
            Ok(xs) => xs,
            Err(status) => return status as i32,
        };
        match op(xs) {
            Ok(value) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = value };
                TallyStatus::Ok as i32
            }
            Err(ref e) => TallyStatus::from(e) as i32,
        }
    })
}

/// Sum of `len` doubles starting at `values`.
///
/// Writes the sum to `*out` and returns `TALLY_STATUS_OK`. The empty sum
/// is defined: `len == 0` writes `0.0` and succeeds for any `values`
/// pointer, including null. A null `values` with `len > 0` or a null `out`
/// returns `TALLY_STATUS_INVALID_ARGUMENT`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tally_sum_f64(values: *const f64, len: usize, out: *mut f64) -> i32 {
    run_reduction(values, len, out, |xs| Ok(reduce::sum_f64(xs)))
}

/// Sum of `len` floats starting at `values`.
///
/// Same contract as [`tally_sum_f64`] with 32-bit elements.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tally_sum_f32(values: *const f32, len: usize, out: *mut f32) -> i32 {
    run_reduction(values, len, out, |xs| Ok(reduce::sum_f32(xs)))
}

/// Arithmetic mean of `len` doubles starting at `values`.
///
/// Undefined on the empty sequence: `len == 0` returns
/// `TALLY_STATUS_EMPTY_INPUT` without writing to `*out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tally_mean_f64(values: *const f64, len: usize, out: *mut f64) -> i32 {
    run_reduction(values, len, out, reduce::mean)
}

/// Population standard deviation of `len` doubles starting at `values`.
///
/// Divides by `n`, not `n - 1`. Undefined on the empty sequence
/// (`TALLY_STATUS_EMPTY_INPUT`).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tally_std_f64(values: *const f64, len: usize, out: *mut f64) -> i32 {
    run_reduction(values, len, out, reduce::std_dev)
}

/// Median of `len` doubles starting at `values`, under IEEE-754 total
/// ordering.
///
/// Even lengths average the two middle elements. Undefined on the empty
/// sequence (`TALLY_STATUS_EMPTY_INPUT`).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tally_median_f64(values: *const f64, len: usize, out: *mut f64) -> i32 {
    run_reduction(values, len, out, reduce::median)
}
