//! Scalar arithmetic FFI: wrapping and checked 32-bit addition.

use crate::status::TallyStatus;
use tally_core::arith;

/// Wrapping 32-bit addition.
///
/// Wraps on overflow per two's-complement semantics:
/// `tally_add_i32(INT32_MAX, 1) == INT32_MIN`. No failure mode; the body
/// cannot unwind, so the call is not guarded.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tally_add_i32(a: i32, b: i32) -> i32 {
    arith::add_wrapping(a, b)
}

/// Checked 32-bit addition.
///
/// Writes the sum to `*out` and returns `TALLY_STATUS_OK`, or returns
/// `TALLY_STATUS_OVERFLOW` without writing when the exact sum does not fit
/// an `int32_t`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tally_add_i32_checked(a: i32, b: i32, out: *mut i32) -> i32 {
    ffi_guard!({
        if out.is_null() {
            return TallyStatus::InvalidArgument as i32;
        }
        match arith::add_checked(a, b) {
            Ok(sum) => {
                // SAFETY: out is non-null and valid per caller contract.
                unsafe { *out = sum };
                TallyStatus::Ok as i32
            }
            Err(ref e) => TallyStatus::from(e) as i32,
        }
    })
}
