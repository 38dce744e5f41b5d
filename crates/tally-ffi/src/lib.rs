//! C ABI surface for the Tally embeddable native core.
//!
//! Exposes the numeric kernels from `tally-core` as a flat, versioned
//! function table for host-language bindings. This is the only crate in
//! the workspace that may contain `unsafe` code; every use sits behind a
//! narrow caller contract spelled out in a `SAFETY` comment.
//!
//! Boundary rules, uniform across every entry point:
//!
//! - arguments are fixed-width scalars or `(pointer, element-count)` pairs,
//!   never language-native aggregates;
//! - operations that cannot fail return their result directly; all others
//!   return a [`TallyStatus`] code and write the payload through an
//!   out-parameter, which stays untouched on any nonzero status;
//! - no call unwinds across the boundary: guarded bodies convert panics
//!   into [`TallyStatus::Panicked`] and store the message for
//!   [`tally_last_panic_message`];
//! - buffers are caller-owned, borrowed only for the call's duration, and
//!   never freed, retained, or reallocated by this library;
//! - once published, a signature is never changed in place: a new shape
//!   gets a new name, and [`TALLY_ABI_VERSION`] versions the table as a
//!   whole.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

use std::cell::RefCell;
use std::ffi::c_char;

/// Run an FFI function body under `catch_unwind`.
///
/// Evaluates to the body's status on normal return. A caught panic stores
/// the payload message in [`LAST_PANIC`] and evaluates to
/// `TallyStatus::Panicked as i32`.
macro_rules! ffi_guard {
    ($body:block) => {{
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body));
        match result {
            Ok(status) => status,
            Err(payload) => {
                crate::record_panic(payload);
                crate::status::TallyStatus::Panicked as i32
            }
        }
    }};
}

pub mod arith;
pub mod reduce;
pub mod status;
mod view;

pub use status::TallyStatus;

/// Version of the function table as a whole.
///
/// Bumped only when an entry point is removed or its semantics change; a
/// changed signature instead gets a new function name, so every symbol
/// published under a version stays valid for that version's lifetime.
pub const TALLY_ABI_VERSION: u32 = 1;

thread_local! {
    /// Message of the most recent panic caught by `ffi_guard!` on this thread.
    pub(crate) static LAST_PANIC: RefCell<String> = const { RefCell::new(String::new()) };
}

/// Store a caught panic payload's message in [`LAST_PANIC`].
pub(crate) fn record_panic(payload: Box<dyn std::any::Any + Send>) {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("panic with non-string payload")
    };
    LAST_PANIC.with(|cell| *cell.borrow_mut() = message);
}

/// ABI version of this library ([`TALLY_ABI_VERSION`]).
///
/// Hosts should probe this before anything else and refuse to proceed on a
/// value they do not know.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tally_abi_version() -> u32 {
    TALLY_ABI_VERSION
}

/// Retrieve the current thread's last caught panic message.
///
/// Writes up to `cap - 1` bytes into `buf`, NUL-terminated, and returns the
/// full message length in bytes (0 if no panic has been caught on this
/// thread). A null `buf` or zero `cap` performs a pure length query.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn tally_last_panic_message(buf: *mut c_char, cap: usize) -> i32 {
    LAST_PANIC.with(|cell| {
        let message = cell.borrow();
        let bytes = message.as_bytes();
        if !buf.is_null() && cap > 0 {
            let copy_len = bytes.len().min(cap - 1);
            // SAFETY: buf points to cap writable bytes per caller contract.
            unsafe {
                std::ptr::copy_nonoverlapping(bytes.as_ptr(), buf as *mut u8, copy_len);
                *buf.add(copy_len) = 0;
            }
        }
        bytes.len().min(i32::MAX as usize) as i32
    })
}
