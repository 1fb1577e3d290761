//! C ABI surface. Declarations live in `include/zigpkg.h`.
//!
//! Every export is total: nothing here can panic across the boundary.

use crate::ops;
use crate::options::{LegacyOptions, Options};
use std::ffi::c_char;

/// Compile time options set when libzigpkg was built.
#[unsafe(no_mangle)]
pub static ZIGPKG_OPTIONS: Options = Options::BUILD;

/// Compile time options accompanying `zigpkg_add`.
#[unsafe(no_mangle)]
#[allow(non_upper_case_globals)]
pub static zigpkg_legacy_options: LegacyOptions = LegacyOptions::BUILD;

static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Computes the new value of `*n`, returning whether the computation
/// succeeded. `*n` is only written on success. A null `n` returns `false`.
///
/// # Safety
///
/// `n` must be null or valid for reads and writes of a `u32`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn zigpkg_compute(n: *mut u32) -> bool {
    // SAFETY: the caller guarantees `n` is null or points to a live u32.
    match unsafe { n.as_mut() } {
        Some(n) => ops::compute_in_place(n),
        None => false,
    }
}

/// Adds the build-time delta to `x`, wrapping around at 256.
#[unsafe(no_mangle)]
pub extern "C" fn zigpkg_add(x: u8) -> u8 {
    ops::add(x)
}

/// NUL-terminated library version. The pointer is static; do not free it.
#[unsafe(no_mangle)]
pub extern "C" fn zigpkg_version() -> *const c_char {
    VERSION.as_ptr().cast()
}
