//! Bounded arithmetic.
//!
//! Two shapes are offered: the overflow-checked `compute` over `u32`, and the
//! pure `add` over `u8`, which wraps around on overflow.

use crate::error::{Error, Result};
use crate::options::{OPTIONS, Options};

/// Constant applied by both arithmetic shapes. Set `ZIGPKG_DELTA` at build
/// time to override the default of 1.
pub const DELTA: u32 = match option_env!("ZIGPKG_DELTA") {
    Some(raw) => parse_delta(raw),
    None => 1,
};

const fn parse_delta(raw: &str) -> u32 {
    let bytes = raw.as_bytes();
    assert!(!bytes.is_empty(), "ZIGPKG_DELTA must not be empty");
    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        assert!(b.is_ascii_digit(), "ZIGPKG_DELTA must be a decimal integer");
        value = match value.checked_mul(10) {
            Some(v) => v,
            None => panic!("ZIGPKG_DELTA does not fit in u32"),
        };
        value = match value.checked_add((b - b'0') as u32) {
            Some(v) => v,
            None => panic!("ZIGPKG_DELTA does not fit in u32"),
        };
        i += 1;
    }
    value
}

/// A transformation of a `u32` that may overflow.
///
/// Callers depend only on this contract: `None` means the result is not
/// representable and must not be used.
pub trait Transform {
    fn apply(&self, n: u32) -> Option<u32>;

    fn compute(&self, n: u32) -> Result<u32> {
        self.apply(n).ok_or(Error::Overflow)
    }

    /// Replace `n` with the transformed value. Leaves `n` untouched and
    /// returns `false` on overflow.
    fn compute_in_place(&self, n: &mut u32) -> bool {
        match self.apply(*n) {
            Some(v) => {
                *n = v;
                true
            }
            None => false,
        }
    }
}

/// Add and/or subtract a fixed delta, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub delta: u32,
    pub add: bool,
    pub subtract: bool,
}

impl Step {
    /// The transform selected when the library was built.
    pub const BUILD: Self = Self::from_options(OPTIONS, DELTA);

    pub const fn from_options(options: Options, delta: u32) -> Self {
        Self {
            delta,
            add: options.add,
            subtract: options.subtract,
        }
    }
}

impl Transform for Step {
    fn apply(&self, n: u32) -> Option<u32> {
        let mut value = n;
        if self.add {
            value = value.checked_add(self.delta)?;
        }
        if self.subtract {
            value = value.checked_sub(self.delta)?;
        }
        Some(value)
    }
}

/// Shape A with the build-time transform.
pub fn compute(n: u32) -> Result<u32> {
    Step::BUILD.compute(n)
}

/// Shape A, in place. See [`Transform::compute_in_place`].
pub fn compute_in_place(n: &mut u32) -> bool {
    Step::BUILD.compute_in_place(n)
}

/// Shape B: `(x + DELTA) mod 256`.
pub fn add(x: u8) -> u8 {
    wrapping_add(x, DELTA)
}

/// Shape B without wraparound, for callers that need to detect overflow.
pub fn checked_add(x: u8) -> Option<u8> {
    u8::try_from(DELTA).ok().and_then(|d| x.checked_add(d))
}

fn wrapping_add(x: u8, delta: u32) -> u8 {
    // Truncating the delta first gives the same residue mod 256.
    x.wrapping_add(delta as u8)
}
