pub mod config;
pub mod driver;
pub mod error;
pub mod ffi;
pub mod ops;
pub mod options;

pub use error::{Error, Result};
pub use ops::{DELTA, Step, Transform, add, checked_add, compute, compute_in_place};
pub use options::{Flags, LEGACY_OPTIONS, LegacyOptions, OPTIONS, Options};
