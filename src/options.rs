//! Compile-time options records.
//!
//! Both records are fixed by Cargo features when the library is built and are
//! only ever read afterwards. Field order is part of the C contract in
//! `include/zigpkg.h` and must not change without bumping the ABI.

use serde::Serialize;
use std::fmt;

/// Ordered view over a record of named boolean flags.
pub trait Flags {
    fn fields(&self) -> Vec<(&'static str, bool)>;

    /// Render as `name=0|1` pairs separated by single spaces.
    fn render(&self) -> String {
        self.fields()
            .into_iter()
            .map(|(name, on)| format!("{name}={}", u8::from(on)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Options accompanying `zigpkg_compute`, exported as `ZIGPKG_OPTIONS`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Options {
    pub add: bool,
    pub subtract: bool,
}

impl Options {
    pub const BUILD: Self = Self {
        add: cfg!(feature = "add"),
        subtract: cfg!(feature = "subtract"),
    };
}

impl Flags for Options {
    fn fields(&self) -> Vec<(&'static str, bool)> {
        vec![("add", self.add), ("subtract", self.subtract)]
    }
}

/// Options accompanying `zigpkg_add`, exported as `zigpkg_legacy_options`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegacyOptions {
    pub foo: bool,
    pub bar: bool,
    pub baz: bool,
    pub qux: bool,
}

impl LegacyOptions {
    pub const BUILD: Self = Self {
        foo: cfg!(feature = "foo"),
        bar: cfg!(feature = "bar"),
        baz: cfg!(feature = "baz"),
        qux: cfg!(feature = "qux"),
    };
}

impl Flags for LegacyOptions {
    fn fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("foo", self.foo),
            ("bar", self.bar),
            ("baz", self.baz),
            ("qux", self.qux),
        ]
    }
}

impl fmt::Display for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for LegacyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Options this library was built with.
pub const OPTIONS: Options = Options::BUILD;

/// Legacy options this library was built with.
pub const LEGACY_OPTIONS: LegacyOptions = LegacyOptions::BUILD;
