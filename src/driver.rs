//! Command-line driver logic: argument validation, dispatch and rendering.
//!
//! Kept separate from `main.rs` so the whole flow is testable without
//! spawning a process.

use crate::config::{Format, Operation};
use crate::error::{Error, Result};
use crate::ops::{self, Step, Transform};
use crate::options::{LEGACY_OPTIONS, LegacyOptions, OPTIONS, Options};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Options record printed alongside a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionsView {
    Options(Options),
    Legacy(LegacyOptions),
}

impl fmt::Display for OptionsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(o) => fmt::Display::fmt(o, f),
            Self::Legacy(o) => fmt::Display::fmt(o, f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Report {
    pub result: u32,
    pub options: OptionsView,
}

impl Report {
    pub fn render(&self, format: Format) -> Result<String> {
        match format {
            Format::Text => Ok(format!("{}\n{}", self.result, self.options)),
            Format::Json => serde_json::to_string(self).map_err(|e| Error::json(e.to_string())),
        }
    }
}

/// Parse a strictly decimal, unsigned argument and check it against the
/// operation's domain.
pub fn parse_bounded(raw: &str, operation: Operation) -> Result<u64> {
    let label = operation.label();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid(label, raw));
    }
    let value: u64 = raw.parse().map_err(|_| Error::invalid(label, raw))?;
    if value > operation.max() {
        return Err(Error::out_of_domain(label, raw, operation.max()));
    }
    Ok(value)
}

/// The single positional argument, or a usage error for any other count.
pub fn single_arg(args: &[String]) -> Result<&str> {
    match args {
        [raw] => Ok(raw.as_str()),
        _ => Err(Error::Usage(args.len())),
    }
}

/// Validate `args` and run `operation`, using `transform` for compute.
pub fn run_with<T: Transform>(
    transform: &T,
    operation: Operation,
    args: &[String],
) -> Result<Report> {
    let raw = single_arg(args)?;
    let value = parse_bounded(raw, operation)?;
    debug!(?operation, value, "driver: argument accepted");

    let report = match operation {
        Operation::Compute => {
            let mut n = u32::try_from(value)
                .map_err(|_| Error::out_of_domain("seed", raw, operation.max()))?;
            if !transform.compute_in_place(&mut n) {
                debug!(value, "driver: compute overflowed");
                return Err(Error::Overflow);
            }
            Report {
                result: n,
                options: OptionsView::Options(OPTIONS),
            }
        }
        Operation::Add => {
            let x = u8::try_from(value)
                .map_err(|_| Error::out_of_domain("num", raw, operation.max()))?;
            Report {
                result: u32::from(ops::add(x)),
                options: OptionsView::Legacy(LEGACY_OPTIONS),
            }
        }
    };
    Ok(report)
}

/// [`run_with`] using the transform the library was built with.
pub fn run(operation: Operation, args: &[String]) -> Result<Report> {
    run_with(&Step::BUILD, operation, args)
}
