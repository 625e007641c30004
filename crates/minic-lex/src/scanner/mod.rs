//! Scanner: turns source text into classified tokens and diagnostics.

mod classify;
mod core;

pub use self::core::{scan, ScanState, Scanner};
