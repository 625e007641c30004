//! minic-util - Foundation types for the minic lexical analyzer.
//!
//! This crate provides the types shared by the scanner and the driver:
//!
//! - [`Diagnostic`] and [`Collector`] - line-tagged lexical error messages
//!   and the append-only sink that gathers them during a scan.
//! - [`LoadError`] - fatal failures raised while loading source text,
//!   before any scanning happens.
//!
//! Lexical problems are never Rust errors: the scanner reports them to a
//! [`Collector`] and keeps going. Only source loading can fail the run as
//! a whole.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;

pub use diagnostic::{Collector, Diagnostic};
pub use error::LoadError;
