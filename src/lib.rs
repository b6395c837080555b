//! # tutorial
//!
//! A tiny command-line program: greets Bob, says goodbye, then echoes every
//! argument it was started with as `argv[<i>]: <value>` lines.

pub mod cli;
pub mod error;
pub mod greeting;
pub mod report;

pub use error::OutputError;

/// Name passed to the greeter by the entry point.
pub const DEFAULT_NAME: &str = "Bob";
