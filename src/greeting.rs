//! Greeting and farewell lines.

use crate::error::OutputError;
use std::io::Write;

/// The fixed farewell line.
pub const FAREWELL: &str = "Goodbye!";

/// Write `Hello, <name>!` followed by a newline.
///
/// # Errors
///
/// Returns [`OutputError::Greeting`] if the writer fails.
pub fn hello<W: Write>(out: &mut W, name: &str) -> Result<(), OutputError> {
    writeln!(out, "Hello, {name}!").map_err(OutputError::Greeting)?;
    tracing::debug!(name, "greeting written");
    Ok(())
}

/// Write the fixed farewell line.
///
/// # Errors
///
/// Returns [`OutputError::Farewell`] if the writer fails.
pub fn goodbye<W: Write>(out: &mut W) -> Result<(), OutputError> {
    writeln!(out, "{FAREWELL}").map_err(OutputError::Farewell)?;
    tracing::debug!("farewell written");
    Ok(())
}
