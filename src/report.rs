//! Argument reporting: a separator line followed by one `argv[i]: value` line
//! per argument, in order.

use crate::error::OutputError;
use std::ffi::OsStr;
use std::fmt;
use std::io::{self, Write};
use std::iter::{Enumerate, FusedIterator};
use std::slice;

/// Marker printed before the argument lines.
pub const SEPARATOR: &str = "------main------";

/// One reported argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentLine<'a> {
    pub index: usize,
    pub value: &'a OsStr,
}

impl ArgumentLine<'_> {
    /// Write the line using the raw bytes of the value, so arguments that are
    /// not valid UTF-8 reach the output untouched.
    ///
    /// # Errors
    ///
    /// Returns the writer's error.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "argv[{}]: ", self.index)?;
        out.write_all(self.value.as_encoded_bytes())?;
        out.write_all(b"\n")
    }
}

impl fmt::Display for ArgumentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "argv[{}]: {}", self.index, self.value.to_string_lossy())
    }
}

/// Lazy iterator over the argument lines.
///
/// Cloning restarts from wherever the clone was taken, so cloning a fresh
/// iterator gives a second full pass.
#[derive(Debug)]
pub struct ArgumentLines<'a, T> {
    inner: Enumerate<slice::Iter<'a, T>>,
}

// Manual impl: a derive would require `T: Clone`.
impl<T> Clone for ArgumentLines<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T: AsRef<OsStr>> Iterator for ArgumentLines<'a, T> {
    type Item = ArgumentLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(index, value)| ArgumentLine {
            index,
            value: value.as_ref(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: AsRef<OsStr>> ExactSizeIterator for ArgumentLines<'_, T> {}

impl<T: AsRef<OsStr>> FusedIterator for ArgumentLines<'_, T> {}

/// Build the lazy line sequence for `args`.
#[must_use]
pub fn argument_lines<T: AsRef<OsStr>>(args: &[T]) -> ArgumentLines<'_, T> {
    ArgumentLines {
        inner: args.iter().enumerate(),
    }
}

/// Write the separator, then every argument line.
///
/// An empty `args` still writes the separator.
///
/// # Errors
///
/// Returns [`OutputError::Separator`] or [`OutputError::Argument`] naming the
/// line that could not be written.
pub fn report_arguments<W, T>(out: &mut W, args: &[T]) -> Result<(), OutputError>
where
    W: Write,
    T: AsRef<OsStr>,
{
    writeln!(out, "{SEPARATOR}").map_err(OutputError::Separator)?;

    for line in argument_lines(args) {
        line.write_to(out).map_err(|source| OutputError::Argument {
            index: line.index,
            source,
        })?;
    }

    tracing::debug!(count = args.len(), "arguments reported");
    Ok(())
}
