//! Errors raised while writing the program's output.

use std::io;
use thiserror::Error;

/// A write to the output stream failed.
///
/// Each variant names the section that was being written so a log line is
/// enough to tell how far the run got.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write greeting")]
    Greeting(#[source] io::Error),

    #[error("failed to write farewell")]
    Farewell(#[source] io::Error),

    #[error("failed to write separator")]
    Separator(#[source] io::Error),

    #[error("failed to write argv[{index}]")]
    Argument {
        index: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to flush output")]
    Flush(#[source] io::Error),
}

impl OutputError {
    /// The underlying I/O error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Greeting(e) | Self::Farewell(e) | Self::Separator(e) | Self::Flush(e) => e,
            Self::Argument { source, .. } => source,
        }
    }

    /// True when the reader went away (e.g. `tutorial | head -1`).
    #[must_use]
    pub fn is_broken_pipe(&self) -> bool {
        self.io_error().kind() == io::ErrorKind::BrokenPipe
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_error_message_includes_index() {
        let err = OutputError::Argument {
            index: 3,
            source: io::Error::other("boom"),
        };
        assert_eq!(err.to_string(), "failed to write argv[3]");
    }

    #[test]
    fn test_broken_pipe_detection() {
        let err = OutputError::Farewell(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(err.is_broken_pipe());

        let err = OutputError::Flush(io::Error::other("disk full"));
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = OutputError::Separator(io::Error::other("closed"));
        let source = err.source().expect("source should be set");
        assert_eq!(source.to_string(), "closed");
    }
}
