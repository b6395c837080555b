//! CLI module containing the main entry point logic.
//!
//! Kept out of main.rs so the whole run can be driven against any writer and
//! argument list.

use crate::error::OutputError;
use crate::{DEFAULT_NAME, greeting, report};
use clap::Parser as ClapParser;
use std::ffi::{OsStr, OsString};
use std::io::{self, Write};
use std::iter;

/// Escape token handed to clap ahead of the user's arguments so that none of
/// them (including a literal `--`) is read as a flag.
const ESCAPE: &str = "--";

/// CLI arguments for the tutorial tool.
///
/// Nothing is interpreted: every token after the program path is an operand.
#[derive(ClapParser, Debug)]
#[command(name = "tutorial")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Arguments to echo back, verbatim
    #[arg(value_name = "ARGS")]
    operands: Vec<OsString>,
}

/// The argument sequence the process was started with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    argv: Vec<OsString>,
}

impl Invocation {
    /// Build an invocation from a full argument list, program path first.
    ///
    /// An empty list (a host that omits the program slot) gives an empty
    /// invocation.
    pub fn from_args_os<I, A>(args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let Some(program) = args.next() else {
            return Self::default();
        };
        // With the escape in front, every user token is a positional value,
        // so parsing cannot fail.
        let cli = Cli::parse_from(
            iter::once(program.clone())
                .chain(iter::once(OsString::from(ESCAPE)))
                .chain(args),
        );
        let operands = cli.operands;

        let mut argv = Vec::with_capacity(operands.len() + 1);
        argv.push(program);
        argv.extend(operands);
        Self { argv }
    }

    /// Every argument, program path at index 0.
    #[must_use]
    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    /// The invocation path, if the host supplied one.
    #[must_use]
    pub fn program(&self) -> Option<&OsStr> {
        self.argv.first().map(OsString::as_os_str)
    }

    /// Arguments after the program path.
    #[must_use]
    pub fn operands(&self) -> &[OsString] {
        self.argv.get(1..).unwrap_or_default()
    }
}

/// Greet, say goodbye, then report every argument, in that order.
///
/// # Errors
///
/// Returns the [`OutputError`] for the first section that could not be
/// written; later sections are skipped.
pub fn run<W: Write>(out: &mut W, invocation: &Invocation) -> Result<(), OutputError> {
    greeting::hello(out, DEFAULT_NAME)?;
    greeting::goodbye(out)?;
    report::report_arguments(out, invocation.argv())?;
    out.flush().map_err(OutputError::Flush)
}

/// Install a stderr subscriber when `RUST_LOG` is set. Stdout stays untouched.
fn init_logging() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }
}

/// Main CLI logic. Always returns normally, so the process exits with 0.
pub fn run_cli() {
    init_logging();

    let invocation = Invocation::from_args_os(std::env::args_os());
    tracing::debug!(argc = invocation.argv().len(), "starting");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    match run(&mut out, &invocation) {
        Ok(()) => tracing::debug!("done"),
        Err(err) if err.is_broken_pipe() => {
            tracing::debug!(error = %err, "output closed early");
        }
        Err(err) => {
            tracing::warn!(error = %err, cause = %err.io_error(), "output incomplete");
        }
    }
}
