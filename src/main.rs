//! # tutorial
//!
//! Greets Bob, says goodbye, and echoes its arguments.
//!
//! - `tutorial` prints the greeting, the farewell, and `argv[0]`
//! - `tutorial a "b c"` also prints `argv[1]: a` and `argv[2]: b c`
//!
//! No argument is interpreted, and the exit status is always 0.

fn main() {
    tutorial::cli::run_cli();
}
