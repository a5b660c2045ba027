//! CLI command implementations.

mod check;
mod compile;
mod revert;
mod strings;

pub use check::{run_check, CheckArgs};
pub use compile::{run_compile, CompileArgs};
pub use revert::{run_revert, RevertArgs};
pub use strings::{run_strings, StringsArgs};
