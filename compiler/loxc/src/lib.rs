//! Lox scanner driver.
//!
//! Library half of the `lox` binary: argument definitions, file and prompt
//! modes, token rendering and logging setup. All lexing happens in
//! [`lox_lexer::scan`]; this crate only moves text in and tokens out.

pub mod cli;
pub mod commands;
mod error;
pub mod render;
pub mod tracing_setup;

pub use cli::{Cli, OutputFormat, RunOptions};
pub use commands::{run_file, run_prompt, run_source, PROMPT};
pub use error::{CliError, EXIT_IO, EXIT_LEX_ERRORS, EXIT_SOFTWARE, EXIT_USAGE};
pub use tracing_setup::init_tracing;
