//! CLI module.
//!
//! The dispatcher is called early in `main()` to handle informational flags
//! before the terminal is touched:
//!
//! ```ignore
//! use smart_alec::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args());
//! if let Some(code) = run_cli_command(&command) {
//!     std::process::exit(code);
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, RunOptions};
pub use version::{help_text, version_text, VERSION};

/// Handle commands that do not start the TUI.
///
/// Returns the process exit code, or `None` for [`CliCommand::RunTui`].
pub fn run_cli_command(command: &CliCommand) -> Option<i32> {
    match command {
        CliCommand::Version => {
            println!("{}", version_text());
            Some(0)
        }
        CliCommand::Help => {
            print!("{}", help_text());
            Some(0)
        }
        CliCommand::Invalid(message) => {
            eprintln!("error: {}\n\n{}", message, help_text());
            Some(2)
        }
        CliCommand::RunTui(_) => None,
    }
}
