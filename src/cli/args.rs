//! Command-line argument parsing.
//!
//! Determines whether to print information and exit or to start the TUI,
//! and collects the overrides the TUI run should apply on top of the
//! environment configuration.

use crate::config::AppConfig;

/// Overrides collected from the command line for a TUI run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    /// `--api-url <URL>`
    pub api_url: Option<String>,
    /// `--enable-moderation-actions`
    pub moderation_actions: bool,
}

impl RunOptions {
    /// Apply the overrides to a configuration.
    pub fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = &self.api_url {
            config = config.with_api_base_url(url.clone());
        }
        if self.moderation_actions {
            config = config.with_moderation_actions(true);
        }
        config
    }
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Arguments could not be parsed
    Invalid(String),
    /// Run the TUI application (default)
    RunTui(RunOptions),
}

/// Parse command-line arguments and return the appropriate command.
///
/// The first item is the program name and is skipped. `--version` and
/// `--help` win over everything else.
///
/// # Examples
///
/// ```
/// use smart_alec::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["smart-alec".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--enable-moderation-actions" => options.moderation_actions = true,
            "--api-url" => match args.next() {
                Some(url) if !url.starts_with('-') => options.api_url = Some(url),
                _ => return CliCommand::Invalid("--api-url requires a URL".to_string()),
            },
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    if url.is_empty() {
                        return CliCommand::Invalid("--api-url requires a URL".to_string());
                    }
                    options.api_url = Some(url.to_string());
                } else {
                    return CliCommand::Invalid(format!("unknown argument: {}", other));
                }
            }
        }
    }

    CliCommand::RunTui(options)
}
