//! `--version` and `--help` output.

use crate::config::{ENV_API_URL, ENV_MODERATION_ACTIONS};
use crate::observability::ENV_LOG;

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_text() -> String {
    format!("smart-alec {}", VERSION)
}

pub fn help_text() -> String {
    format!(
        "\
smart-alec {VERSION}
AI-Powered Comment Moderation, in your terminal.

USAGE:
    smart-alec [OPTIONS]

OPTIONS:
    --api-url <URL>               Moderation API base URL
    --enable-moderation-actions   Wire Approve/Remove on the moderator dashboard
    -h, --help                    Print help
    -V, --version                 Print version

ENVIRONMENT:
    {ENV_API_URL}          API base URL (default http://localhost:8000/api)
    {ENV_MODERATION_ACTIONS}   1/true to enable moderation actions
    {ENV_LOG}               Log filter (default info)
"
    )
}
