/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::table::DEFAULT_THEME;

/// Environment variable consulted when `--theme` is not given.
pub const THEME_ENV: &str = "ARROWHEAD_THEME";

/// arrowhead — render Arrowhead service-registry records as tables.
#[derive(Debug, Parser)]
#[command(
    name = "arrowhead",
    about = "Render Arrowhead service-registry records as styled tables",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Theme name. Falls back to $ARROWHEAD_THEME, then "solarized-dark".
    #[arg(long, global = true, value_name = "NAME")]
    pub theme: Option<String>,

    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit the title bar above rendered tables.
    #[arg(long, global = true)]
    pub no_title: bool,

    /// Print parse/render timing to stderr for debugging.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The effective theme name: flag, then environment, then default.
    #[must_use]
    pub fn theme_name(&self) -> String {
        resolve_theme_name(self.theme.as_deref(), std::env::var(THEME_ENV).ok())
    }
}

/// Resolve the effective theme name from flag and environment values.
#[must_use]
pub fn resolve_theme_name(flag: Option<&str>, env: Option<String>) -> String {
    flag.map(str::to_owned)
        .or(env)
        .unwrap_or_else(|| DEFAULT_THEME.to_owned())
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// Pretty-printed JSON passthrough of the parsed records.
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Themed table (human-readable).
    Table,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render system record(s) from a JSON payload.
    System(SystemArgs),
    /// Render service-definition record(s) from a JSON payload.
    Service(ServiceArgs),
    /// Render device record(s) from a JSON payload.
    Device(DeviceArgs),
    /// List the built-in themes.
    Themes,
}

/// Arguments for `arrowhead system`.
#[derive(Debug, Parser)]
pub struct SystemArgs {
    /// JSON payload: a record object, an array, or a registry list
    /// envelope. Reads stdin when absent or "-".
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for `arrowhead service`.
#[derive(Debug, Parser)]
pub struct ServiceArgs {
    /// JSON payload: a record object, an array, or a registry list
    /// envelope. Reads stdin when absent or "-".
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Arguments for `arrowhead device`.
#[derive(Debug, Parser)]
pub struct DeviceArgs {
    /// JSON payload: a record object, an array, or a registry list
    /// envelope. Reads stdin when absent or "-".
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,
}
