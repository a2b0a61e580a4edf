/// Output formatting: format resolution, JSON helpers, error output.
use std::io::{IsTerminal, Write};

use serde::Serialize;

use super::args::OutputFormat;
use crate::types::ErrorOutput;

/// Resolve the effective output format, handling `--json` flag and TTY
/// auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all command handlers.
pub struct OutputCtx {
    /// Resolved output format (never `Auto` after construction).
    pub format: OutputFormat,
    /// Effective theme name.
    pub theme_name: String,
    /// When true, rendered tables carry no title bar.
    pub no_title: bool,
    /// When true, print timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(
        fmt: OutputFormat,
        json_flag: bool,
        theme_name: String,
        no_title: bool,
        debug: bool,
    ) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            theme_name,
            no_title,
            debug,
        }
    }

    /// The title to render: `default` normally, empty under `--no-title`
    /// (an empty title suppresses the renderer's title bar).
    #[must_use]
    pub fn title<'a>(&self, default: &'a str) -> &'a str {
        if self.no_title { "" } else { default }
    }

    /// Start a named debug timer. Prints elapsed on drop only when
    /// `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

/// Pretty-print a value as JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

/// Print a value as compact single-line JSON to stdout.
pub fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
