/// Command dispatch: routes `Command` enum variants to their
/// implementations, plus the shared JSON payload loader.
pub mod device;
pub mod service;
pub mod system;
pub mod themes;

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::table::{RenderError, ThemeStore};

/// Errors surfaced by the command layer.
#[derive(Debug, Error)]
pub enum CliError {
    /// The input file does not exist.
    #[error("Input file not found: {path}")]
    InputNotFound {
        /// The path that was opened.
        path: String,
    },

    /// Reading the input failed.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid JSON for the expected record shape.
    #[error("Invalid input payload: {0}")]
    InvalidInput(#[from] serde_json::Error),

    /// Theme lookup or table layout failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl CliError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Render(RenderError::UnknownTheme { .. }) => 2,
            Self::InputNotFound { .. } | Self::InvalidInput(_) => 4,
            Self::Io(_) | Self::Render(_) => 1,
        }
    }
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch(command: &Command, store: &ThemeStore, ctx: &OutputCtx) -> Result<(), CliError> {
    match command {
        Command::System(args) => system::run(args, store, ctx),
        Command::Service(args) => service::run(args, store, ctx),
        Command::Device(args) => device::run(args, store, ctx),
        Command::Themes => themes::run(store, ctx),
    }
}

/// A decoded input payload: one record (detail view) or a list of records
/// (grid view).
#[derive(Debug)]
pub enum Payload<T> {
    /// A single record object.
    One(T),
    /// A list of records, from a bare array or a registry list envelope.
    Many(Vec<T>),
}

/// The accepted JSON shapes. The registry's management API wraps lists in
/// `{"data": [...], "count": N}`; bare arrays and single objects are also
/// accepted so piped-through fragments render without massaging.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPayload<T> {
    Envelope { data: Vec<T> },
    Many(Vec<T>),
    One(T),
}

/// Parse a JSON payload into records.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when the text is not valid JSON for
/// any accepted shape.
pub fn parse_payload<T: DeserializeOwned>(raw: &str) -> Result<Payload<T>, CliError> {
    let parsed: RawPayload<T> = serde_json::from_str(raw)?;
    Ok(match parsed {
        RawPayload::Envelope { data } | RawPayload::Many(data) => Payload::Many(data),
        RawPayload::One(record) => Payload::One(record),
    })
}

/// Read the raw payload text from a file, or stdin when `path` is absent
/// or `-`.
///
/// # Errors
///
/// Returns `CliError::InputNotFound` for a missing file and `CliError::Io`
/// for other read failures.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                CliError::InputNotFound {
                    path: p.display().to_string(),
                }
            } else {
                CliError::Io(err)
            }
        }),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Read and parse an input payload in one step.
///
/// # Errors
///
/// Propagates `read_input` and `parse_payload` failures.
pub fn load_payload<T: DeserializeOwned>(path: Option<&Path>) -> Result<Payload<T>, CliError> {
    parse_payload(&read_input(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::System;

    const SYSTEM: &str = r#"{
        "id": 42,
        "systemName": "OrchestratorA",
        "address": "192.168.1.10",
        "port": 8441,
        "createdAt": "2024-05-01T12:00:00Z",
        "updatedAt": "2024-05-02T08:30:00Z"
    }"#;

    #[test]
    fn test_parse_single_object() {
        let payload: Payload<System> = parse_payload(SYSTEM).unwrap();
        assert!(matches!(payload, Payload::One(ref s) if s.id == 42));
    }

    #[test]
    fn test_parse_bare_array() {
        let raw = format!("[{SYSTEM}, {SYSTEM}]");
        let payload: Payload<System> = parse_payload(&raw).unwrap();
        assert!(matches!(payload, Payload::Many(ref list) if list.len() == 2));
    }

    #[test]
    fn test_parse_registry_envelope() {
        let raw = format!(r#"{{"data": [{SYSTEM}], "count": 1}}"#);
        let payload: Payload<System> = parse_payload(&raw).unwrap();
        assert!(matches!(payload, Payload::Many(ref list) if list.len() == 1));
    }

    #[test]
    fn test_parse_invalid_payload() {
        let result: Result<Payload<System>, CliError> = parse_payload("not json");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_exit_codes() {
        let unknown = CliError::Render(RenderError::UnknownTheme {
            name: "x".to_owned(),
        });
        assert_eq!(unknown.exit_code(), 2);
        let shape = CliError::Render(RenderError::RowShape {
            index: 0,
            expected: 2,
            found: 1,
        });
        assert_eq!(shape.exit_code(), 1);
        let missing = CliError::InputNotFound {
            path: "x.json".to_owned(),
        };
        assert_eq!(missing.exit_code(), 4);
    }
}
