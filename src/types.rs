/// Domain records returned by the Arrowhead service registry.
///
/// Field names follow the registry's JSON (`camelCase`). These types never
/// reach the renderer — the command layer converts them to display strings
/// through the formatter helpers first.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A system registered with the service registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    /// Registry-assigned identifier.
    pub id: i64,
    /// Unique system name (e.g., "orchestrator").
    pub system_name: String,
    /// Network address the system is reachable at.
    pub address: String,
    /// Port the system listens on.
    pub port: u16,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A service definition known to the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Registry-assigned identifier.
    pub id: i64,
    /// Service definition name (e.g., "temperature").
    pub service_definition: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A device registered with the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Registry-assigned identifier.
    pub id: i64,
    /// Unique device name.
    pub device_name: String,
    /// Network address of the device.
    pub address: String,
    /// Hardware MAC address.
    pub mac_address: String,
    /// Registration timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `CliError`.
    #[must_use]
    pub fn from_cli_error(err: &crate::commands::CliError) -> Self {
        use crate::commands::CliError;
        use crate::table::RenderError;
        let code = match err {
            CliError::InputNotFound { .. } => "input_not_found",
            CliError::Io(_) => "io_error",
            CliError::InvalidInput(_) => "invalid_input",
            CliError::Render(RenderError::UnknownTheme { .. }) => "unknown_theme",
            CliError::Render(RenderError::RowShape { .. }) => "row_shape",
            CliError::Render(RenderError::EmptyTable) => "empty_table",
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.to_owned(),
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_from_registry_json() {
        let json = r#"{
            "id": 42,
            "systemName": "OrchestratorA",
            "address": "192.168.1.10",
            "port": 8441,
            "createdAt": "2024-05-01T12:00:00Z",
            "updatedAt": "2024-05-02T08:30:00Z"
        }"#;
        let system: System = serde_json::from_str(json).unwrap();
        assert_eq!(system.id, 42);
        assert_eq!(system.system_name, "OrchestratorA");
        assert_eq!(system.address, "192.168.1.10");
        assert_eq!(system.port, 8441);
    }

    #[test]
    fn test_system_ignores_unknown_fields() {
        // Registry responses carry fields (authenticationInfo, metadata)
        // this client does not render.
        let json = r#"{
            "id": 1,
            "systemName": "gateway",
            "address": "10.0.0.1",
            "port": 8453,
            "authenticationInfo": "base64...",
            "createdAt": "2024-05-01T12:00:00Z",
            "updatedAt": "2024-05-01T12:00:00Z"
        }"#;
        assert!(serde_json::from_str::<System>(json).is_ok());
    }

    #[test]
    fn test_device_from_registry_json() {
        let json = r#"{
            "id": 3,
            "deviceName": "sensor-7",
            "address": "10.0.0.7",
            "macAddress": "00:1B:44:11:3A:B7",
            "createdAt": "2024-05-01T12:00:00Z",
            "updatedAt": "2024-05-01T12:00:00Z"
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.device_name, "sensor-7");
        assert_eq!(device.mac_address, "00:1B:44:11:3A:B7");
    }
}
