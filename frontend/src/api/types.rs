use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Error shape returned by the backend; transport and decoding failures are
/// folded into the same type with a synthetic code.
#[derive(Debug, Clone, PartialEq, Error, Deserialize)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default = "unknown_code")]
    pub code: String,
    #[serde(default)]
    pub details: Option<Value>,
}

fn unknown_code() -> String {
    "UNKNOWN".to_string()
}

impl ApiError {
    pub fn request_failed(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: unknown_code(),
            details: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceAction {
    CheckIn,
    CheckOut,
}

impl AttendanceAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceAction::CheckIn => "check_in",
            AttendanceAction::CheckOut => "check_out",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkAttendanceRequest {
    pub action: AttendanceAction,
    pub time: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportResource {
    Leaves,
    Attendance,
}

impl ExportResource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportResource::Leaves => "leaves",
            ExportResource::Attendance => "attendance",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ExportResource::Leaves => "Leave report",
            ExportResource::Attendance => "Attendance report",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// One export control, fixed at construction instead of read off the DOM at
/// click time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTarget {
    pub resource: ExportResource,
    pub format: ExportFormat,
}

impl ExportTarget {
    pub fn new(resource: ExportResource, format: ExportFormat) -> Self {
        Self { resource, format }
    }

    pub fn filename(&self) -> String {
        format!("{}_export.{}", self.resource.as_str(), self.format.extension())
    }

    pub fn label(&self) -> String {
        format!(
            "{} ({})",
            self.resource.title(),
            self.format.extension().to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_action_serializes_snake_case() {
        let body = serde_json::to_value(MarkAttendanceRequest {
            action: AttendanceAction::CheckIn,
            time: "09:05".to_string(),
        })
        .unwrap();
        assert_eq!(body["action"], "check_in");
        assert_eq!(body["time"], "09:05");
    }

    #[test]
    fn export_target_filename_combines_resource_and_extension() {
        let target = ExportTarget::new(ExportResource::Leaves, ExportFormat::Csv);
        assert_eq!(target.filename(), "leaves_export.csv");
        let target = ExportTarget::new(ExportResource::Attendance, ExportFormat::Pdf);
        assert_eq!(target.filename(), "attendance_export.pdf");
    }

    #[test]
    fn api_error_deserializes_with_default_code() {
        let err: ApiError = serde_json::from_value(serde_json::json!({
            "error": "something broke"
        }))
        .unwrap();
        assert_eq!(err.error, "something broke");
        assert_eq!(err.code, "UNKNOWN");
        assert!(err.details.is_none());
    }
}
