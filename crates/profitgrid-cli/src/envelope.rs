use std::fmt::{Display, Formatter};

use profitgrid_core::{ApiError, View};
use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

/// Request identifier (UUID v4) stamped on every envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Standard response envelope for `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub meta: EnvelopeMeta,
    pub data: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<EnvelopeError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnvelopeMeta {
    pub request_id: RequestId,
    pub generated_at: String,
    pub command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
    pub latency_ms: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl EnvelopeMeta {
    pub fn new(command: &'static str, latency_ms: u64) -> Self {
        let generated_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_default();

        Self {
            request_id: RequestId::new_v4(),
            generated_at,
            command,
            view: None,
            latency_ms,
            warnings: Vec::new(),
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// Backend failure surfaced in the envelope instead of aborting the command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeError {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl EnvelopeError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
        }
    }
}

impl From<&ApiError> for EnvelopeError {
    fn from(error: &ApiError) -> Self {
        let code = match error {
            ApiError::Status { .. } => "api_status",
            ApiError::NotAuthenticated => "not_authenticated",
            ApiError::Transport(_) => "transport",
            ApiError::Decode(_) => "decode",
        };

        Self {
            code,
            message: error.user_message(),
            status: error.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_keep_backend_detail() {
        let error = EnvelopeError::from(&ApiError::Status {
            status: 404,
            detail: String::from("Stock symbol not found"),
        });

        assert_eq!(error.code, "api_status");
        assert_eq!(error.message, "Stock symbol not found");
        assert_eq!(error.status, Some(404));
    }

    #[test]
    fn transport_errors_use_generic_message() {
        let error = EnvelopeError::from(&ApiError::Transport(String::from("refused")));
        assert_eq!(error.code, "transport");
        assert_eq!(error.message, "An unexpected error occurred.");
        assert_eq!(error.status, None);
    }

    #[test]
    fn meta_serializes_without_empty_fields() {
        let meta = EnvelopeMeta::new("quote", 12);
        let json = serde_json::to_value(&meta).expect("meta serializes");

        assert_eq!(json["command"], "quote");
        assert_eq!(json["latency_ms"], 12);
        assert!(json.get("warnings").is_none());
        assert!(json.get("view").is_none());
        assert_eq!(json["request_id"].as_str().map(str::len), Some(36));
    }
}
