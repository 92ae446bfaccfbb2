use bytes::Bytes;
use serde::Serialize;

/// Response handed back by the notification processor.
///
/// The processor may answer without content; the relay treats that as an
/// empty 200 and never attempts a body read.
#[derive(Debug, Clone, Default)]
pub struct ProcessorResponse {
    pub content: Option<Bytes>,
}

impl ProcessorResponse {
    pub fn empty() -> Self {
        ProcessorResponse { content: None }
    }

    pub fn with_content(bytes: impl Into<Bytes>) -> Self {
        ProcessorResponse {
            content: Some(bytes.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusOk {
    pub status: &'static str,
    pub server_version: &'static str,
}

impl StatusOk {
    pub fn with_version() -> Self {
        StatusOk {
            status: "ok",
            server_version: env!("CARGO_PKG_VERSION"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_has_no_content() {
        let response = ProcessorResponse::empty();
        assert!(response.content.is_none());
    }

    #[test]
    fn test_with_content_keeps_bytes() {
        let response = ProcessorResponse::with_content("hello");
        assert_eq!(response.content.unwrap().as_ref(), b"hello");
    }

    #[test]
    fn test_status_ok_serializes() {
        let json = serde_json::to_string(&StatusOk::with_version()).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("server_version"));
    }
}
