use async_trait::async_trait;
use axum::http::header;

use crate::models::request::OutboundRequest;
use crate::models::response::ProcessorResponse;

/// Error raised by a notification processor.
#[derive(Debug, Clone)]
pub struct ProcessorError(pub String);

impl std::fmt::Display for ProcessorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ProcessorError {}

/// The notification-processing capability the relay forwards into.
///
/// This is the boundary to the communications SDK: signature validation,
/// event parsing and call-state tracking all happen behind it. The relay
/// only hands over the rebuilt request and waits for the answer.
#[async_trait]
pub trait NotificationProcessor: Send + Sync {
    async fn process_notification(
        &self,
        request: OutboundRequest,
    ) -> Result<ProcessorResponse, ProcessorError>;
}

/// Processor that forwards outbound requests to an HTTP endpoint.
///
/// Used when the SDK runs as its own service: the relay re-issues each
/// rebuilt request against the configured base URL, keeping the original
/// path, query, headers and body.
pub struct HttpNotificationProcessor {
    http_client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl HttpNotificationProcessor {
    /// # Errors
    ///
    /// Returns an error when `endpoint` is not a valid URL or the HTTP
    /// client cannot be constructed.
    pub fn new(endpoint: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let endpoint = reqwest::Url::parse(endpoint)?;
        let http_client = reqwest::Client::builder().build()?;

        Ok(HttpNotificationProcessor {
            http_client,
            endpoint,
        })
    }
}

#[async_trait]
impl NotificationProcessor for HttpNotificationProcessor {
    async fn process_notification(
        &self,
        request: OutboundRequest,
    ) -> Result<ProcessorResponse, ProcessorError> {
        let mut url = self.endpoint.clone();
        url.set_path(request.uri.path());
        url.set_query(request.uri.query());

        // The endpoint has its own authority; a host aimed at the relay
        // would be wrong here.
        let mut headers = request.headers;
        headers.remove(header::HOST);

        let mut builder = self.http_client.request(request.method, url).headers(headers);

        if let Some(content) = request.content {
            for (name, value) in &content.headers {
                builder = builder.header(name, value);
            }
            builder = builder.body(content.bytes);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ProcessorError(format!("Processor request failed: {e}")))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProcessorError(format!("Failed to read processor response: {e}")))?;

        if bytes.is_empty() {
            Ok(ProcessorResponse::empty())
        } else {
            Ok(ProcessorResponse::with_content(bytes))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_endpoint() {
        assert!(HttpNotificationProcessor::new("not a url").is_err());
    }

    #[test]
    fn test_new_accepts_http_endpoint() {
        assert!(HttpNotificationProcessor::new("http://127.0.0.1:9442").is_ok());
    }

    #[test]
    fn test_processor_error_display() {
        let error = ProcessorError("connection refused".to_string());
        assert_eq!(error.to_string(), "connection refused");
    }
}
