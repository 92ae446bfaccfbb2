use axum::http::{HeaderMap, Method, Uri};
use bytes::Bytes;

/// Outbound request rebuilt from an inbound platform callback.
///
/// Headers live in two collections, mirroring the split the notification
/// processor expects: request headers on the message itself, entity headers
/// on the attached content.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    /// Absolute target URI; authority comes from the inbound request's host.
    pub uri: Uri,
    pub headers: HeaderMap,
    pub content: Option<RequestContent>,
}

/// Body of an outbound request together with its entity headers.
#[derive(Debug, Clone)]
pub struct RequestContent {
    pub bytes: Bytes,
    pub headers: HeaderMap,
}

impl RequestContent {
    pub fn new(bytes: Bytes) -> Self {
        RequestContent {
            bytes,
            headers: HeaderMap::new(),
        }
    }
}
