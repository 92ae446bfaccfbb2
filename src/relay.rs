//! Translation of inbound platform callbacks into outbound requests.
//!
//! The calling platform delivers call events as plain HTTP callbacks aimed
//! at this service. The notification processor consumes them as
//! self-contained request objects, so each callback is rebuilt with an
//! absolute target URI and its headers split into the request and content
//! collections.
//!
//! Header values are copied without validation. Duplicate or malformed
//! values pass through unchanged; the processor sees exactly what the
//! platform sent.

use axum::http::header::{self, HeaderName};
use axum::http::{HeaderMap, HeaderValue, Method, Uri};
use bytes::Bytes;

use crate::error::AppError;
use crate::models::request::{OutboundRequest, RequestContent};

/// Headers that belong on the content collection, not the request one.
///
/// An inbound header from this set moves to the outbound content when
/// content is attached and is dropped when it is not.
const CONTENT_HEADERS: &[&str] = &[
    "allow",
    "content-disposition",
    "content-encoding",
    "content-language",
    "content-length",
    "content-location",
    "content-md5",
    "content-range",
    "content-type",
    "expires",
    "last-modified",
];

/// Returns `true` for methods whose callbacks may carry a body.
///
/// GET, HEAD, DELETE and TRACE callbacks never get content attached, even
/// when the platform sent one.
pub fn carries_body(method: &Method) -> bool {
    !matches!(method.as_str(), "GET" | "HEAD" | "DELETE" | "TRACE")
}

fn is_content_header(name: &HeaderName) -> bool {
    CONTENT_HEADERS.contains(&name.as_str())
}

/// Rebuilds an inbound callback as an [`OutboundRequest`].
///
/// `body` is the collected inbound body, or `None` when the caller did not
/// read one. Methods that never carry a body get no content regardless of
/// `body`; every other method gets content attached, possibly empty.
///
/// # Errors
///
/// Returns [`AppError::Translation`] when the inbound request carries no
/// usable authority or the rebuilt target URI is malformed.
pub fn build_outbound_request(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: Option<Bytes>,
) -> Result<OutboundRequest, AppError> {
    let authority = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .or_else(|| uri.authority().map(ToString::to_string))
        .ok_or_else(|| AppError::Translation("Inbound request has no host".to_string()))?;

    let scheme = uri.scheme_str().unwrap_or("http");
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());

    let target: Uri = format!("{scheme}://{authority}{path_and_query}")
        .parse()
        .map_err(|e| AppError::Translation(format!("Invalid target URI: {e}")))?;

    let mut content = if carries_body(method) {
        Some(RequestContent::new(body.unwrap_or_default()))
    } else {
        None
    };

    let mut request_headers = HeaderMap::new();
    for (name, value) in headers {
        if is_content_header(name) {
            if let Some(ref mut c) = content {
                c.headers.append(name.clone(), value.clone());
            }
        } else {
            request_headers.append(name.clone(), value.clone());
        }
    }

    // The outbound host must match the rebuilt target, not whatever the
    // platform put on the wire.
    let host = HeaderValue::from_str(&authority)
        .map_err(|e| AppError::Translation(format!("Invalid host value: {e}")))?;
    request_headers.insert(header::HOST, host);

    Ok(OutboundRequest {
        method: method.clone(),
        uri: target,
        headers: request_headers,
        content,
    })
}
