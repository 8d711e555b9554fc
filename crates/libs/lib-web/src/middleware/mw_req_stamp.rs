//! # Request Stamping Middleware
//!
//! Gives every request an ID, stored in the request extensions and echoed
//! back as `X-Request-ID`. A well-formed ID sent by the client (for example
//! by a reverse proxy) is kept instead of generating a new one.
//!
//! ```rust,no_run
//! use axum::extract::Extension;
//! use lib_web::middleware::RequestStamp;
//!
//! async fn handler(Extension(stamp): Extension<RequestStamp>) -> String {
//!     format!("Request ID: {}", stamp.id)
//! }
//! ```

use std::time::SystemTime;

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest client-supplied ID that is accepted as-is.
const MAX_FORWARDED_ID_LEN: usize = 64;

#[derive(Clone, Debug)]
pub struct RequestStamp {
    pub id: String,
    pub received_at: SystemTime,
}

impl RequestStamp {
    fn from_headers(headers: &HeaderMap) -> Self {
        let forwarded = headers
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|id| is_acceptable_id(id));

        Self {
            id: forwarded
                .map(str::to_string)
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            received_at: SystemTime::now(),
        }
    }
}

fn is_acceptable_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_FORWARDED_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::from_headers(req.headers());
    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_id_without_header() {
        let stamp = RequestStamp::from_headers(&HeaderMap::new());
        assert!(Uuid::parse_str(&stamp.id).is_ok());
    }

    #[test]
    fn test_keeps_forwarded_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("edge-42_a"));
        assert_eq!(RequestStamp::from_headers(&headers).id, "edge-42_a");
    }

    #[test]
    fn test_replaces_malformed_forwarded_id() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("two words"));
        let stamp = RequestStamp::from_headers(&headers);
        assert_ne!(stamp.id, "two words");

        let long = "a".repeat(MAX_FORWARDED_ID_LEN + 1);
        assert!(!is_acceptable_id(&long));
    }
}
