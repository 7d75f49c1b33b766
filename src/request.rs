//! Outbound request model.
//!
//! [`OutboundRequest`] is a loggable snapshot of an HTTP request in flight:
//! typed method and URL, an insertion-ordered header multimap, and an owned,
//! replaceable body slot. The body slot is what makes non-destructive logging
//! possible: the logger takes the stream out, reads it, and installs an
//! equivalent copy back in.

use indexmap::IndexMap;
use reqwest::{Method, Url};
use serde::Serialize;
use std::fmt;
use std::io::{Cursor, Read};
use thiserror::Error;

/// A one-shot readable request body stream.
pub type Body = Box<dyn Read + Send>;

/// Ordered header multimap: name, in the case it was given, to its ordered
/// values. A name may repeat by carrying several values.
pub type Headers = IndexMap<String, Vec<String>>;

/// Errors raised while constructing a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request URL could not be parsed.
    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The JSON body could not be serialized.
    #[error("failed to encode request body as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An outbound HTTP request captured for logging.
///
/// The body is an owned slot rather than a shared reference so that a logger
/// can consume the stream and put a fresh, fully-readable copy back before
/// the real sender runs.
pub struct OutboundRequest {
    method: Method,
    url: Url,
    headers: Headers,
    body: Option<Body>,
}

impl OutboundRequest {
    /// Create a request with the given method and URL.
    pub fn new(method: Method, url: impl AsRef<str>) -> Result<Self, RequestError> {
        Ok(Self {
            method,
            url: Url::parse(url.as_ref())?,
            headers: Headers::new(),
            body: None,
        })
    }

    /// Create a GET request.
    pub fn get(url: impl AsRef<str>) -> Result<Self, RequestError> {
        Self::new(Method::GET, url)
    }

    /// Create a POST request.
    pub fn post(url: impl AsRef<str>) -> Result<Self, RequestError> {
        Self::new(Method::POST, url)
    }

    /// Append a header value, keeping insertion order.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    /// Install a body stream.
    #[must_use]
    pub fn with_body(mut self, body: impl Read + Send + 'static) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    /// Install an in-memory body.
    #[must_use]
    pub fn with_bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.body = Some(Box::new(Cursor::new(bytes.into())));
        self
    }

    /// Serialize `value` as the JSON body and set the content type.
    pub fn with_json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, RequestError> {
        let bytes = serde_json::to_vec(value)?;
        self.headers.insert(
            "Content-Type".to_string(),
            vec!["application/json".to_string()],
        );
        self.body = Some(Box::new(Cursor::new(bytes)));
        Ok(self)
    }

    /// Snapshot a `reqwest` request for logging.
    ///
    /// Buffered bodies are copied; streaming bodies are skipped, since they
    /// cannot be duplicated without consuming them.
    pub fn from_reqwest(request: &reqwest::Request) -> Self {
        let mut headers = Headers::new();
        for (name, value) in request.headers() {
            headers
                .entry(name.as_str().to_string())
                .or_default()
                .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
        }

        let body = request
            .body()
            .and_then(|body| body.as_bytes())
            .map(|bytes| Box::new(Cursor::new(bytes.to_vec())) as Body);

        Self {
            method: request.method().clone(),
            url: request.url().clone(),
            headers,
            body,
        }
    }

    /// The request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The request headers.
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Mutable access to the request headers.
    pub fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    /// Whether a body is currently installed.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Take the body stream out, leaving the slot empty.
    pub fn take_body(&mut self) -> Option<Body> {
        self.body.take()
    }

    /// Put a body stream into the slot, replacing any existing one.
    pub fn set_body(&mut self, body: impl Read + Send + 'static) {
        self.body = Some(Box::new(body));
    }
}

impl fmt::Debug for OutboundRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutboundRequest")
            .field("method", &self.method)
            .field("url", &self.url.as_str())
            .field("headers", &self.headers)
            .field("body", &self.body.as_ref().map(|_| "<stream>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE};

    #[test]
    fn test_new_parses_url() {
        let request = OutboundRequest::new(Method::POST, "https://api.example.com/send").unwrap();
        assert_eq!(request.method(), &Method::POST);
        assert_eq!(request.url().as_str(), "https://api.example.com/send");
        assert!(!request.has_body());
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = OutboundRequest::get("not a url").unwrap_err();
        assert!(matches!(err, RequestError::InvalidUrl(_)));
    }

    #[test]
    fn test_with_header_accumulates_values_in_order() {
        let request = OutboundRequest::get("https://example.com")
            .unwrap()
            .with_header("X-A", "1")
            .with_header("X-A", "2")
            .with_header("X-B", "3");

        assert_eq!(request.headers()["X-A"], vec!["1", "2"]);
        assert_eq!(request.headers()["X-B"], vec!["3"]);

        let names: Vec<&str> = request.headers().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["X-A", "X-B"]);
    }

    #[test]
    fn test_with_json_sets_content_type_and_body() {
        let mut request = OutboundRequest::post("https://api.example.com/send")
            .unwrap()
            .with_json(&serde_json::json!({"touser": "abc"}))
            .unwrap();

        assert_eq!(request.headers()["Content-Type"], vec!["application/json"]);

        let mut body = Vec::new();
        request.take_body().unwrap().read_to_end(&mut body).unwrap();
        assert_eq!(body, br#"{"touser":"abc"}"#);
    }

    #[test]
    fn test_take_and_set_body_round_trip() {
        let mut request = OutboundRequest::get("https://example.com")
            .unwrap()
            .with_bytes("hello");

        let mut first = Vec::new();
        request.take_body().unwrap().read_to_end(&mut first).unwrap();
        assert_eq!(first, b"hello");
        assert!(!request.has_body());

        request.set_body(Cursor::new(b"world".to_vec()));
        let mut second = Vec::new();
        request
            .take_body()
            .unwrap()
            .read_to_end(&mut second)
            .unwrap();
        assert_eq!(second, b"world");
    }

    #[test]
    fn test_from_reqwest_snapshot() {
        let url = Url::parse("https://api.example.com/send").unwrap();
        let mut real = reqwest::Request::new(Method::POST, url);
        real.headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        *real.body_mut() = Some(reqwest::Body::from(r#"{"touser":"abc"}"#));

        let mut snapshot = OutboundRequest::from_reqwest(&real);
        assert_eq!(snapshot.method(), &Method::POST);
        assert_eq!(snapshot.url().as_str(), "https://api.example.com/send");
        assert_eq!(snapshot.headers()["content-type"], vec!["application/json"]);

        let mut body = Vec::new();
        snapshot
            .take_body()
            .unwrap()
            .read_to_end(&mut body)
            .unwrap();
        assert_eq!(body, br#"{"touser":"abc"}"#);
    }
}
