//! # reqlog
//!
//! Non-destructive diagnostic logging for outbound HTTP requests.
//!
//! This crate captures an outbound request's method, URL, headers, and body
//! into one human-readable record, without consuming the body: after logging,
//! the request carries a fresh, byte-for-byte readable copy for the real
//! sender that follows. It is meant to sit as a pre-send step inside an HTTP
//! client pipeline.
//!
//! ## Core Concepts
//!
//! - **[`OutboundRequest`]**: a request snapshot with an owned, replaceable
//!   body slot
//! - **[`LogSink`]**: where finished records go ([`TracingSink`],
//!   [`MemorySink`])
//! - **[`log_request`]**: render one request and write it to a sink
//! - **[`RequestLogger`]**: a reusable handle holding a shared sink
//! - **[`TeeReader`]**: the stream duplication that keeps the body intact
//!
//! ## Example
//!
//! ```ignore
//! use reqlog::{log_request, MemorySink, OutboundRequest};
//! use reqwest::Method;
//!
//! let mut request = OutboundRequest::new(Method::POST, "https://api.example.com/send")?
//!     .with_json(&serde_json::json!({"touser": "abc"}))?;
//!
//! let sink = MemorySink::new();
//! log_request(&sink, &mut request);
//!
//! // The body is still fully readable for the real sender.
//! let body = request.take_body().expect("body restored");
//! ```
//!
//! Logging is best-effort by design: a failing body read never aborts the
//! caller's request flow, the partial bytes are logged as-is.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod logger;
pub mod request;
pub mod sink;
pub mod tee;

// Re-exports
pub use logger::{log_request, RequestLogger};
pub use request::{Body, Headers, OutboundRequest, RequestError};
pub use sink::{LogSink, MemorySink, TracingSink};
pub use tee::TeeReader;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        log_request, LogSink, MemorySink, OutboundRequest, RequestError, RequestLogger,
        TracingSink,
    };
}
