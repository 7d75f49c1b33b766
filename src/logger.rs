//! Request capture and logging.
//!
//! [`log_request`] renders one outbound request into a single record and
//! hands it to a sink, leaving the request body fully readable for the real
//! sender that follows.

use crate::request::OutboundRequest;
use crate::sink::{LogSink, TracingSink};
use crate::tee::TeeReader;
use std::fmt;
use std::io::{Cursor, Read};
use std::sync::Arc;

/// Log one outbound request at info level.
///
/// The record carries the method, URL, every header value, and the body
/// bytes. When a body is present it is drained through a tee and an
/// equivalent in-memory stream is installed back on the request, so reading
/// the body afterwards yields exactly the bytes the logger saw.
///
/// Logging is best-effort: a body read failure is absorbed and whatever
/// bytes arrived before the error are still logged. The whole body is
/// buffered in memory, so callers with huge or streaming bodies should
/// truncate or bypass this call.
pub fn log_request(sink: &dyn LogSink, request: &mut OutboundRequest) {
    let mut output = String::new();
    output.push_str(&format!("{} {} ", request.method(), request.url()));

    output.push_str("\r\nrequest header: { \r\n");
    for (name, values) in request.headers() {
        for value in values {
            output.push_str(&format!("\t{}:{}\r\n", name, value));
        }
    }
    output.push_str("} \r\n");

    if let Some(body) = request.take_body() {
        output.push_str("request body:");
        let mut tee = TeeReader::new(body, Vec::new());
        let mut captured = Vec::new();
        // Best-effort read: on failure, the bytes read so far still count.
        let _ = tee.read_to_end(&mut captured);
        output.push_str(&String::from_utf8_lossy(&captured));

        let (_, side) = tee.into_parts();
        request.set_body(Cursor::new(side));
    }

    sink.info(&output);
}

/// Reusable logger handle for embedding in an HTTP pipeline.
#[derive(Clone)]
pub struct RequestLogger {
    sink: Arc<dyn LogSink>,
}

impl RequestLogger {
    /// Create a logger writing to the given sink.
    pub fn new(sink: impl LogSink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
        }
    }

    /// Create a logger from a shared sink.
    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Log one request. See [`log_request`].
    pub fn log(&self, request: &mut OutboundRequest) {
        log_request(self.sink.as_ref(), request);
    }
}

impl Default for RequestLogger {
    fn default() -> Self {
        Self::new(TracingSink)
    }
}

impl fmt::Debug for RequestLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestLogger").finish_non_exhaustive()
    }
}
