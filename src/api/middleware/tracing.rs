//! HTTP request/response tracing middleware.

use axum::body::Body;
use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span, field};

/// Trace layer type produced by [`layer`].
pub type HttpTraceLayer =
    TraceLayer<SharedClassifier<ServerErrorsAsFailures>, fn(&Request<Body>) -> Span>;

/// Creates a tracing middleware for HTTP requests.
///
/// Every request gets an `INFO` span with `method`, `path` and `version`.
/// The query string is left out, so preview links do not leak into every
/// log line. Two fields start empty and are filled in while the request runs:
///
/// - `target`: what the request is about (preview link, thread id, page)
/// - `error`: the message of an error response
///
/// Responses are logged at `INFO` with status and latency in milliseconds.
///
/// ```text
/// INFO request{method=GET path=/api/preview version=HTTP/1.1 target=https://bit.ly/x}: finished processing request latency=412 ms status=200
/// INFO request{method=GET path=/api/threads/7 version=HTTP/1.1 target=7 error="Thread not found"}: finished processing request latency=35 ms status=404
/// ```
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_span as fn(&Request<Body>) -> Span)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

fn make_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        version = ?request.version(),
        target = field::Empty,
        error = field::Empty,
    )
}

/// Records what the current request is about on its span.
pub fn record_target(target: impl std::fmt::Display) {
    Span::current().record("target", field::display(target));
}

/// Records an error message on the current request span.
pub fn record_error(message: &str) {
    Span::current().record("error", message);
}
