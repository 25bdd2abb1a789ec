//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// Each request gets an `INFO` span with method, URI and version; the response
/// is logged at `INFO` with status and latency in milliseconds:
///
/// ```text
/// INFO request{method=POST uri=/api/url/shorten version=HTTP/1.1}: finished processing request latency=3 ms status=201
/// ```
///
/// 5xx responses are classified as failures and logged at `ERROR` by
/// `TraceLayer`'s default failure handler.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
