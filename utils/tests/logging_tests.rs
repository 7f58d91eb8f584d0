//! Subscriber installation runs once per process, so it gets its own test
//! binary.

use idauth_utils::{init_logging, spans, LogFormat};

#[test]
fn json_subscriber_installs_and_accepts_events() {
    init_logging(LogFormat::Json, "debug");
    let span = spans::resolve_span("MULTI_MODAL", 2);
    let _enter = span.enter();
    tracing::debug!(modality = "FIR", score = 60.0, "modality scored");
    assert!(tracing::enabled!(tracing::Level::INFO));
}
