//! Pre-built [`tracing::Span`] constructors for matching and registration.
//!
//! Consistent span names and field sets make traces easy to filter and
//! correlate. Spans never carry biometric payloads.

use tracing::{info_span, Span};

/// Span covering one match-property resolution.
pub fn resolve_span(auth_type: &str, samples: usize) -> Span {
    info_span!("bio_match_resolve", auth_type = %auth_type, samples = samples)
}

/// Span covering one packet-generation request.
pub fn packet_span(center_id: &str, machine_id: &str) -> Span {
    info_span!("packet_generate", center = %center_id, machine = %machine_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_can_be_entered_without_a_subscriber() {
        let span = resolve_span("FGR_MIN", 2);
        let _enter = span.enter();
        let inner = packet_span("10001", "10002");
        let _inner = inner.enter();
    }
}
