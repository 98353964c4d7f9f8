//! Prometheus counters for envelope outcomes.

use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

/// Responses by outcome category: `ok`, `domain`, `arithmetic`, `generic`.
pub static RESPONSES_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "edu_responses_total",
        "Envelope responses produced, labelled by outcome category",
        &["category"]
    )
    .expect("register edu_responses_total")
});

pub fn record_response(category: &str) {
    RESPONSES_TOTAL.with_label_values(&[category]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
