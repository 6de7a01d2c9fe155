use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use service::auth::AuthError;

// Prometheus metrics (default registry)
pub static REGISTER_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "auth_register_total",
        "Registration attempts by outcome",
        &["outcome"]
    )
    .expect("register auth_register_total")
});

pub static LOGIN_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "auth_login_total",
        "Login attempts by outcome",
        &["outcome"]
    )
    .expect("register auth_login_total")
});

fn outcome<'a>(res: &Result<(), AuthError>, success: &'a str) -> &'a str {
    match res {
        Ok(()) => success,
        Err(e) => e.kind(),
    }
}

pub fn record_register(res: &Result<(), AuthError>) {
    REGISTER_TOTAL.with_label_values(&[outcome(res, "created")]).inc();
}

pub fn record_login(res: &Result<(), AuthError>) {
    LOGIN_TOTAL.with_label_values(&[outcome(res, "ok")]).inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    // make sure both families show up before the first request
    Lazy::force(&REGISTER_TOTAL);
    Lazy::force(&LOGIN_TOTAL);

    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
