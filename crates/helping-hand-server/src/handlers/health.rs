//! Liveness check for process supervisors

pub async fn health() -> &'static str {
    "ok"
}
