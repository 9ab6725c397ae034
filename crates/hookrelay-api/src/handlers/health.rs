use crate::constants::HEALTH_MARKER;

/// Liveness probe. Answers any method.
pub async fn health() -> &'static str {
    HEALTH_MARKER
}
