use thiserror::Error;

/// Message shown to the user whenever an analysis request fails, whatever the cause.
pub const USER_FACING_ANALYSIS_ERROR: &str =
    "Analysis failed. Please check your backend connection.";

/// Unified error type for the entire hotel-intel-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Aggregation never fails; errors come from the analysis round-trip and
/// configuration loading.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Analysis request ────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Analysis backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Analysis response does not match the expected schema: {0}")]
    SchemaMismatch(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Returns `true` for every error that means "the analysis request failed":
    /// transport errors, non-success statuses, and undecodable or invalid bodies.
    #[must_use]
    pub fn is_analysis_failure(&self) -> bool {
        matches!(
            self,
            CoreError::Network(_)
                | CoreError::Api { .. }
                | CoreError::Deserialization(_)
                | CoreError::SchemaMismatch(_)
        )
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CoreError::Deserialization(e.to_string())
        } else {
            CoreError::Network(e.to_string())
        }
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(e: config::ConfigError) -> Self {
        CoreError::Config(e.to_string())
    }
}
