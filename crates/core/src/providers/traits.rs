use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::analysis::{AnalysisRequest, BusinessAnalysis};

/// Seam between the dashboard and whatever produces strategic analyses.
///
/// The HTTP backend implements this; tests plug in canned or failing
/// providers without touching the rest of the crate.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AnalysisProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Run one analysis. Exactly one attempt: no retry, no caching.
    /// The returned analysis has already passed schema validation.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<BusinessAnalysis, CoreError>;
}
