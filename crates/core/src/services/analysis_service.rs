use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::CoreError;
use crate::models::analysis::{AnalysisRequest, BusinessAnalysis};
use crate::models::parameters::Parameters;
use crate::models::state::RequestId;
use crate::models::transaction::Transaction;
use crate::providers::traits::AnalysisProvider;

/// Shapes analysis requests and runs them against a provider.
///
/// Cloning is cheap and shares the provider, so a request can run while the
/// dashboard state keeps changing.
#[derive(Clone)]
pub struct AnalysisService {
    provider: Arc<dyn AnalysisProvider>,
}

impl AnalysisService {
    pub fn new(provider: Box<dyn AnalysisProvider>) -> Self {
        Self {
            provider: Arc::from(provider),
        }
    }

    /// Name of the provider requests are sent to.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Build the request body from the transactions in view and the current parameters.
    #[must_use]
    pub fn build_request(
        &self,
        transactions: &[Transaction],
        parameters: &Parameters,
    ) -> AnalysisRequest {
        AnalysisRequest {
            transactions: transactions.to_vec(),
            location: parameters.location.clone(),
            budget_inr: parameters.budget_inr,
            target_monthly_profit: parameters.target_monthly_profit,
            target_roi: parameters.target_roi,
        }
    }

    /// Send one request. All-or-nothing: either a validated analysis or an error.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<BusinessAnalysis, CoreError> {
        match self.provider.analyze(request).await {
            Ok(analysis) => {
                info!(
                    provider = self.provider.name(),
                    location = %request.location,
                    trends = analysis.market_trends.len(),
                    "analysis completed"
                );
                Ok(analysis)
            }
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "analysis failed");
                Err(e)
            }
        }
    }
}

/// An analysis that has been requested but not yet sent.
///
/// Owns everything the round-trip needs, so it can be awaited while the
/// caller keeps dispatching actions (e.g. progress stages). Hand the outcome
/// back through `HotelIntel::complete_analysis`.
pub struct PendingAnalysis {
    id: RequestId,
    request: AnalysisRequest,
    service: AnalysisService,
}

impl PendingAnalysis {
    pub(crate) fn new(id: RequestId, request: AnalysisRequest, service: AnalysisService) -> Self {
        Self {
            id,
            request,
            service,
        }
    }

    #[must_use]
    pub fn id(&self) -> RequestId {
        self.id
    }

    #[must_use]
    pub fn request(&self) -> &AnalysisRequest {
        &self.request
    }

    /// Send the request. Exactly one attempt.
    pub async fn run(self) -> Result<BusinessAnalysis, CoreError> {
        self.service.analyze(&self.request).await
    }
}
