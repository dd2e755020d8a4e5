pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod sample_data;
pub mod services;

use std::collections::BTreeMap;

use models::{
    aggregate::{Aggregate, Grouping, KpiCard, Metric, PeriodSummary, ServiceStat},
    analysis::{AnalysisRequest, BusinessAnalysis},
    month::MonthKey,
    parameters::{DisplayCurrency, Parameters},
    state::{Action, DashboardState, RequestId},
    transaction::Transaction,
};
use providers::{http::HttpAnalysisProvider, traits::AnalysisProvider};
use services::{
    aggregation_service::AggregationService,
    analysis_service::{AnalysisService, PendingAnalysis},
    currency_service::CurrencyService,
};

use errors::CoreError;

/// Main entry point for the HotelIntel core library.
/// Holds the dashboard state and the services that derive everything shown from it.
#[must_use]
pub struct HotelIntel {
    state: DashboardState,
    aggregation_service: AggregationService,
    currency_service: CurrencyService,
    analysis_service: AnalysisService,
}

impl std::fmt::Debug for HotelIntel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HotelIntel")
            .field("transactions", &self.state.transactions().len())
            .field("parameters", self.state.parameters())
            .field("has_analysis", &self.state.analysis().is_some())
            .field("loading", &self.state.is_loading())
            .field("provider", &self.analysis_service.provider_name())
            .finish()
    }
}

impl HotelIntel {
    /// Dashboard over the bundled sample data, default parameters, analysing
    /// against the backend at `endpoint`.
    pub fn with_sample_data(endpoint: impl Into<String>) -> Self {
        Self::new(
            sample_data::sample_transactions(),
            Parameters::default(),
            Box::new(HttpAnalysisProvider::new(endpoint)),
        )
    }

    /// Dashboard configured from [`config::Settings`] over the sample data.
    pub fn from_settings(settings: &crate::config::Settings) -> Self {
        Self::new(
            sample_data::sample_transactions(),
            settings.defaults.to_parameters(),
            Box::new(HttpAnalysisProvider::new(settings.analysis.endpoint.clone())),
        )
    }

    pub fn new(
        transactions: Vec<Transaction>,
        parameters: Parameters,
        provider: Box<dyn AnalysisProvider>,
    ) -> Self {
        Self {
            state: DashboardState::new(transactions, parameters),
            aggregation_service: AggregationService::new(),
            currency_service: CurrencyService::new(),
            analysis_service: AnalysisService::new(provider),
        }
    }

    // ── State ───────────────────────────────────────────────────────

    /// Apply a user action.
    pub fn dispatch(&mut self, action: Action) {
        // `apply` consumes the state; take it out and put the successor back.
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
    }

    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        self.state.parameters()
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        self.state.transactions()
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&BusinessAnalysis> {
        self.state.analysis()
    }

    #[must_use]
    pub fn currency_service(&self) -> &CurrencyService {
        &self.currency_service
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Multiplier from USD to the current display currency.
    #[must_use]
    pub fn display_scale(&self) -> f64 {
        self.currency_service
            .scale(self.state.parameters().display_currency)
    }

    /// All-time totals in USD.
    #[must_use]
    pub fn totals(&self) -> Aggregate {
        self.aggregation_service.totals(self.transactions())
    }

    /// Totals for the selected month in USD.
    #[must_use]
    pub fn selected_month_totals(&self) -> Aggregate {
        self.aggregation_service
            .month_totals(self.transactions(), &self.parameters().selected_month)
    }

    /// Month-over-month change of `metric` for the selected month.
    #[must_use]
    pub fn mom_change(&self, metric: Metric) -> Option<f64> {
        self.aggregation_service.mom_change(
            self.transactions(),
            &self.parameters().selected_month,
            metric,
        )
    }

    /// Headline cards for the selected month (USD).
    #[must_use]
    pub fn kpi_cards(&self) -> Vec<KpiCard> {
        self.aggregation_service
            .kpi_cards(self.transactions(), &self.parameters().selected_month)
    }

    /// Group totals in the display currency.
    #[must_use]
    pub fn aggregate(&self, grouping: Grouping) -> BTreeMap<String, Aggregate> {
        self.aggregation_service
            .aggregate(self.transactions(), grouping, self.display_scale())
    }

    /// Per-service totals in the display currency.
    #[must_use]
    pub fn service_stats(&self) -> Vec<ServiceStat> {
        self.aggregation_service
            .service_stats(self.transactions(), self.display_scale())
    }

    /// Nine-month performance timeline in the display currency.
    #[must_use]
    pub fn timeline(&self) -> Vec<PeriodSummary> {
        self.aggregation_service
            .timeline(self.transactions(), self.display_scale())
    }

    /// Months available in the month selector.
    #[must_use]
    pub fn available_months(&self) -> Vec<MonthKey> {
        self.aggregation_service.available_months(self.transactions())
    }

    /// Budget in whole pounds.
    #[must_use]
    pub fn budget_gbp(&self) -> f64 {
        self.currency_service.budget_gbp(self.parameters().budget_inr)
    }

    /// Monthly profit target in whole rupees.
    #[must_use]
    pub fn target_profit_inr(&self) -> f64 {
        self.currency_service
            .target_profit_inr(self.parameters().target_monthly_profit)
    }

    /// Format a USD amount in the display currency.
    #[must_use]
    pub fn format_usd(&self, value: f64) -> String {
        self.currency_service
            .format_value(value, true, self.parameters().display_currency)
    }

    /// Format an INR amount in the display currency.
    #[must_use]
    pub fn format_inr(&self, value: f64) -> String {
        self.currency_service
            .format_value(value, false, self.parameters().display_currency)
    }

    /// Switch the display currency.
    pub fn set_display_currency(&mut self, currency: DisplayCurrency) {
        self.dispatch(Action::SetDisplayCurrency(currency));
    }

    // ── Analysis ────────────────────────────────────────────────────

    /// The request body the next analysis would send.
    #[must_use]
    pub fn analysis_request(&self) -> AnalysisRequest {
        self.analysis_service
            .build_request(self.transactions(), self.parameters())
    }

    /// Start an analysis: marks the dashboard as loading and returns the
    /// request to run. Any analysis still pending is superseded.
    pub fn begin_analysis(&mut self) -> Result<PendingAnalysis, CoreError> {
        self.dispatch(Action::AnalysisRequested);
        let id = self
            .state
            .pending_request()
            .ok_or_else(|| CoreError::Validation("No analysis request pending".into()))?;
        Ok(PendingAnalysis::new(
            id,
            self.analysis_request(),
            self.analysis_service.clone(),
        ))
    }

    /// Apply the outcome of the request identified by `id`.
    ///
    /// Outcomes of superseded or abandoned requests are dropped; a dropped
    /// success is reported as a `Validation` error. On failure the stored
    /// analysis and all aggregates are left as they were.
    pub fn complete_analysis(
        &mut self,
        id: RequestId,
        outcome: Result<BusinessAnalysis, CoreError>,
    ) -> Result<&BusinessAnalysis, CoreError> {
        let current = self.state.pending_request() == Some(id);
        match outcome {
            Ok(result) => {
                self.dispatch(Action::AnalysisSucceeded {
                    id,
                    result: Box::new(result),
                });
                match (current, self.state.analysis()) {
                    (true, Some(analysis)) => Ok(analysis),
                    _ => Err(CoreError::Validation(
                        "Analysis result was superseded".into(),
                    )),
                }
            }
            Err(e) => {
                self.dispatch(Action::AnalysisFailed {
                    id,
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Run one analysis round-trip and store the result.
    pub async fn run_analysis(&mut self) -> Result<&BusinessAnalysis, CoreError> {
        let pending = self.begin_analysis()?;
        let id = pending.id();
        let outcome = pending.run().await;
        self.complete_analysis(id, outcome)
    }
}
