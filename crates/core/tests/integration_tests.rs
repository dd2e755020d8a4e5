use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use hotel_intel_core::config::Settings;
use hotel_intel_core::errors::{CoreError, USER_FACING_ANALYSIS_ERROR};
use hotel_intel_core::models::aggregate::{Grouping, Metric};
use hotel_intel_core::models::analysis::{AnalysisRequest, BusinessAnalysis};
use hotel_intel_core::models::month::MonthKey;
use hotel_intel_core::models::parameters::{DisplayCurrency, Parameters};
use hotel_intel_core::models::state::{Action, ANALYSIS_STAGES};
use hotel_intel_core::providers::http::DEFAULT_ENDPOINT;
use hotel_intel_core::providers::traits::AnalysisProvider;
use hotel_intel_core::sample_data::sample_transactions;
use hotel_intel_core::HotelIntel;

// ═══════════════════════════════════════════════════════════════════
// Mock Analysis Providers (for testing without a backend)
// ═══════════════════════════════════════════════════════════════════

/// Returns a canned analysis and counts calls. The last request seen is kept
/// so tests can inspect what the dashboard sent.
struct CannedProvider {
    calls: Arc<AtomicUsize>,
    last_request: Arc<std::sync::Mutex<Option<AnalysisRequest>>>,
}

#[async_trait]
impl AnalysisProvider for CannedProvider {
    fn name(&self) -> &str {
        "Canned"
    }

    async fn analyze(&self, request: &AnalysisRequest) -> Result<BusinessAnalysis, CoreError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_request.lock().unwrap() = Some(request.clone());
        Ok(BusinessAnalysis {
            historical_summary: format!("Analysis #{n} for {}", request.location),
            market_trends: vec![],
            recommendations: vec![],
            sources: vec![],
            simulation: None,
            what_if_actions: None,
            usage_vs_demand: None,
        })
    }
}

/// Always fails like an unreachable backend.
struct FailingProvider;

#[async_trait]
impl AnalysisProvider for FailingProvider {
    fn name(&self) -> &str {
        "Failing"
    }

    async fn analyze(&self, _request: &AnalysisRequest) -> Result<BusinessAnalysis, CoreError> {
        Err(CoreError::Network("connection refused".into()))
    }
}

struct Harness {
    app: HotelIntel,
    calls: Arc<AtomicUsize>,
    last_request: Arc<std::sync::Mutex<Option<AnalysisRequest>>>,
}

fn canned() -> Harness {
    let calls = Arc::new(AtomicUsize::new(0));
    let last_request = Arc::new(std::sync::Mutex::new(None));
    let provider = CannedProvider {
        calls: calls.clone(),
        last_request: last_request.clone(),
    };
    Harness {
        app: HotelIntel::new(sample_transactions(), Parameters::default(), Box::new(provider)),
        calls,
        last_request,
    }
}

fn failing() -> HotelIntel {
    HotelIntel::new(
        sample_transactions(),
        Parameters::default(),
        Box::new(FailingProvider),
    )
}

// ═══════════════════════════════════════════════════════════════════
// Dashboard facade
// ═══════════════════════════════════════════════════════════════════

#[test]
fn sample_dashboard_defaults() {
    let app = HotelIntel::with_sample_data(DEFAULT_ENDPOINT);
    assert_eq!(app.transactions().len(), 27);
    assert_eq!(app.parameters().display_currency, DisplayCurrency::Inr);
    assert_eq!(app.available_months().len(), 9);
    assert!(app.analysis().is_none());
}

#[test]
fn totals_stay_in_usd_regardless_of_display_currency() {
    let mut app = canned().app;
    let usd = app.totals();
    app.set_display_currency(DisplayCurrency::Usd);
    assert_eq!(app.totals(), usd);
    assert_eq!(usd.revenue, 835_000.0);
    assert_eq!(usd.profit, 489_000.0);
}

#[test]
fn chart_data_scales_with_display_currency() {
    let mut app = canned().app;
    app.set_display_currency(DisplayCurrency::Usd);
    let usd = app.service_stats();
    let usd_timeline = app.timeline();

    app.set_display_currency(DisplayCurrency::Inr);
    let inr = app.service_stats();
    let inr_timeline = app.timeline();

    assert_eq!(app.display_scale(), 83.5);
    for (u, i) in usd.iter().zip(&inr) {
        assert_eq!(u.service, i.service);
        assert!((u.totals.revenue * 83.5 - i.totals.revenue).abs() < 1e-6);
    }
    assert_eq!(usd_timeline.len(), 9);
    assert!((usd_timeline[0].totals.revenue * 83.5 - inr_timeline[0].totals.revenue).abs() < 1e-6);
}

#[test]
fn grouped_aggregate_by_service_in_display_currency() {
    let mut app = canned().app;
    app.set_display_currency(DisplayCurrency::Usd);
    let by_service = app.aggregate(Grouping::Service);
    assert_eq!(by_service["MICE"].revenue, 308_000.0);
    assert!(!by_service.contains_key("Parking"));
}

#[test]
fn selected_month_drives_cards() {
    let mut app = canned().app;
    let nov = app.selected_month_totals();
    assert_eq!(nov.revenue, 74_000.0);

    app.dispatch(Action::SetSelectedMonth(MonthKey::new(2025, 4).unwrap()));
    let apr = app.selected_month_totals();
    assert_eq!(apr.revenue, 122_000.0);

    // April vs March revenue: (122 - 78) / 78
    let change = app.mom_change(Metric::Revenue).unwrap();
    assert!((change - 56.410_256).abs() < 1e-4);

    let cards = app.kpi_cards();
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[0].month_value, 122_000.0);
}

#[test]
fn first_month_has_no_mom_change() {
    let mut app = canned().app;
    app.dispatch(Action::SetSelectedMonth(MonthKey::new(2025, 3).unwrap()));
    assert!(app.mom_change(Metric::Revenue).is_none());
}

#[test]
fn derived_currency_figures() {
    let mut app = canned().app;
    assert_eq!(app.budget_gbp(), 46_296.0);
    assert_eq!(app.target_profit_inr(), 1_252_500.0);
    assert_eq!(app.format_inr(5_000_000.0), "₹50,00,000");
    assert_eq!(app.format_usd(45_000.0), "₹37,57,500");

    app.set_display_currency(DisplayCurrency::Usd);
    assert_eq!(app.format_usd(45_000.0), "$45,000");
}

#[test]
fn analysis_request_reflects_parameters() {
    let mut app = canned().app;
    app.dispatch(Action::SetBudget(2_000_000.0));
    app.dispatch(Action::SetTargetRoi(30.0));
    app.dispatch(Action::SetLocation("Goa".into()));

    let req = app.analysis_request();
    assert_eq!(req.location, "Goa");
    assert_eq!(req.budget_inr, 2_000_000.0);
    assert_eq!(req.target_roi, 30.0);
    assert_eq!(req.target_monthly_profit, 15_000.0);
    assert_eq!(req.transactions.len(), 27);
}

// ═══════════════════════════════════════════════════════════════════
// Analysis round-trip
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn run_analysis_stores_result() {
    let mut h = canned();
    let summary = h.app.run_analysis().await.unwrap().historical_summary.clone();
    assert_eq!(summary, "Analysis #1 for San Francisco");

    assert_eq!(h.calls.load(Ordering::SeqCst), 1);
    assert!(!h.app.state().is_loading());
    assert!(h.app.state().error().is_none());
    assert_eq!(
        h.app.analysis().unwrap().historical_summary,
        "Analysis #1 for San Francisco"
    );

    let sent = h.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(sent.budget_inr, 5_000_000.0);
}

#[tokio::test]
async fn rerun_replaces_result() {
    let mut h = canned();
    h.app.run_analysis().await.unwrap();
    h.app.run_analysis().await.unwrap();
    assert_eq!(h.calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        h.app.analysis().unwrap().historical_summary,
        "Analysis #2 for San Francisco"
    );
}

#[tokio::test]
async fn failure_sets_user_facing_error_and_keeps_aggregates() {
    let mut app = failing();
    let before = app.timeline();

    let err = app.run_analysis().await.unwrap_err();
    assert!(matches!(err, CoreError::Network(_)));
    assert!(err.is_analysis_failure());

    assert!(!app.state().is_loading());
    assert_eq!(app.state().error(), Some(USER_FACING_ANALYSIS_ERROR));
    assert!(app.analysis().is_none());
    assert_eq!(app.timeline(), before);
}

#[tokio::test]
async fn location_change_after_analysis_clears_it() {
    let mut h = canned();
    h.app.run_analysis().await.unwrap();
    h.app.dispatch(Action::SetLocation("London".into()));
    assert!(h.app.analysis().is_none());

    h.app.run_analysis().await.unwrap();
    assert_eq!(
        h.app.analysis().unwrap().historical_summary,
        "Analysis #2 for London"
    );
}

#[tokio::test]
async fn stages_advance_while_request_is_pending() {
    let mut h = canned();
    let pending = h.app.begin_analysis().unwrap();
    assert!(h.app.state().is_loading());
    assert_eq!(h.app.state().stage_label(), Some(ANALYSIS_STAGES[0]));
    assert_eq!(pending.request().location, "San Francisco");

    // The request owns its provider handle, so the dashboard stays mutable.
    h.app.dispatch(Action::AdvanceStage);
    h.app.dispatch(Action::AdvanceStage);
    assert_eq!(h.app.state().stage_label(), Some(ANALYSIS_STAGES[2]));

    let id = pending.id();
    let outcome = pending.run().await;
    h.app.complete_analysis(id, outcome).unwrap();

    assert!(h.app.state().stage_label().is_none());
    assert!(h.app.analysis().is_some());
}

#[tokio::test]
async fn superseded_completion_is_dropped() {
    let mut h = canned();
    let first = h.app.begin_analysis().unwrap();
    let second = h.app.begin_analysis().unwrap();
    let (first_id, second_id) = (first.id(), second.id());

    let outcome = first.run().await;
    let err = h.app.complete_analysis(first_id, outcome).unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
    assert!(h.app.analysis().is_none());
    assert_eq!(h.app.state().pending_request(), Some(second_id));

    let outcome = second.run().await;
    let summary = h.app.complete_analysis(second_id, outcome).unwrap();
    assert_eq!(summary.historical_summary, "Analysis #2 for San Francisco");
    assert!(!h.app.state().is_loading());
}

// ═══════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════

#[test]
fn settings_defaults_when_empty() {
    let settings = Settings::from_toml_str("").unwrap();
    assert_eq!(settings.analysis.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(settings.defaults.to_parameters(), Parameters::default());
}

#[test]
fn settings_override_parameters() {
    let settings = Settings::from_toml_str(
        r#"
        [analysis]
        endpoint = "https://intel.example.com/api/analyze"

        [defaults]
        location = "Mumbai"
        budget_inr = 8000000
        display_currency = "USD"
        selected_month = "2025-07"
        "#,
    )
    .unwrap();

    assert_eq!(settings.analysis.endpoint, "https://intel.example.com/api/analyze");
    let params = settings.defaults.to_parameters();
    assert_eq!(params.location, "Mumbai");
    assert_eq!(params.budget_inr, 8_000_000.0);
    assert_eq!(params.display_currency, DisplayCurrency::Usd);
    assert_eq!(params.selected_month, MonthKey::new(2025, 7).unwrap());
    assert_eq!(params.target_roi, 20.0);

    let app = HotelIntel::from_settings(&settings);
    assert_eq!(app.parameters().location, "Mumbai");
    assert_eq!(app.selected_month_totals().revenue, 85_000.0);
}

#[test]
fn settings_reject_bad_month() {
    let err = Settings::from_toml_str(
        r#"
        [defaults]
        selected_month = "July"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}
