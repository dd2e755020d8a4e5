use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::USER_FACING_ANALYSIS_ERROR;

use super::analysis::BusinessAnalysis;
use super::month::MonthKey;
use super::parameters::{DisplayCurrency, Parameters};
use super::transaction::Transaction;

/// Status labels cycled through while an analysis is running.
pub const ANALYSIS_STAGES: [&str; 5] = [
    "Auditing Historical Performance...",
    "Querying Global Market Intelligence...",
    "Calibrating Local Benchmarks...",
    "Simulating ROI Projections...",
    "Synthesizing Executive Strategy...",
];

/// Token identifying one analysis request. Issued in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u64);

/// Every transition the dashboard state can go through.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetSelectedMonth(MonthKey),
    SetBudget(f64),
    SetTargetProfit(f64),
    SetTargetRoi(f64),
    SetDisplayCurrency(DisplayCurrency),
    /// Switch market. Clears the current analysis and abandons any pending request.
    SetLocation(String),
    /// Start a new analysis. Supersedes any request still pending.
    AnalysisRequested,
    /// Move the progress indicator to the next stage (saturates at the last one).
    AdvanceStage,
    AnalysisSucceeded {
        id: RequestId,
        result: Box<BusinessAnalysis>,
    },
    AnalysisFailed { id: RequestId, message: String },
}

/// Complete dashboard state as an immutable value.
///
/// Transitions go through [`DashboardState::apply`], which consumes the old
/// state and returns the new one. Only the completion of the most recent
/// request is applied; completions carrying a stale [`RequestId`] are dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    transactions: Vec<Transaction>,
    parameters: Parameters,
    analysis: Option<BusinessAnalysis>,
    error: Option<String>,
    pending: Option<RequestId>,
    next_request: u64,
    stage: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(Vec::new(), Parameters::default())
    }
}

impl DashboardState {
    pub fn new(transactions: Vec<Transaction>, parameters: Parameters) -> Self {
        Self {
            transactions,
            parameters,
            analysis: None,
            error: None,
            pending: None,
            next_request: 1,
            stage: 0,
        }
    }

    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The last successful analysis, or `None` if none has completed yet.
    #[must_use]
    pub fn analysis(&self) -> Option<&BusinessAnalysis> {
        self.analysis.as_ref()
    }

    /// User-facing message from the last failed analysis.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `true` while a request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// The request whose completion will be accepted, if any.
    #[must_use]
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    /// Current progress label while loading.
    #[must_use]
    pub fn stage_label(&self) -> Option<&'static str> {
        self.pending.map(|_| ANALYSIS_STAGES[self.stage])
    }

    #[must_use]
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::SetSelectedMonth(month) => self.parameters.selected_month = month,
            Action::SetBudget(budget) => self.parameters.budget_inr = budget,
            Action::SetTargetProfit(target) => self.parameters.target_monthly_profit = target,
            Action::SetTargetRoi(roi) => self.parameters.target_roi = roi,
            Action::SetDisplayCurrency(currency) => self.parameters.display_currency = currency,
            Action::SetLocation(location) => {
                self.parameters.location = location;
                self.analysis = None;
                self.pending = None;
                self.stage = 0;
            }
            Action::AnalysisRequested => {
                let id = RequestId(self.next_request);
                self.next_request += 1;
                if let Some(previous) = self.pending.replace(id) {
                    debug!(superseded = previous.0, current = id.0, "analysis request superseded");
                }
                self.error = None;
                self.stage = 0;
            }
            Action::AdvanceStage => {
                if self.pending.is_some() && self.stage + 1 < ANALYSIS_STAGES.len() {
                    self.stage += 1;
                }
            }
            Action::AnalysisSucceeded { id, result } => {
                if self.accepts(id) {
                    self.analysis = Some(*result);
                    self.finish();
                }
            }
            Action::AnalysisFailed { id, message } => {
                if self.accepts(id) {
                    debug!(request = id.0, %message, "analysis failed");
                    self.error = Some(USER_FACING_ANALYSIS_ERROR.to_string());
                    self.finish();
                }
            }
        }
        self
    }

    fn accepts(&self, id: RequestId) -> bool {
        if self.pending == Some(id) {
            true
        } else {
            debug!(request = id.0, "dropping stale analysis completion");
            false
        }
    }

    fn finish(&mut self) {
        self.pending = None;
        self.stage = 0;
    }
}
