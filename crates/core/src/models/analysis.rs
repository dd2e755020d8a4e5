use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::transaction::Transaction;

// ── Request ─────────────────────────────────────────────────────────

/// Body POSTed to the analysis backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub transactions: Vec<Transaction>,
    pub location: String,
    #[serde(rename = "budgetINR")]
    pub budget_inr: f64,
    /// Monthly profit target in USD.
    #[serde(rename = "targetMonthlyProfit")]
    pub target_monthly_profit: f64,
    /// Target return on investment, in percent.
    #[serde(rename = "targetROI")]
    pub target_roi: f64,
}

// ── Response ────────────────────────────────────────────────────────

/// Strategic analysis produced by the AI backend.
///
/// Required top-level fields are `historicalSummary`, `marketTrends`,
/// `recommendations` and `sources`; the simulation block and the demand and
/// what-if lists may be absent. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAnalysis {
    pub historical_summary: String,
    pub market_trends: Vec<MarketInsight>,
    pub recommendations: Vec<StrategicRecommendation>,
    pub sources: Vec<Source>,
    #[serde(default)]
    pub simulation: Option<SimulationResult>,
    #[serde(default)]
    pub what_if_actions: Option<Vec<WhatIfRecommendation>>,
    #[serde(default)]
    pub usage_vs_demand: Option<Vec<ServiceUsageDemand>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsight {
    pub title: String,
    pub description: String,
    pub impact: Impact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationType {
    Renovation,
    NewService,
    Optimization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategicRecommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub service: String,
    pub rationale: String,
    #[serde(rename = "estimatedROI")]
    pub estimated_roi: String,
    pub action_priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceUsageDemand {
    pub service: String,
    pub actual_usage: f64,
    pub market_demand: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stability {
    High,
    Moderate,
    Volatile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Aggressive Expansion")]
    AggressiveExpansion,
    #[serde(rename = "Strategic Maintain")]
    StrategicMaintain,
    #[serde(rename = "Optimization Required")]
    OptimizationRequired,
    #[serde(rename = "Phased Pivot")]
    PhasedPivot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryJudgment {
    pub category: String,
    pub verdict: Verdict,
    pub rationale: String,
    pub priority_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentItem {
    pub sub_category: String,
    pub service_type: String,
    /// Amount in INR.
    pub allocation_amount: f64,
    pub rationale: String,
    pub expected_annual_yield: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenPoint {
    pub month: f64,
    pub cumulative_profit: f64,
    pub label: String,
}

/// ROI simulation block of the analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub judgment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecasted_revenue_impact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forecasted_profit_impact: Option<String>,
    pub break_even_months: f64,
    pub roi_percentage: f64,
    pub confidence_score: f64,
    pub data_integrity: f64,
    pub recommendation_stability: Stability,
    pub category_judgments: Vec<CategoryJudgment>,
    pub investment_plan: Vec<InvestmentItem>,
    pub break_even_data: Vec<BreakEvenPoint>,
}

impl SimulationResult {
    /// Sum of every investment plan allocation.
    #[must_use]
    pub fn total_allocation(&self) -> f64 {
        self.investment_plan.iter().map(|i| i.allocation_amount).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhatIfRecommendation {
    pub action: String,
    pub expected_outcome: String,
    pub feasibility_score: f64,
}

// ── Validation ──────────────────────────────────────────────────────

fn check_finite(field: &str, value: f64) -> Result<(), CoreError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CoreError::SchemaMismatch(format!("{field} is not a finite number")))
    }
}

fn check_non_negative(field: &str, value: f64) -> Result<(), CoreError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(CoreError::SchemaMismatch(format!(
            "{field} must not be negative, got {value}"
        )));
    }
    Ok(())
}

impl BusinessAnalysis {
    /// Decode and validate a response body.
    ///
    /// Shape errors (missing fields, wrong types, unknown enum values) become
    /// `CoreError::Deserialization`; semantic violations become
    /// `CoreError::SchemaMismatch`.
    pub fn from_json(body: &str) -> Result<Self, CoreError> {
        let analysis: BusinessAnalysis = serde_json::from_str(body)?;
        analysis.validate()?;
        Ok(analysis)
    }

    /// Checks that go beyond what serde enforces.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.historical_summary.trim().is_empty() {
            return Err(CoreError::SchemaMismatch(
                "historicalSummary must not be empty".into(),
            ));
        }

        for usage in self.usage_vs_demand.iter().flatten() {
            check_finite("usageVsDemand.actualUsage", usage.actual_usage)?;
            check_finite("usageVsDemand.marketDemand", usage.market_demand)?;
        }

        for action in self.what_if_actions.iter().flatten() {
            check_finite("whatIfActions.feasibilityScore", action.feasibility_score)?;
        }

        if let Some(sim) = &self.simulation {
            check_non_negative("simulation.breakEvenMonths", sim.break_even_months)?;
            check_finite("simulation.roiPercentage", sim.roi_percentage)?;
            check_finite("simulation.confidenceScore", sim.confidence_score)?;
            check_finite("simulation.dataIntegrity", sim.data_integrity)?;
            for judgment in &sim.category_judgments {
                check_finite("categoryJudgments.priorityScore", judgment.priority_score)?;
            }
            for item in &sim.investment_plan {
                check_non_negative("investmentPlan.allocationAmount", item.allocation_amount)?;
            }
            for point in &sim.break_even_data {
                check_non_negative("breakEvenData.month", point.month)?;
                check_finite("breakEvenData.cumulativeProfit", point.cumulative_profit)?;
            }
        }

        Ok(())
    }
}

/// Error body the backend sends alongside a non-success status.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendErrorBody {
    pub error: String,
}
