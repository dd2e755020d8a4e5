use serde::{Deserialize, Serialize};

use super::month::MonthKey;
use super::transaction::ServiceType;

/// Summed revenue, cost and profit over some subset of transactions.
///
/// Sums are exact (no rounding); rounding only happens at display time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub revenue: f64,
    pub cost: f64,
    /// Always `revenue - cost`.
    pub profit: f64,
}

impl Aggregate {
    pub fn new(revenue: f64, cost: f64) -> Self {
        Self {
            revenue,
            cost,
            profit: revenue - cost,
        }
    }

    /// Add one transaction's revenue and cost.
    pub fn add(&mut self, revenue: f64, cost: f64) {
        self.revenue += revenue;
        self.cost += cost;
        self.profit = self.revenue - self.cost;
    }

    /// Multiply every figure by `scale` (currency conversion).
    #[must_use]
    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(self.revenue * scale, self.cost * scale)
    }

    /// Read one metric.
    #[must_use]
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.revenue,
            Metric::Cost => self.cost,
            Metric::Profit => self.profit,
        }
    }
}

/// One of the three figures tracked per aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Revenue,
    Cost,
    Profit,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Revenue, Metric::Cost, Metric::Profit];
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Revenue => write!(f, "Revenue"),
            Metric::Cost => write!(f, "Cost"),
            Metric::Profit => write!(f, "Profit"),
        }
    }
}

/// How transactions are partitioned before summing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// By the `YYYY-MM` prefix of the transaction date.
    Month,
    /// By service type name.
    Service,
}

/// Revenue, cost and profit for one service type (services chart/table row).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStat {
    pub service: ServiceType,
    pub totals: Aggregate,
}

/// A service and its net contribution within one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePerformance {
    pub service: ServiceType,
    pub value: f64,
}

/// One month on the performance timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub month: MonthKey,
    /// Chart label, e.g. `Mar 25`.
    pub label: String,
    pub totals: Aggregate,
    /// `None` when the month has no transactions.
    pub top_service: Option<ServicePerformance>,
    pub bottom_service: Option<ServicePerformance>,
}

/// A dashboard headline card for one metric. Values are in USD; formatting
/// into the display currency happens at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub metric: Metric,
    /// Value for the selected month.
    pub month_value: f64,
    /// Value over all transactions.
    pub total_value: f64,
    /// Month-over-month change in percent; `None` when there is no prior value to compare.
    pub mom_change: Option<f64>,
}
