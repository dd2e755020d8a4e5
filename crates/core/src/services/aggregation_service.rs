use std::collections::{BTreeMap, BTreeSet};

use crate::models::aggregate::{
    Aggregate, Grouping, KpiCard, Metric, PeriodSummary, ServicePerformance, ServiceStat,
};
use crate::models::month::MonthKey;
use crate::models::transaction::{ServiceType, Transaction};

/// First month of the performance timeline.
pub const TIMELINE_START: MonthKey = MonthKey::from_parts(2025, 3);

/// Number of months on the performance timeline.
pub const TIMELINE_MONTHS: usize = 9;

/// Buckets and sums transactions for the dashboard.
///
/// Pure business logic: no I/O, no state, no error paths. Sums are exact and
/// scaling (currency conversion) is applied to the sums, never per record.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// Partition transactions by month or by service type and sum each group.
    ///
    /// Every transaction lands in exactly one group, so the group totals always
    /// add up to [`AggregationService::totals`].
    #[must_use]
    pub fn aggregate(
        &self,
        transactions: &[Transaction],
        grouping: Grouping,
        scale: f64,
    ) -> BTreeMap<String, Aggregate> {
        let mut groups: BTreeMap<String, Aggregate> = BTreeMap::new();
        for t in transactions {
            let key = match grouping {
                Grouping::Month => t.month_key().to_string(),
                Grouping::Service => t.service_type.to_string(),
            };
            groups.entry(key).or_default().add(t.revenue, t.cost);
        }
        groups
            .into_iter()
            .map(|(key, totals)| (key, totals.scaled(scale)))
            .collect()
    }

    /// Sum over every transaction.
    #[must_use]
    pub fn totals(&self, transactions: &[Transaction]) -> Aggregate {
        Self::sum(transactions.iter())
    }

    /// Sum over the transactions whose date starts with `month`.
    #[must_use]
    pub fn month_totals(&self, transactions: &[Transaction], month: &MonthKey) -> Aggregate {
        let prefix = month.to_string();
        Self::sum(transactions.iter().filter(|t| t.is_in_month(&prefix)))
    }

    /// Percentage change from `previous` to `current`.
    /// Returns `None` when `previous` is exactly zero (nothing to compare against).
    #[must_use]
    pub fn percent_change(&self, current: f64, previous: f64) -> Option<f64> {
        if previous == 0.0 {
            return None;
        }
        Some((current - previous) / previous * 100.0)
    }

    /// Month-over-month change of `metric` for `month` against the calendar-previous month.
    #[must_use]
    pub fn mom_change(
        &self,
        transactions: &[Transaction],
        month: &MonthKey,
        metric: Metric,
    ) -> Option<f64> {
        let current = self.month_totals(transactions, month).get(metric);
        let previous = self.month_totals(transactions, &month.pred()).get(metric);
        self.percent_change(current, previous)
    }

    /// Headline cards (revenue, cost, profit) for the selected month.
    #[must_use]
    pub fn kpi_cards(&self, transactions: &[Transaction], month: &MonthKey) -> Vec<KpiCard> {
        let month_totals = self.month_totals(transactions, month);
        let totals = self.totals(transactions);
        Metric::ALL
            .iter()
            .map(|&metric| KpiCard {
                metric,
                month_value: month_totals.get(metric),
                total_value: totals.get(metric),
                mom_change: self.mom_change(transactions, month, metric),
            })
            .collect()
    }

    /// Per-service totals in the order each service first appears in the data.
    #[must_use]
    pub fn service_stats(&self, transactions: &[Transaction], scale: f64) -> Vec<ServiceStat> {
        Self::by_service_in_order(transactions.iter())
            .into_iter()
            .map(|(service, totals)| ServiceStat {
                service,
                totals: totals.scaled(scale),
            })
            .collect()
    }

    /// Sorted, de-duplicated months that appear in the data.
    /// Dates whose prefix is not a valid `YYYY-MM` are skipped.
    #[must_use]
    pub fn available_months(&self, transactions: &[Transaction]) -> Vec<MonthKey> {
        transactions
            .iter()
            .filter_map(|t| t.month_key().parse::<MonthKey>().ok())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The fixed nine-month performance timeline starting at [`TIMELINE_START`].
    #[must_use]
    pub fn timeline(&self, transactions: &[Transaction], scale: f64) -> Vec<PeriodSummary> {
        self.timeline_window(transactions, TIMELINE_START, TIMELINE_MONTHS, scale)
    }

    /// A timeline of `months` consecutive months from `start`, independent of which
    /// months actually have data. Empty months yield zero totals.
    #[must_use]
    pub fn timeline_window(
        &self,
        transactions: &[Transaction],
        start: MonthKey,
        months: usize,
        scale: f64,
    ) -> Vec<PeriodSummary> {
        (0..months)
            .map(|i| {
                let month = start.offset(i as i32);
                let prefix = month.to_string();
                let in_month: Vec<&Transaction> =
                    transactions.iter().filter(|t| t.is_in_month(&prefix)).collect();

                let totals = Self::sum(in_month.iter().copied()).scaled(scale);

                let performance: Vec<ServicePerformance> =
                    Self::by_service_in_order(in_month.iter().copied())
                        .into_iter()
                        .map(|(service, agg)| ServicePerformance {
                            service,
                            value: agg.profit * scale,
                        })
                        .collect();
                let (top_service, bottom_service) = Self::extremes(performance);

                PeriodSummary {
                    month,
                    label: month.short_label(),
                    totals,
                    top_service,
                    bottom_service,
                }
            })
            .collect()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn sum<'a>(transactions: impl Iterator<Item = &'a Transaction>) -> Aggregate {
        let mut agg = Aggregate::default();
        for t in transactions {
            agg.add(t.revenue, t.cost);
        }
        agg
    }

    /// Group by service, keeping first-encountered order.
    fn by_service_in_order<'a>(
        transactions: impl Iterator<Item = &'a Transaction>,
    ) -> Vec<(ServiceType, Aggregate)> {
        let mut groups: Vec<(ServiceType, Aggregate)> = Vec::new();
        for t in transactions {
            match groups.iter_mut().find(|(s, _)| *s == t.service_type) {
                Some((_, agg)) => agg.add(t.revenue, t.cost),
                None => groups.push((t.service_type, Aggregate::new(t.revenue, t.cost))),
            }
        }
        groups
    }

    /// Highest and lowest contributor by pairwise reduction in encounter order.
    /// The running pick is only kept when strictly better, so on a tie the
    /// later-encountered service wins.
    fn extremes(
        performance: Vec<ServicePerformance>,
    ) -> (Option<ServicePerformance>, Option<ServicePerformance>) {
        let top = performance
            .iter()
            .cloned()
            .reduce(|a, b| if a.value > b.value { a } else { b });
        let bottom = performance
            .into_iter()
            .reduce(|a, b| if a.value < b.value { a } else { b });
        (top, bottom)
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
