use std::fmt::Write;

use serde_json::{json, Value};

use hotel_intel_core::models::analysis::BusinessAnalysis;
use hotel_intel_core::HotelIntel;

/// Whole dashboard as plain text.
pub fn dashboard(app: &HotelIntel) -> String {
    let mut out = String::new();
    let params = app.parameters();
    let currency = app.currency_service();

    let _ = writeln!(
        out,
        "HotelIntel | {} | {} | display {}",
        params.location,
        params.selected_month.long_label(),
        params.display_currency
    );
    let _ = writeln!(
        out,
        "Budget {} (GBP {:.0}) | profit target {} | target ROI {}%",
        app.format_inr(params.budget_inr),
        app.budget_gbp(),
        app.format_usd(params.target_monthly_profit),
        params.target_roi
    );
    out.push('\n');

    for card in app.kpi_cards() {
        let mom = card
            .mom_change
            .map(|c| format!(" ({} MoM)", currency.format_percent_change(c)))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:<8} {:>16}{mom}   total {}",
            card.metric.to_string(),
            app.format_usd(card.month_value),
            app.format_usd(card.total_value)
        );
    }
    out.push('\n');

    let display = params.display_currency;
    let _ = writeln!(out, "{:<10} {:>16} {:>16} {:>16}", "Service", "Revenue", "Cost", "Profit");
    for stat in app.service_stats() {
        let _ = writeln!(
            out,
            "{:<10} {:>16} {:>16} {:>16}",
            stat.service.as_str(),
            currency.format_amount(stat.totals.revenue, display),
            currency.format_amount(stat.totals.cost, display),
            currency.format_amount(stat.totals.profit, display)
        );
    }
    out.push('\n');

    let _ = writeln!(out, "{:<7} {:>9} {:>9} {:>9}  top / bottom", "Month", "Revenue", "Cost", "Profit");
    for period in app.timeline() {
        let extremes = match (&period.top_service, &period.bottom_service) {
            (Some(top), Some(bottom)) => format!("{} / {}", top.service, bottom.service),
            _ => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<7} {:>9} {:>9} {:>9}  {extremes}",
            period.label,
            currency.format_axis(period.totals.revenue, display),
            currency.format_axis(period.totals.cost, display),
            currency.format_axis(period.totals.profit, display)
        );
    }

    if let Some(err) = app.state().error() {
        let _ = writeln!(out, "\n{err}");
    }
    if let Some(analysis) = app.analysis() {
        out.push('\n');
        out.push_str(&analysis_text(app, analysis));
    }

    out
}

fn analysis_text(app: &HotelIntel, analysis: &BusinessAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Strategy\n{}\n", analysis.historical_summary);

    for trend in &analysis.market_trends {
        let _ = writeln!(out, "[{:?}] {}: {}", trend.impact, trend.title, trend.description);
    }

    if let Some(sim) = &analysis.simulation {
        let _ = writeln!(
            out,
            "\n\"{}\"\nBreak-even {} months | ROI {}% | confidence {} | stability {:?}",
            sim.judgment, sim.break_even_months, sim.roi_percentage, sim.confidence_score,
            sim.recommendation_stability
        );
        for item in &sim.investment_plan {
            let _ = writeln!(
                out,
                "  {:<24} {:<10} {:>16}  {}",
                item.sub_category,
                item.service_type,
                app.format_inr(item.allocation_amount),
                item.expected_annual_yield
            );
        }
    }

    for action in analysis.what_if_actions.iter().flatten() {
        let _ = writeln!(
            out,
            "What if: {} -> {} (feasibility {})",
            action.action, action.expected_outcome, action.feasibility_score
        );
    }

    for source in &analysis.sources {
        let _ = writeln!(out, "Source: {} <{}>", source.title, source.uri);
    }
    out
}

/// Dashboard as JSON for scripting.
pub fn snapshot(app: &HotelIntel) -> Value {
    json!({
        "parameters": app.parameters(),
        "availableMonths": app.available_months(),
        "kpis": app.kpi_cards(),
        "services": app.service_stats(),
        "timeline": app.timeline(),
        "analysis": app.analysis(),
        "error": app.state().error(),
    })
}
