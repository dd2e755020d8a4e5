use crate::models::parameters::DisplayCurrency;

/// Fixed USD → INR rate.
pub const USD_TO_INR: f64 = 83.5;

/// Fixed INR per GBP, used to derive the GBP view of the budget.
pub const INR_PER_GBP: f64 = 108.0;

/// Converts between the dashboard's currencies and formats amounts for display.
///
/// Rates are fixed constants; conversion is plain float multiplication or
/// division. Rounding only happens in the formatting helpers and in the
/// whole-unit derived figures (`budget_gbp`, `target_profit_inr`).
pub struct CurrencyService;

impl CurrencyService {
    pub fn new() -> Self {
        Self
    }

    /// Multiplier that turns a USD amount into `currency`.
    #[must_use]
    pub fn scale(&self, currency: DisplayCurrency) -> f64 {
        match currency {
            DisplayCurrency::Usd => 1.0,
            DisplayCurrency::Inr => USD_TO_INR,
        }
    }

    #[must_use]
    pub fn usd_to_inr(&self, usd: f64) -> f64 {
        usd * USD_TO_INR
    }

    #[must_use]
    pub fn inr_to_usd(&self, inr: f64) -> f64 {
        inr / USD_TO_INR
    }

    #[must_use]
    pub fn inr_to_gbp(&self, inr: f64) -> f64 {
        inr / INR_PER_GBP
    }

    /// Budget in whole pounds.
    #[must_use]
    pub fn budget_gbp(&self, budget_inr: f64) -> f64 {
        self.inr_to_gbp(budget_inr).round()
    }

    /// USD profit target in whole rupees.
    #[must_use]
    pub fn target_profit_inr(&self, target_usd: f64) -> f64 {
        self.usd_to_inr(target_usd).round()
    }

    /// Format an amount in the display currency with no decimals.
    ///
    /// `is_usd_input` says whether `value` is in USD (transaction figures) or
    /// already in INR (budget, investment allocations).
    /// Rupees use Indian digit grouping (`₹50,00,000`), dollars western (`$1,234`).
    #[must_use]
    pub fn format_value(&self, value: f64, is_usd_input: bool, currency: DisplayCurrency) -> String {
        let base_usd = if is_usd_input { value } else { self.inr_to_usd(value) };
        let amount = base_usd * self.scale(currency);
        self.format_amount(amount, currency)
    }

    /// Format an amount that is already in `currency`.
    #[must_use]
    pub fn format_amount(&self, amount: f64, currency: DisplayCurrency) -> String {
        let rounded = amount.round();
        let sign = if rounded < 0.0 { "-" } else { "" };
        let digits = format!("{:.0}", rounded.abs());
        let grouped = match currency {
            DisplayCurrency::Usd => group_western(&digits),
            DisplayCurrency::Inr => group_indian(&digits),
        };
        format!("{sign}{}{grouped}", currency.symbol())
    }

    /// Compact chart-axis label: `₹1.2M`, `$45K`, `$500`.
    #[must_use]
    pub fn format_axis(&self, value: f64, currency: DisplayCurrency) -> String {
        let symbol = currency.symbol();
        if value >= 1_000_000.0 {
            let millions = (value / 100_000.0).round() / 10.0;
            format!("{symbol}{millions:.1}M")
        } else if value >= 1_000.0 {
            let thousands = (value / 1_000.0).round();
            format!("{symbol}{thousands}K")
        } else {
            format!("{symbol}{value}")
        }
    }

    /// Signed percentage with one decimal, e.g. `+112.0%`.
    #[must_use]
    pub fn format_percent_change(&self, change: f64) -> String {
        let sign = if change >= 0.0 { "+" } else { "-" };
        format!("{sign}{:.1}%", change.abs())
    }
}

impl Default for CurrencyService {
    fn default() -> Self {
        Self::new()
    }
}

fn group_western(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Last three digits, then groups of two: 5000000 → 50,00,000.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head.len() - i) % 2 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out.push(',');
    out.push_str(tail);
    out
}
