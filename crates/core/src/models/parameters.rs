use serde::{Deserialize, Serialize};

use super::month::MonthKey;

/// Currency the dashboard renders amounts in. Transaction data is in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayCurrency {
    Usd,
    Inr,
}

impl DisplayCurrency {
    #[must_use]
    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayCurrency::Usd => "$",
            DisplayCurrency::Inr => "₹",
        }
    }

    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DisplayCurrency::Usd => "USD",
            DisplayCurrency::Inr => "INR",
        }
    }
}

impl std::fmt::Display for DisplayCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for DisplayCurrency {
    type Err = crate::errors::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(DisplayCurrency::Usd),
            "INR" => Ok(DisplayCurrency::Inr),
            other => Err(crate::errors::CoreError::Validation(format!(
                "Unsupported display currency '{other}': expected USD or INR"
            ))),
        }
    }
}

/// User-adjustable dashboard inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    /// Capital available for investment, in INR.
    pub budget_inr: f64,
    /// Monthly profit target, in USD.
    pub target_monthly_profit: f64,
    /// Target return on investment, in percent.
    pub target_roi: f64,
    /// Market the analysis is run for.
    pub location: String,
    pub display_currency: DisplayCurrency,
    /// Month shown on the headline cards.
    pub selected_month: MonthKey,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            budget_inr: 5_000_000.0,
            target_monthly_profit: 15_000.0,
            target_roi: 20.0,
            location: "San Francisco".to_string(),
            display_currency: DisplayCurrency::Inr,
            // Latest month in the sample data.
            selected_month: MonthKey::LATEST_SAMPLE,
        }
    }
}
