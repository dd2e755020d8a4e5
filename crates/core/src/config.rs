//! Runtime configuration.
//!
//! Layers, lowest priority first: `config/default.toml` (optional), an
//! explicit file (optional), then `HOTEL_INTEL__*` environment variables,
//! e.g. `HOTEL_INTEL__ANALYSIS__ENDPOINT`.

use std::path::Path;

use serde::Deserialize;

use crate::errors::CoreError;
use crate::models::month::MonthKey;
use crate::models::parameters::{DisplayCurrency, Parameters};
use crate::providers::http::DEFAULT_ENDPOINT;

const ENV_PREFIX: &str = "HOTEL_INTEL";

/// Top-level settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub defaults: DefaultParameters,
}

/// Where analysis requests go.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Initial dashboard parameters. Missing keys fall back to [`Parameters::default`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DefaultParameters {
    pub location: Option<String>,
    pub budget_inr: Option<f64>,
    pub target_monthly_profit: Option<f64>,
    pub target_roi: Option<f64>,
    pub display_currency: Option<DisplayCurrency>,
    pub selected_month: Option<MonthKey>,
}

impl DefaultParameters {
    pub fn to_parameters(&self) -> Parameters {
        let base = Parameters::default();
        Parameters {
            budget_inr: self.budget_inr.unwrap_or(base.budget_inr),
            target_monthly_profit: self
                .target_monthly_profit
                .unwrap_or(base.target_monthly_profit),
            target_roi: self.target_roi.unwrap_or(base.target_roi),
            location: self.location.clone().unwrap_or(base.location),
            display_currency: self.display_currency.unwrap_or(base.display_currency),
            selected_month: self.selected_month.unwrap_or(base.selected_month),
        }
    }
}

impl Settings {
    /// Load from `config/default.toml` and the environment.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_with(None)
    }

    /// Load as [`Settings::load`], with `path` layered on top of the default file.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        Self::load_with(Some(path))
    }

    /// Parse settings from a TOML string only (no files, no environment).
    pub fn from_toml_str(toml: &str) -> Result<Self, CoreError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    fn load_with(path: Option<&Path>) -> Result<Self, CoreError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
