//! HotelIntel terminal dashboard
//!
//! Prints the ancillary-service dashboard for the sample data and, with
//! `--analyze`, asks the analysis backend for a strategy.

mod render;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotel_intel_core::config::Settings;
use hotel_intel_core::models::month::MonthKey;
use hotel_intel_core::models::parameters::DisplayCurrency;
use hotel_intel_core::models::state::Action;
use hotel_intel_core::errors::CoreError;
use hotel_intel_core::HotelIntel;

/// How long each progress stage is shown while an analysis runs.
const STAGE_INTERVAL: Duration = Duration::from_millis(1500);

#[derive(Parser, Debug)]
#[command(name = "hotel-intel")]
#[command(version)]
#[command(about = "Ancillary-service performance dashboard and AI strategy client", long_about = None)]
struct Args {
    /// Extra configuration file layered over config/default.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Analysis backend endpoint (overrides configuration)
    #[arg(long)]
    endpoint: Option<String>,

    /// Month shown on the headline cards (YYYY-MM)
    #[arg(short, long)]
    month: Option<MonthKey>,

    /// Display currency (USD or INR)
    #[arg(long)]
    currency: Option<DisplayCurrency>,

    /// Market location sent with the analysis
    #[arg(short, long)]
    location: Option<String>,

    /// Investment budget in INR
    #[arg(long)]
    budget: Option<f64>,

    /// Monthly profit target in USD
    #[arg(long)]
    target_profit: Option<f64>,

    /// Target ROI in percent
    #[arg(long)]
    target_roi: Option<f64>,

    /// Request an AI strategy analysis from the backend
    #[arg(short, long)]
    analyze: bool,

    /// Print the dashboard as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_intel_core=info,hotel_intel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };
    if let Some(endpoint) = &args.endpoint {
        settings.analysis.endpoint = endpoint.clone();
    }
    info!(endpoint = %settings.analysis.endpoint, "configuration loaded");

    let mut dashboard = HotelIntel::from_settings(&settings);
    for action in overrides(&args) {
        dashboard.dispatch(action);
    }

    if args.analyze {
        if let Err(e) = analyze_with_progress(&mut dashboard).await {
            error!(error = %e, "analysis request failed");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&render::snapshot(&dashboard))?);
    } else {
        print!("{}", render::dashboard(&dashboard));
    }

    Ok(())
}

/// Run one analysis, advancing the progress stage on a fixed interval and
/// echoing each stage to stderr until the backend answers.
async fn analyze_with_progress(dashboard: &mut HotelIntel) -> Result<(), CoreError> {
    let pending = dashboard.begin_analysis()?;
    let id = pending.id();
    let analysis = pending.run();
    tokio::pin!(analysis);

    let mut ticker = tokio::time::interval(STAGE_INTERVAL);
    // The first tick completes immediately.
    ticker.tick().await;

    let mut shown = None;
    let outcome = loop {
        let label = dashboard.state().stage_label();
        if label != shown {
            if let Some(label) = label {
                eprintln!("{label}");
            }
            shown = label;
        }
        tokio::select! {
            outcome = &mut analysis => break outcome,
            _ = ticker.tick() => dashboard.dispatch(Action::AdvanceStage),
        }
    };

    dashboard.complete_analysis(id, outcome)?;
    Ok(())
}

/// Command-line parameter overrides as dashboard actions.
fn overrides(args: &Args) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Some(month) = args.month {
        actions.push(Action::SetSelectedMonth(month));
    }
    if let Some(currency) = args.currency {
        actions.push(Action::SetDisplayCurrency(currency));
    }
    if let Some(location) = &args.location {
        actions.push(Action::SetLocation(location.clone()));
    }
    if let Some(budget) = args.budget {
        actions.push(Action::SetBudget(budget));
    }
    if let Some(target) = args.target_profit {
        actions.push(Action::SetTargetProfit(target));
    }
    if let Some(roi) = args.target_roi {
        actions.push(Action::SetTargetRoi(roi));
    }
    actions
}
