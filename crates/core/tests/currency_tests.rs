// ═══════════════════════════════════════════════════════════════════
// Currency Tests — fixed-rate conversion, derived figures,
// display formatting
// ═══════════════════════════════════════════════════════════════════

use hotel_intel_core::models::parameters::DisplayCurrency;
use hotel_intel_core::services::currency_service::{CurrencyService, INR_PER_GBP, USD_TO_INR};

fn svc() -> CurrencyService {
    CurrencyService::new()
}

// ── Conversion ──────────────────────────────────────────────────────

mod conversion {
    use super::*;

    #[test]
    fn usd_to_inr_uses_fixed_rate() {
        assert_eq!(USD_TO_INR, 83.5);
        assert_eq!(svc().usd_to_inr(100.0), 8350.0);
    }

    #[test]
    fn round_trip_usd_inr_usd() {
        for value in [0.0, 1.0, 12.34, 45000.0, 1_234_567.89, -42.0] {
            let back = svc().inr_to_usd(svc().usd_to_inr(value));
            assert!((back - value).abs() < 1e-9, "{value} round-tripped to {back}");
        }
    }

    #[test]
    fn inr_to_gbp_divides_by_fixed_rate() {
        assert_eq!(INR_PER_GBP, 108.0);
        assert_eq!(svc().inr_to_gbp(10_800.0), 100.0);
    }

    #[test]
    fn budget_gbp_rounds_to_whole_pounds() {
        // 5,000,000 / 108 = 46296.296...
        assert_eq!(svc().budget_gbp(5_000_000.0), 46296.0);
    }

    #[test]
    fn target_profit_inr_rounds_to_whole_rupees() {
        assert_eq!(svc().target_profit_inr(15_000.0), 1_252_500.0);
        // 0.01 * 83.5 = 0.835 → 1
        assert_eq!(svc().target_profit_inr(0.01), 1.0);
    }

    #[test]
    fn scale_per_currency() {
        assert_eq!(svc().scale(DisplayCurrency::Usd), 1.0);
        assert_eq!(svc().scale(DisplayCurrency::Inr), USD_TO_INR);
    }
}

// ── Formatting ──────────────────────────────────────────────────────

mod formatting {
    use super::*;

    #[test]
    fn usd_western_grouping() {
        assert_eq!(svc().format_amount(1_234_567.0, DisplayCurrency::Usd), "$1,234,567");
        assert_eq!(svc().format_amount(999.0, DisplayCurrency::Usd), "$999");
        assert_eq!(svc().format_amount(1000.0, DisplayCurrency::Usd), "$1,000");
        assert_eq!(svc().format_amount(0.0, DisplayCurrency::Usd), "$0");
    }

    #[test]
    fn inr_indian_grouping() {
        assert_eq!(svc().format_amount(5_000_000.0, DisplayCurrency::Inr), "₹50,00,000");
        assert_eq!(svc().format_amount(123_456_789.0, DisplayCurrency::Inr), "₹12,34,56,789");
        assert_eq!(svc().format_amount(1_000.0, DisplayCurrency::Inr), "₹1,000");
        assert_eq!(svc().format_amount(100.0, DisplayCurrency::Inr), "₹100");
    }

    #[test]
    fn zero_decimals() {
        assert_eq!(svc().format_amount(1234.4, DisplayCurrency::Usd), "$1,234");
        assert_eq!(svc().format_amount(1234.5, DisplayCurrency::Usd), "$1,235");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(svc().format_amount(-1234.0, DisplayCurrency::Usd), "-$1,234");
        assert_eq!(svc().format_amount(-0.2, DisplayCurrency::Usd), "$0");
    }

    #[test]
    fn format_value_usd_input_in_inr() {
        // 45,000 USD → 37,57,500 INR
        assert_eq!(
            svc().format_value(45_000.0, true, DisplayCurrency::Inr),
            "₹37,57,500"
        );
    }

    #[test]
    fn format_value_inr_input_in_usd() {
        // 8,350 INR → 100 USD
        assert_eq!(svc().format_value(8_350.0, false, DisplayCurrency::Usd), "$100");
    }

    #[test]
    fn format_value_inr_input_in_inr_is_unchanged() {
        assert_eq!(
            svc().format_value(5_000_000.0, false, DisplayCurrency::Inr),
            "₹50,00,000"
        );
    }

    #[test]
    fn axis_labels() {
        assert_eq!(svc().format_axis(2_500_000.0, DisplayCurrency::Inr), "₹2.5M");
        assert_eq!(svc().format_axis(1_000_000.0, DisplayCurrency::Usd), "$1.0M");
        assert_eq!(svc().format_axis(45_000.0, DisplayCurrency::Usd), "$45K");
        assert_eq!(svc().format_axis(44_500.0, DisplayCurrency::Usd), "$45K");
        assert_eq!(svc().format_axis(500.0, DisplayCurrency::Usd), "$500");
        assert_eq!(svc().format_axis(0.0, DisplayCurrency::Inr), "₹0");
    }

    #[test]
    fn percent_change_labels() {
        assert_eq!(svc().format_percent_change(112.0), "+112.0%");
        assert_eq!(svc().format_percent_change(-36.206_896), "-36.2%");
        assert_eq!(svc().format_percent_change(0.0), "+0.0%");
    }
}
