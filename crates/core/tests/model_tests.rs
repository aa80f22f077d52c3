// ═══════════════════════════════════════════════════════════════════
// Model Tests — Holding, Portfolio, PriceLookup, PnlStatus, Settings
// ═══════════════════════════════════════════════════════════════════

use portfolio_tracker_core::errors::CoreError;
use portfolio_tracker_core::models::analytics::PnlStatus;
use portfolio_tracker_core::models::holding::{canonical_ticker, Holding};
use portfolio_tracker_core::models::portfolio::Portfolio;
use portfolio_tracker_core::models::price::PriceLookup;
use portfolio_tracker_core::models::settings::{ProviderKind, Settings, DEFAULT_DATA_FILE};

// ═══════════════════════════════════════════════════════════════════
// Holding
// ═══════════════════════════════════════════════════════════════════

mod holding {
    use super::*;

    #[test]
    fn ticker_is_uppercased() {
        let h = Holding::new("aapl", 10.0, 100.0, "2024-01-01").unwrap();
        assert_eq!(h.ticker, "AAPL");
    }

    #[test]
    fn ticker_is_trimmed() {
        let h = Holding::new("  tsla \n", 1.0, 1.0, "x").unwrap();
        assert_eq!(h.ticker, "TSLA");
    }

    #[test]
    fn purchase_date_is_kept_verbatim() {
        let h = Holding::new("BTC", 0.5, 30_000.0, "last tuesday").unwrap();
        assert_eq!(h.purchase_date, "last tuesday");
    }

    #[test]
    fn zero_price_is_allowed() {
        let h = Holding::new("XYZ", 10.0, 0.0, "2024-01-01").unwrap();
        assert_eq!(h.cost(), 0.0);
    }

    #[test]
    fn fractional_shares_are_allowed() {
        let h = Holding::new("ETH", 0.25, 2000.0, "2024-01-01").unwrap();
        assert_eq!(h.cost(), 500.0);
    }

    #[test]
    fn empty_ticker_rejected() {
        let err = Holding::new("   ", 1.0, 1.0, "d").unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn zero_shares_rejected() {
        let err = Holding::new("AAPL", 0.0, 1.0, "d").unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn negative_shares_rejected() {
        assert!(Holding::new("AAPL", -1.0, 1.0, "d").is_err());
    }

    #[test]
    fn nan_shares_rejected() {
        assert!(Holding::new("AAPL", f64::NAN, 1.0, "d").is_err());
    }

    #[test]
    fn negative_price_rejected() {
        let err = Holding::new("AAPL", 1.0, -0.01, "d").unwrap_err();
        assert!(err.to_string().contains("Purchase price"));
    }

    #[test]
    fn infinite_price_rejected() {
        assert!(Holding::new("AAPL", 1.0, f64::INFINITY, "d").is_err());
    }

    #[test]
    fn matches_is_case_insensitive_and_exact() {
        let h = Holding::new("AAPL", 1.0, 1.0, "d").unwrap();
        assert!(h.matches("aapl"));
        assert!(h.matches(" AaPl "));
        assert!(!h.matches("AAP"));
        assert!(!h.matches("AAPLX"));
    }

    #[test]
    fn canonical_ticker_helper() {
        assert_eq!(canonical_ticker(" brk.b "), "BRK.B");
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let h = Holding::new("aapl", 10.0, 150.5, "2024-01-01").unwrap();
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["ticker"], "AAPL");
        assert_eq!(json["shares"], 10.0);
        assert_eq!(json["purchase_price"], 150.5);
        assert_eq!(json["purchase_date"], "2024-01-01");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Portfolio
// ═══════════════════════════════════════════════════════════════════

mod portfolio {
    use super::*;

    fn lots() -> Portfolio {
        Portfolio::from(vec![
            Holding::new("TSLA", 1.0, 1.0, "d").unwrap(),
            Holding::new("AAPL", 1.0, 1.0, "d").unwrap(),
            Holding::new("TSLA", 2.0, 1.0, "d").unwrap(),
            Holding::new("GOOG", 1.0, 1.0, "d").unwrap(),
        ])
    }

    #[test]
    fn default_is_empty() {
        let p = Portfolio::default();
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert!(p.tickers().is_empty());
    }

    #[test]
    fn tickers_in_first_appearance_order() {
        assert_eq!(lots().tickers(), vec!["TSLA", "AAPL", "GOOG"]);
    }

    #[test]
    fn serializes_as_bare_array() {
        let json = serde_json::to_value(lots()).unwrap();
        assert!(json.is_array());
        assert_eq!(json.as_array().unwrap().len(), 4);
        assert_eq!(json[0]["ticker"], "TSLA");
    }

    #[test]
    fn deserializes_from_bare_array() {
        let p: Portfolio = serde_json::from_str(
            r#"[{"ticker":"AAPL","shares":10,"purchase_price":100,"purchase_date":"2024-01-01"}]"#,
        )
        .unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.holdings[0].shares, 10.0);
    }

    #[test]
    fn canonicalize_uppercases_in_place() {
        let mut p: Portfolio = serde_json::from_str(
            r#"[{"ticker":"aapl","shares":1,"purchase_price":1,"purchase_date":"d"}]"#,
        )
        .unwrap();
        p.canonicalize();
        assert_eq!(p.holdings[0].ticker, "AAPL");
    }
}

// ═══════════════════════════════════════════════════════════════════
// PriceLookup / PnlStatus
// ═══════════════════════════════════════════════════════════════════

mod price_lookup {
    use super::*;

    #[test]
    fn available_has_price() {
        let p = PriceLookup::Available(12.5);
        assert!(p.is_available());
        assert_eq!(p.price(), Some(12.5));
    }

    #[test]
    fn unavailable_has_no_price() {
        let p = PriceLookup::Unavailable("rate limited".into());
        assert!(!p.is_available());
        assert_eq!(p.price(), None);
    }
}

mod pnl_status {
    use super::*;

    #[test]
    fn break_even_is_gain() {
        assert_eq!(PnlStatus::from_pnl(0.0), PnlStatus::Gain);
    }

    #[test]
    fn negative_is_loss() {
        assert_eq!(PnlStatus::from_pnl(-0.01), PnlStatus::Loss);
    }

    #[test]
    fn display() {
        assert_eq!(PnlStatus::Gain.to_string(), "Gain");
        assert_eq!(PnlStatus::Loss.to_string(), "Loss");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.data_file.to_str(), Some(DEFAULT_DATA_FILE));
        assert_eq!(s.provider, ProviderKind::Auto);
        assert!(s.api_keys.is_empty());
    }

    #[test]
    fn new_sets_data_file_only() {
        let s = Settings::new("/tmp/x.json");
        assert_eq!(s.data_file.to_str(), Some("/tmp/x.json"));
        assert_eq!(s.provider, ProviderKind::Auto);
    }

    #[test]
    fn provider_kind_display() {
        assert_eq!(ProviderKind::Auto.to_string(), "auto");
        assert_eq!(ProviderKind::YahooFinance.to_string(), "yahoo");
        assert_eq!(ProviderKind::AlphaVantage.to_string(), "alpha-vantage");
        assert_eq!(ProviderKind::Offline.to_string(), "offline");
    }
}
