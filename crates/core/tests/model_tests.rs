// ═══════════════════════════════════════════════════════════════════
// Model Tests — AssetPricing, Snapshot, PriceQuote, DashboardSettings
// ═══════════════════════════════════════════════════════════════════

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;

use flare_tvl_core::errors::CoreError;
use flare_tvl_core::models::asset::{AssetConfig, AssetEntry, AssetPricing};
use flare_tvl_core::models::price::{PriceQuote, PriceSource};
use flare_tvl_core::models::protocol::ProtocolEntry;
use flare_tvl_core::models::settings::DashboardSettings;
use flare_tvl_core::models::snapshot::Snapshot;

fn entry(symbol: &str, locked: f64) -> AssetEntry {
    AssetEntry {
        symbol: symbol.into(),
        locked_value_usd: locked,
        unit_price_usd: 1.0,
        location: "somewhere".into(),
    }
}

fn quote() -> PriceQuote {
    PriceQuote::live("ripple", "XRP", 2.5, "Mock")
}

// ═══════════════════════════════════════════════════════════════════
// AssetPricing / AssetConfig
// ═══════════════════════════════════════════════════════════════════

mod asset_pricing {
    use super::*;

    #[test]
    fn reference_takes_live_price() {
        assert_eq!(AssetPricing::Reference.unit_price(2.31), 2.31);
    }

    #[test]
    fn fixed_ignores_live_price() {
        let pricing = AssetPricing::Fixed { price_usd: 0.025 };
        assert_eq!(pricing.unit_price(2.31), 0.025);
    }

    #[test]
    fn constructors_set_pricing() {
        let r = AssetConfig::reference("FXRP", 10.0, "Kinetic");
        assert_eq!(r.pricing, AssetPricing::Reference);
        let f = AssetConfig::fixed("FLR", 10.0, 0.02, "Validators");
        assert_eq!(f.pricing, AssetPricing::Fixed { price_usd: 0.02 });
        assert_eq!(f.location, "Validators");
    }

    #[test]
    fn symbol_case_is_preserved() {
        let a = AssetConfig::reference("stXRP", 1.0, "Firelight");
        assert_eq!(a.symbol, "stXRP");
    }

    #[test]
    fn pricing_serializes_with_kind_tag() {
        let json = serde_json::to_value(AssetPricing::Fixed { price_usd: 0.5 }).unwrap();
        assert_eq!(json["kind"], "fixed");
        assert_eq!(json["price_usd"], 0.5);
        let json = serde_json::to_value(AssetPricing::Reference).unwrap();
        assert_eq!(json["kind"], "reference");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Snapshot
// ═══════════════════════════════════════════════════════════════════

mod snapshot {
    use super::*;

    #[test]
    fn total_is_sum_of_two_assets() {
        let s = Snapshot::new(vec![entry("A", 100.0), entry("B", 50.0)], quote(), vec![]);
        assert_eq!(s.total_locked_value_usd(), 150.0);
        assert_eq!(s.assets().len(), 2);
    }

    #[test]
    fn total_matches_sum_for_many_tables() {
        let mut rng = StdRng::seed_from_u64(0x2545_F491_4F6C_DD1D);
        for size in 0..40 {
            let assets: Vec<AssetEntry> = (0..size)
                .map(|i| entry(&format!("T{i}"), rng.gen_range(0.0..1e9)))
                .collect();
            let expected: f64 = assets.iter().map(|a| a.locked_value_usd).sum();
            let s = Snapshot::new(assets, quote(), vec![]);
            assert_eq!(s.total_locked_value_usd(), expected, "table of size {size}");
        }
    }

    #[test]
    fn empty_snapshot_has_zero_total() {
        let s = Snapshot::empty(PriceQuote::fallback("ripple", "XRP", 2.18));
        assert!(s.is_empty());
        assert_eq!(s.total_locked_value_usd(), 0.0);
        assert!(s.protocols().is_empty());
        assert_eq!(s.reference_price().price_usd, 2.18);
    }

    #[test]
    fn assets_keep_table_order() {
        let s = Snapshot::new(
            vec![entry("Z", 1.0), entry("A", 2.0), entry("M", 3.0)],
            quote(),
            vec![],
        );
        let symbols: Vec<&str> = s.assets().iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["Z", "A", "M"]);
    }

    #[test]
    fn lookup_by_symbol() {
        let s = Snapshot::new(vec![entry("A", 100.0), entry("B", 50.0)], quote(), vec![]);
        assert_eq!(s.asset("B").unwrap().locked_value_usd, 50.0);
        assert!(s.asset("C").is_none());
        assert!(s.asset("a").is_none(), "lookup is case-sensitive");
    }

    #[test]
    fn protocols_are_carried() {
        let s = Snapshot::new(
            vec![entry("A", 1.0)],
            quote(),
            vec![ProtocolEntry::new("Kinetic", 80.0)],
        );
        assert_eq!(s.protocols()[0].name, "Kinetic");
    }

    #[test]
    fn serializes_total_and_assets() {
        let s = Snapshot::new(vec![entry("A", 100.0), entry("B", 50.0)], quote(), vec![]);
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["total_locked_value_usd"], 150.0);
        assert_eq!(json["assets"][1]["symbol"], "B");
        assert_eq!(json["reference_price"]["source"]["kind"], "live");
    }
}

// ═══════════════════════════════════════════════════════════════════
// PriceQuote
// ═══════════════════════════════════════════════════════════════════

mod price_quote {
    use super::*;

    #[test]
    fn live_quote() {
        let q = PriceQuote::live("ripple", "XRP", 2.4, "CoinGecko");
        assert!(q.is_live());
        assert_eq!(q.provider(), Some("CoinGecko"));
        assert_eq!(
            q.source,
            PriceSource::Live {
                provider: "CoinGecko".into()
            }
        );
    }

    #[test]
    fn fallback_quote() {
        let q = PriceQuote::fallback("ripple", "XRP", 2.18);
        assert!(!q.is_live());
        assert_eq!(q.provider(), None);
        assert_eq!(q.price_usd, 2.18);
        assert_eq!(q.symbol, "XRP");
    }
}

// ═══════════════════════════════════════════════════════════════════
// DashboardSettings
// ═══════════════════════════════════════════════════════════════════

mod settings_defaults {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        DashboardSettings::default().validate().unwrap();
    }

    #[test]
    fn default_values() {
        let s = DashboardSettings::default();
        assert_eq!(s.title, "Flare TVL Dashboard");
        assert_eq!(s.reference_asset.id, "ripple");
        assert_eq!(s.reference_asset.symbol, "XRP");
        assert_eq!(s.fallback_price_usd, 2.18);
        assert_eq!(s.refresh_interval_secs, 60);
        assert_eq!(s.refresh_interval(), std::time::Duration::from_secs(60));
        assert_eq!(s.change_24h_label, "+0.70%");
        assert_eq!(s.highlighted_asset, "FXRP");
        assert_eq!(s.current_trend_label, "Dec 2025");
    }

    #[test]
    fn default_asset_table() {
        let s = DashboardSettings::default();
        let symbols: Vec<&str> = s.assets.iter().map(|a| a.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["FXRP", "stXRP", "WFLR", "rFLR", "FLR"]);
        assert_eq!(s.assets[0].locked_value_usd, 149_579_262.0);
        assert_eq!(s.assets[0].pricing, AssetPricing::Reference);
        assert_eq!(s.assets[1].pricing, AssetPricing::Reference);
        assert_eq!(s.assets[4].pricing, AssetPricing::Fixed { price_usd: 0.025 });
    }

    #[test]
    fn default_protocols_and_history() {
        let s = DashboardSettings::default();
        assert_eq!(s.protocols.len(), 5);
        assert_eq!(s.protocols[4].name, "Validators");
        assert_eq!(s.trend_history.len(), 2);
        assert_eq!(s.trend_history[0].label, "Oct 2025");
        assert_eq!(s.trend_history[1].value_millions, 150.0);
    }
}

mod settings_validation {
    use super::*;

    fn assert_invalid(settings: DashboardSettings, needle: &str) {
        match settings.validate() {
            Err(CoreError::InvalidSettings(msg)) => {
                assert!(msg.contains(needle), "message '{msg}' should mention '{needle}'")
            }
            other => panic!("expected InvalidSettings, got {other:?}"),
        }
    }

    #[test]
    fn zero_interval_rejected() {
        let mut s = DashboardSettings::default();
        s.refresh_interval_secs = 0;
        assert_invalid(s, "refresh_interval_secs");
    }

    #[test]
    fn non_positive_fallback_rejected() {
        let mut s = DashboardSettings::default();
        s.fallback_price_usd = 0.0;
        assert_invalid(s, "fallback_price_usd");

        let mut s = DashboardSettings::default();
        s.fallback_price_usd = f64::NAN;
        assert_invalid(s, "fallback_price_usd");
    }

    #[test]
    fn empty_reference_id_rejected() {
        let mut s = DashboardSettings::default();
        s.reference_asset.id = "  ".into();
        assert_invalid(s, "reference_asset.id");
    }

    #[test]
    fn empty_asset_table_rejected() {
        let mut s = DashboardSettings::default();
        s.assets.clear();
        assert_invalid(s, "at least one asset");
    }

    #[test]
    fn duplicate_symbol_rejected() {
        let mut s = DashboardSettings::default();
        s.assets.push(AssetConfig::reference("FXRP", 1.0, "dup"));
        assert_invalid(s, "duplicate asset symbol 'FXRP'");
    }

    #[test]
    fn negative_locked_value_rejected() {
        let mut s = DashboardSettings::default();
        s.assets[2].locked_value_usd = -1.0;
        assert_invalid(s, "WFLR");
    }

    #[test]
    fn infinite_locked_value_rejected() {
        let mut s = DashboardSettings::default();
        s.assets[0].locked_value_usd = f64::INFINITY;
        assert_invalid(s, "FXRP");
    }

    #[test]
    fn zero_fixed_price_rejected() {
        let mut s = DashboardSettings::default();
        s.assets[3].pricing = AssetPricing::Fixed { price_usd: 0.0 };
        assert_invalid(s, "rFLR");
    }

    #[test]
    fn negative_protocol_value_rejected() {
        let mut s = DashboardSettings::default();
        s.protocols[0].locked_value_usd = -5.0;
        assert_invalid(s, "Kinetic");
    }

    #[test]
    fn nan_trend_point_rejected() {
        let mut s = DashboardSettings::default();
        s.trend_history[1].value_millions = f64::NAN;
        assert_invalid(s, "Nov 2025");
    }

    #[test]
    fn zero_locked_value_allowed() {
        let mut s = DashboardSettings::default();
        s.assets[0].locked_value_usd = 0.0;
        s.validate().unwrap();
    }
}

mod settings_loading {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let s = DashboardSettings::from_json_str("{}").unwrap();
        assert_eq!(s, DashboardSettings::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let s = DashboardSettings::from_json_str(
            r#"{ "refresh_interval_secs": 30, "fallback_price_usd": 1.5 }"#,
        )
        .unwrap();
        assert_eq!(s.refresh_interval_secs, 30);
        assert_eq!(s.fallback_price_usd, 1.5);
        assert_eq!(s.assets.len(), 5);
        assert_eq!(s.title, "Flare TVL Dashboard");
    }

    #[test]
    fn partial_reference_asset_keeps_default_symbol() {
        let s = DashboardSettings::from_json_str(r#"{ "reference_asset": { "id": "flare-networks" } }"#)
            .unwrap();
        assert_eq!(s.reference_asset.id, "flare-networks");
        assert_eq!(s.reference_asset.symbol, "XRP");
    }

    #[test]
    fn custom_asset_table() {
        let s = DashboardSettings::from_json_str(
            r#"{
                "assets": [
                    { "symbol": "A", "locked_value_usd": 100.0, "location": "x",
                      "pricing": { "kind": "reference" } },
                    { "symbol": "B", "locked_value_usd": 50.0, "location": "y",
                      "pricing": { "kind": "fixed", "price_usd": 0.1 } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(s.assets.len(), 2);
        assert_eq!(s.assets[1].pricing, AssetPricing::Fixed { price_usd: 0.1 });
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        let err = DashboardSettings::from_json_str("{ nope").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn invalid_values_rejected_on_load() {
        let err = DashboardSettings::from_json_str(r#"{ "assets": [] }"#).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSettings(_)));
    }

    #[test]
    fn from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "title": "Songbird TVL Dashboard" }}"#).unwrap();
        let s = DashboardSettings::from_json_file(file.path()).unwrap();
        assert_eq!(s.title, "Songbird TVL Dashboard");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DashboardSettings::from_json_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }

    #[test]
    fn json_roundtrip_of_defaults() {
        let json = serde_json::to_string(&DashboardSettings::default()).unwrap();
        let back = DashboardSettings::from_json_str(&json).unwrap();
        assert_eq!(back, DashboardSettings::default());
    }
}
